use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct ControlledAccountsArgs {
    pub controlling_account: String,
}

impl ControlledAccountsArgs {
    pub fn new(controlling_account: impl Into<String>) -> Self {
        Self {
            controlling_account: controlling_account.into(),
        }
    }
}

impl RpcCommand {
    pub fn get_controlled_accounts(controlling_account: impl Into<String>) -> Self {
        Self::GetControlledAccounts(ControlledAccountsArgs::new(controlling_account))
    }
}
