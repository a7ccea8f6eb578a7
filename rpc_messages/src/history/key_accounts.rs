use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct KeyAccountsArgs {
    pub public_key: String,
}

impl KeyAccountsArgs {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
        }
    }
}

impl RpcCommand {
    pub fn get_key_accounts(public_key: impl Into<String>) -> Self {
        Self::GetKeyAccounts(KeyAccountsArgs::new(public_key))
    }
}
