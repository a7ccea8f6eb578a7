use crate::common::Authorization;
use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountsByAuthorizersArgs {
    #[serde(default)]
    pub accounts: Vec<Authorization>,
    #[serde(default)]
    pub keys: Vec<String>,
}

impl AccountsByAuthorizersArgs {
    pub fn new(accounts: Vec<Authorization>, keys: Vec<String>) -> Self {
        Self { accounts, keys }
    }
}

impl RpcCommand {
    pub fn get_accounts_by_authorizers(args: AccountsByAuthorizersArgs) -> Self {
        Self::GetAccountsByAuthorizers(args)
    }
}
