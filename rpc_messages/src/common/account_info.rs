use crate::RpcCommand;
use serde::{Deserialize, Serialize};

/// Request body shared by every endpoint that takes nothing but an account name.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct AccountInfoArgs {
    pub account_name: String,
}

impl AccountInfoArgs {
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
        }
    }
}

/// `get_account`
pub type AccountArgs = AccountInfoArgs;
/// `get_abi`
pub type AbiArgs = AccountInfoArgs;
/// `get_raw_code_and_abi`
pub type RawCodeAndAbiArgs = AccountInfoArgs;
/// `get_code_hash`
pub type CodeHashArgs = AccountInfoArgs;

impl RpcCommand {
    pub fn get_account(account_name: impl Into<String>) -> Self {
        Self::GetAccount(AccountArgs::new(account_name))
    }

    pub fn get_abi(account_name: impl Into<String>) -> Self {
        Self::GetAbi(AbiArgs::new(account_name))
    }

    pub fn get_raw_code_and_abi(account_name: impl Into<String>) -> Self {
        Self::GetRawCodeAndAbi(RawCodeAndAbiArgs::new(account_name))
    }

    pub fn get_code_hash(account_name: impl Into<String>) -> Self {
        Self::GetCodeHash(CodeHashArgs::new(account_name))
    }
}
