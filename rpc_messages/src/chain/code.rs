use crate::common::default_true;
use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct CodeArgs {
    pub account_name: String,
    #[serde(default = "default_true")]
    pub code_as_wasm: bool,
}

impl CodeArgs {
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            code_as_wasm: true,
        }
    }

    pub fn with_code_as_wasm(mut self, code_as_wasm: bool) -> Self {
        self.code_as_wasm = code_as_wasm;
        self
    }
}

impl RpcCommand {
    pub fn get_code(args: CodeArgs) -> Self {
        Self::GetCode(args)
    }
}
