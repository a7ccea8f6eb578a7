use crate::chain::SendTransactionArgs;
use crate::common::default_true;
use crate::RpcCommand;
use serde::{Deserialize, Serialize};

/// Arguments of `send_transaction2`: retry options followed by the transaction fields
/// on the same level of the body.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct SendTransaction2Args {
    #[serde(default = "default_true")]
    pub return_failure_trace: bool,
    #[serde(default)]
    pub retry_trx: bool,
    #[serde(default)]
    pub retry_trx_num_blocks: i64,
    #[serde(flatten)]
    pub transaction: SendTransactionArgs,
}

impl SendTransaction2Args {
    pub fn new(transaction: SendTransactionArgs) -> Self {
        Self {
            return_failure_trace: true,
            retry_trx: false,
            retry_trx_num_blocks: 0,
            transaction,
        }
    }

    pub fn builder(transaction: SendTransactionArgs) -> SendTransaction2ArgsBuilder {
        SendTransaction2ArgsBuilder {
            args: Self::new(transaction),
        }
    }
}

impl Default for SendTransaction2Args {
    fn default() -> Self {
        Self::new(SendTransactionArgs::default())
    }
}

impl RpcCommand {
    pub fn send_transaction2(args: SendTransaction2Args) -> Self {
        Self::SendTransaction2(args)
    }
}

pub struct SendTransaction2ArgsBuilder {
    args: SendTransaction2Args,
}

impl SendTransaction2ArgsBuilder {
    pub fn return_failure_trace(mut self, return_failure_trace: bool) -> Self {
        self.args.return_failure_trace = return_failure_trace;
        self
    }

    pub fn retry_trx(mut self, retry_trx: bool) -> Self {
        self.args.retry_trx = retry_trx;
        self
    }

    pub fn retry_trx_num_blocks(mut self, retry_trx_num_blocks: i64) -> Self {
        self.args.retry_trx_num_blocks = retry_trx_num_blocks;
        self
    }

    pub fn build(self) -> SendTransaction2Args {
        self.args
    }
}
