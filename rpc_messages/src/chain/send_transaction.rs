use crate::RpcCommand;
use serde::{Deserialize, Serialize};

/// A signed, packed transaction as accepted by `send_transaction` and `push_transaction`.
#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct SendTransactionArgs {
    #[serde(default)]
    pub signatures: Vec<String>,
    #[serde(default)]
    pub compression: i64,
    #[serde(default)]
    pub packed_context_free_data: String,
    /// Serialized transaction, hex encoded
    #[serde(default)]
    pub packed_trx: String,
}

impl SendTransactionArgs {
    pub fn new(signatures: Vec<String>, compression: i64, packed_context_free_data: impl Into<String>, packed_trx: impl Into<String>) -> Self {
        Self {
            signatures,
            compression,
            packed_context_free_data: packed_context_free_data.into(),
            packed_trx: packed_trx.into(),
        }
    }
}

/// `push_transaction`
pub type PushTransactionArgs = SendTransactionArgs;

impl RpcCommand {
    pub fn send_transaction(args: SendTransactionArgs) -> Self {
        Self::SendTransaction(args)
    }

    pub fn push_transaction(args: PushTransactionArgs) -> Self {
        Self::PushTransaction(args)
    }
}
