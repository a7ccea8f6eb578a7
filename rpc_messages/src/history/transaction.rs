use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct HistoryTransactionArgs {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_num_hint: Option<i32>,
}

impl HistoryTransactionArgs {
    pub fn new(transaction_id: impl Into<String>, block_num_hint: Option<i32>) -> Self {
        Self {
            id: transaction_id.into(),
            block_num_hint,
        }
    }
}

impl RpcCommand {
    pub fn get_transaction(args: HistoryTransactionArgs) -> Self {
        Self::GetTransaction(args)
    }
}
