use crate::chain::{PushTransactionArgs, SendTransactionArgs};
use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct PushTransactionsArgs {
    #[serde(default)]
    pub transactions: Vec<PushTransactionArgs>,
}

impl PushTransactionsArgs {
    pub fn new(transactions: Vec<PushTransactionArgs>) -> Self {
        Self { transactions }
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct SendTransactionsArgs {
    #[serde(default)]
    pub transactions: Vec<SendTransactionArgs>,
}

impl SendTransactionsArgs {
    pub fn new(transactions: Vec<SendTransactionArgs>) -> Self {
        Self { transactions }
    }
}

impl RpcCommand {
    pub fn push_transactions(transactions: Vec<PushTransactionArgs>) -> Self {
        Self::PushTransactions(PushTransactionsArgs::new(transactions))
    }

    pub fn send_transactions(transactions: Vec<SendTransactionArgs>) -> Self {
        Self::SendTransactions(SendTransactionsArgs::new(transactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_batch_serializes_as_empty_array() {
        let serialized = serde_json::to_string(&SendTransactionsArgs::new(Vec::new())).unwrap();
        assert_eq!(serialized, r#"{"transactions":[]}"#);

        let serialized = serde_json::to_string(&PushTransactionsArgs::default()).unwrap();
        assert_eq!(serialized, r#"{"transactions":[]}"#);
    }

    #[test]
    fn serialize_push_transactions_args() {
        let args = PushTransactionsArgs::new(vec![
            PushTransactionArgs::new(vec!["SIG_K1_a".to_string()], 0, "", "aa"),
            PushTransactionArgs::new(vec!["SIG_K1_b".to_string()], 0, "", "bb"),
        ]);

        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(
            serialized,
            json!({
                "transactions": [
                    {"signatures": ["SIG_K1_a"], "compression": 0, "packed_context_free_data": "", "packed_trx": "aa"},
                    {"signatures": ["SIG_K1_b"], "compression": 0, "packed_context_free_data": "", "packed_trx": "bb"}
                ]
            })
        );
    }

    #[test]
    fn deserialize_send_transactions_args() {
        let json = r#"{"transactions": [{"packed_trx": "aa"}]}"#;
        let args: SendTransactionsArgs = serde_json::from_str(json).unwrap();
        assert_eq!(args.transactions, vec![SendTransactionArgs::new(Vec::new(), 0, "", "aa")]);
    }
}
