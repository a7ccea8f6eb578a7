use crate::common::default_true;
use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct ProducersArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    pub lower_bound: String,
    #[serde(default = "default_true")]
    pub json: bool,
}

impl ProducersArgs {
    pub fn new(lower_bound: impl Into<String>) -> Self {
        Self {
            limit: None,
            lower_bound: lower_bound.into(),
            json: true,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// `get_scheduled_transactions` pages through the same bounds as `get_producers`.
pub type ScheduledTransactionsArgs = ProducersArgs;

impl RpcCommand {
    pub fn get_producers(args: ProducersArgs) -> Self {
        Self::GetProducers(args)
    }

    pub fn get_scheduled_transactions(args: ScheduledTransactionsArgs) -> Self {
        Self::GetScheduledTransactions(args)
    }
}
