use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct HistoryActionsArgs {
    /// Sequence number of the first action, `-1` for the most recent one
    #[serde(rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    pub account_name: String,
}

impl HistoryActionsArgs {
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            position: None,
            offset: None,
            account_name: account_name.into(),
        }
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl RpcCommand {
    pub fn get_actions(args: HistoryActionsArgs) -> Self {
        Self::GetActions(args)
    }
}
