use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct TableByScopeArgs {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}

impl TableByScopeArgs {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            table: None,
            lower_bound: None,
            upper_bound: None,
            limit: None,
            reverse: None,
        }
    }

    pub fn builder(code: impl Into<String>) -> TableByScopeArgsBuilder {
        TableByScopeArgsBuilder { args: Self::new(code) }
    }
}

impl RpcCommand {
    pub fn get_table_by_scope(args: TableByScopeArgs) -> Self {
        Self::GetTableByScope(args)
    }
}

pub struct TableByScopeArgsBuilder {
    args: TableByScopeArgs,
}

impl TableByScopeArgsBuilder {
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.args.table = Some(table.into());
        self
    }

    pub fn lower_bound(mut self, lower_bound: impl Into<String>) -> Self {
        self.args.lower_bound = Some(lower_bound.into());
        self
    }

    pub fn upper_bound(mut self, upper_bound: impl Into<String>) -> Self {
        self.args.upper_bound = Some(upper_bound.into());
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.args.limit = Some(limit);
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.args.reverse = Some(reverse);
        self
    }

    pub fn build(self) -> TableByScopeArgs {
        self.args
    }
}
