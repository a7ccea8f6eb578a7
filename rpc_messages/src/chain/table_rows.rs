use crate::common::{default_index_position, default_true, DEFAULT_INDEX_POSITION, DEFAULT_LIMIT};
use crate::RpcCommand;
use serde::{Deserialize, Serialize};

/// How `lower_bound`/`upper_bound` of a `get_table_rows` query are encoded.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableRowsEncodeType {
    #[default]
    Dec,
    Hex,
}

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct TableRowsArgs {
    pub scope: String,
    pub code: String,
    pub table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_key: Option<String>,
    #[serde(default = "default_true")]
    pub json: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_index_position")]
    pub index_position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(default)]
    pub encode_type: TableRowsEncodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_payer: Option<bool>,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl TableRowsArgs {
    pub fn new(scope: impl Into<String>, code: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            code: code.into(),
            table: table.into(),
            table_key: None,
            json: true,
            lower_bound: None,
            upper_bound: None,
            limit: DEFAULT_LIMIT,
            index_position: DEFAULT_INDEX_POSITION.to_string(),
            key_type: None,
            encode_type: TableRowsEncodeType::Dec,
            reverse: None,
            show_payer: None,
        }
    }

    pub fn builder(scope: impl Into<String>, code: impl Into<String>, table: impl Into<String>) -> TableRowsArgsBuilder {
        TableRowsArgsBuilder {
            args: Self::new(scope, code, table),
        }
    }
}

impl RpcCommand {
    pub fn get_table_rows(args: TableRowsArgs) -> Self {
        Self::GetTableRows(args)
    }
}

pub struct TableRowsArgsBuilder {
    args: TableRowsArgs,
}

impl TableRowsArgsBuilder {
    pub fn table_key(mut self, table_key: impl Into<String>) -> Self {
        self.args.table_key = Some(table_key.into());
        self
    }

    pub fn json(mut self, json: bool) -> Self {
        self.args.json = json;
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

    pub fn limit(mut self, limit: u32) -> Self {
        self.args.limit = limit;
        self
    }

    pub fn index_position(mut self, index_position: impl Into<String>) -> Self {
        self.args.index_position = index_position.into();
        self
    }

    pub fn key_type(mut self, key_type: impl Into<String>) -> Self {
        self.args.key_type = Some(key_type.into());
        self
    }

    pub fn encode_type(mut self, encode_type: TableRowsEncodeType) -> Self {
        self.args.encode_type = encode_type;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.args.reverse = Some(reverse);
        self
    }

    pub fn show_payer(mut self, show_payer: bool) -> Self {
        self.args.show_payer = Some(show_payer);
        self
    }

    pub fn build(self) -> TableRowsArgs {
        self.args
    }
}
