use crate::common::{default_true, DEFAULT_LIMIT};
use crate::RpcCommand;
use serde::{Deserialize, Serialize};

/// Encoding of `index_value`, `lower_bound` and `upper_bound` in a kv table query.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KvEncodeType {
    /// Arbitrary binary index values
    #[default]
    Bytes,
    String,
    Dec,
    Hex,
    /// Account/contract name encoding
    Name,
}

/// Arguments of `get_kv_table_rows`.
///
/// `index_value` selects an exact match; when it is set the bounds are ignored
/// by the node. Both bounds use the encoding given by `encode_type`.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct KvTableRowsArgs {
    /// Contract that owns the kv table
    pub code: String,
    pub table: String,
    /// Name of the primary or a secondary index
    pub index_name: String,
    #[serde(default)]
    pub encode_type: KvEncodeType,
    #[serde(default = "default_true")]
    pub json: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_value: Option<String>,
    /// Optional if `reverse` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    /// Optional if `reverse` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}

fn default_limit() -> i32 {
    DEFAULT_LIMIT as i32
}

impl KvTableRowsArgs {
    pub fn new(code: impl Into<String>, table: impl Into<String>, index_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            table: table.into(),
            index_name: index_name.into(),
            encode_type: KvEncodeType::Bytes,
            json: true,
            index_value: None,
            lower_bound: None,
            upper_bound: None,
            limit: default_limit(),
            reverse: None,
        }
    }

    pub fn builder(code: impl Into<String>, table: impl Into<String>, index_name: impl Into<String>) -> KvTableRowsArgsBuilder {
        KvTableRowsArgsBuilder {
            args: Self::new(code, table, index_name),
        }
    }
}

impl RpcCommand {
    pub fn get_kv_table_rows(args: KvTableRowsArgs) -> Self {
        Self::GetKvTableRows(args)
    }
}

pub struct KvTableRowsArgsBuilder {
    args: KvTableRowsArgs,
}

impl KvTableRowsArgsBuilder {
    pub fn encode_type(mut self, encode_type: KvEncodeType) -> Self {
        self.args.encode_type = encode_type;
        self
    }

    pub fn json(mut self, json: bool) -> Self {
        self.args.json = json;
        self
    }

    pub fn index_value(mut self, index_value: impl Into<String>) -> Self {
        self.args.index_value = Some(index_value.into());
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
        self.args.limit = limit;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.args.reverse = Some(reverse);
        self
    }

    pub fn build(self) -> KvTableRowsArgs {
        self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_kv_table_rows_args_with_defaults() {
        let args = KvTableRowsArgs::new("todo", "todo.kv", "uuid");
        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(
            serialized,
            json!({
                "code": "todo",
                "table": "todo.kv",
                "index_name": "uuid",
                "encode_type": "bytes",
                "json": true,
                "limit": 10
            })
        );
    }

    #[test]
    fn serialize_kv_table_rows_args_with_bounds() {
        let args = KvTableRowsArgs::builder("todo", "todo.kv", "name")
            .encode_type(KvEncodeType::Name)
            .lower_bound("alice")
            .upper_bound("bob")
            .limit(-1)
            .reverse(false)
            .build();

        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(
            serialized,
            json!({
                "code": "todo",
                "table": "todo.kv",
                "index_name": "name",
                "encode_type": "name",
                "json": true,
                "lower_bound": "alice",
                "upper_bound": "bob",
                "limit": -1,
                "reverse": false
            })
        );
    }

    #[test]
    fn serialize_kv_table_rows_args_exact_match() {
        let args = KvTableRowsArgs::builder("todo", "todo.kv", "uuid")
            .encode_type(KvEncodeType::String)
            .index_value("bf581bee-9f2c-447b-94ad-78e4984b6f51")
            .json(false)
            .build();

        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(serialized["index_value"], json!("bf581bee-9f2c-447b-94ad-78e4984b6f51"));
        assert_eq!(serialized["encode_type"], json!("string"));
        assert_eq!(serialized["json"], json!(false));
    }

    #[test]
    fn encode_type_round_trip() {
        let literals = [
            (KvEncodeType::Bytes, "bytes"),
            (KvEncodeType::String, "string"),
            (KvEncodeType::Dec, "dec"),
            (KvEncodeType::Hex, "hex"),
            (KvEncodeType::Name, "name"),
        ];
        for (encode_type, literal) in literals {
            assert_eq!(serde_json::to_value(encode_type).unwrap(), json!(literal));
            let parsed: KvEncodeType = serde_json::from_value(json!(literal)).unwrap();
            assert_eq!(parsed, encode_type);
        }
    }

    #[test]
    fn deserialize_kv_table_rows_args_fills_defaults() {
        let json = r#"{"code": "todo", "table": "todo.kv", "index_name": "uuid"}"#;
        let args: KvTableRowsArgs = serde_json::from_str(json).unwrap();
        assert_eq!(args, KvTableRowsArgs::new("todo", "todo.kv", "uuid"));
    }
}
