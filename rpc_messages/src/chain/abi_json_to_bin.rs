use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct AbiJsonToBinArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

impl AbiJsonToBinArgs {
    pub fn new(code: impl Into<String>, action: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            code: Some(code.into()),
            action: Some(action.into()),
            args,
        }
    }
}

impl RpcCommand {
    pub fn abi_json_to_bin(args: AbiJsonToBinArgs) -> Self {
        Self::AbiJsonToBin(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_abi_json_to_bin_args() {
        let args = AbiJsonToBinArgs::new("eosio.token", "transfer", vec!["alice".to_string(), "bob".to_string()]);
        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(
            serialized,
            json!({"code": "eosio.token", "action": "transfer", "args": ["alice", "bob"]})
        );
    }

    #[test]
    fn empty_args_serialize_as_array() {
        let serialized = serde_json::to_value(AbiJsonToBinArgs::default()).unwrap();
        assert_eq!(serialized, json!({"args": []}));
    }

    #[test]
    fn deserialize_abi_json_to_bin_args_without_args() {
        let json = r#"{"code": "eosio", "action": "newaccount"}"#;
        let args: AbiJsonToBinArgs = serde_json::from_str(json).unwrap();
        assert_eq!(args, AbiJsonToBinArgs::new("eosio", "newaccount", Vec::new()));
    }
}
