use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct AbiBinToJsonArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Hex encoded action data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binargs: Option<String>,
}

impl AbiBinToJsonArgs {
    pub fn new(code: impl Into<String>, action: impl Into<String>, binargs: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            action: Some(action.into()),
            binargs: Some(binargs.into()),
        }
    }
}

impl RpcCommand {
    pub fn abi_bin_to_json(args: AbiBinToJsonArgs) -> Self {
        Self::AbiBinToJson(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_abi_bin_to_json_args() {
        let args = AbiBinToJsonArgs::new("eosio.token", "transfer", "000000008090b1ca");
        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(
            serialized,
            json!({"code": "eosio.token", "action": "transfer", "binargs": "000000008090b1ca"})
        );
    }

    #[test]
    fn serialize_empty_abi_bin_to_json_args() {
        assert_eq!(serde_json::to_string(&AbiBinToJsonArgs::default()).unwrap(), "{}");
    }
}
