use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct CurrencyStatsArgs {
    pub code: String,
    pub symbol: String,
}

impl CurrencyStatsArgs {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
        }
    }
}

impl RpcCommand {
    pub fn get_currency_stats(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::GetCurrencyStats(CurrencyStatsArgs::new(code, symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_currency_stats_args() {
        let args = CurrencyStatsArgs::new("eosio.token", "EOS");
        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(serialized, json!({"code": "eosio.token", "symbol": "EOS"}));
    }

    #[test]
    fn deserialize_currency_stats_args() {
        let json = r#"{"code": "eosio.token", "symbol": "SYS"}"#;
        let args: CurrencyStatsArgs = serde_json::from_str(json).unwrap();
        assert_eq!(args, CurrencyStatsArgs::new("eosio.token", "SYS"));
    }
}
