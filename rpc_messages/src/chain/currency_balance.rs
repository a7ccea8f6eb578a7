use crate::RpcCommand;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct CurrencyBalanceArgs {
    pub code: String,
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl CurrencyBalanceArgs {
    pub fn new(code: impl Into<String>, account: impl Into<String>, symbol: Option<String>) -> Self {
        Self {
            code: code.into(),
            account: account.into(),
            symbol,
        }
    }
}

impl RpcCommand {
    pub fn get_currency_balance(args: CurrencyBalanceArgs) -> Self {
        Self::GetCurrencyBalance(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_currency_balance_args() {
        let args = CurrencyBalanceArgs::new("eosio.token", "alice", Some("EOS".to_string()));
        let serialized = serde_json::to_value(&args).unwrap();
        assert_eq!(serialized, json!({"code": "eosio.token", "account": "alice", "symbol": "EOS"}));
    }

    #[test]
    fn serialize_currency_balance_args_without_symbol() {
        let args = CurrencyBalanceArgs::new("eosio.token", "alice", None);
        let serialized = serde_json::to_string(&args).unwrap();
        assert_eq!(serialized, r#"{"code":"eosio.token","account":"alice"}"#);
    }

    #[test]
    fn deserialize_currency_balance_args() {
        let json = r#"{"code": "eosio.token", "account": "bob"}"#;
        let args: CurrencyBalanceArgs = serde_json::from_str(json).unwrap();
        assert_eq!(args, CurrencyBalanceArgs::new("eosio.token", "bob", None));
    }
}
