use anyhow::{bail, Context, Result};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const API_VERSION: &str = "v1";

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RpcApi {
    Chain,
    History,
}

/// Every endpoint a request can be sent to. The variant name in snake case is
/// the last segment of the URL path.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    AbiBinToJson,
    AbiJsonToBin,
    GetAbi,
    GetAccount,
    GetAccountsByAuthorizers,
    GetActivatedProtocolFeatures,
    GetBlock,
    GetBlockHeaderState,
    GetBlockInfo,
    GetCode,
    GetCodeHash,
    GetCurrencyBalance,
    GetCurrencyStats,
    GetKvTableRows,
    GetProducers,
    GetRawCodeAndAbi,
    GetScheduledTransactions,
    GetTableByScope,
    GetTableRows,
    PushTransaction,
    PushTransactions,
    SendTransaction,
    #[strum(serialize = "send_transaction2")]
    SendTransaction2,
    SendTransactions,
    GetActions,
    GetTransaction,
    GetKeyAccounts,
    GetControlledAccounts,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    pub fn api(&self) -> RpcApi {
        match self {
            Self::GetActions | Self::GetTransaction | Self::GetKeyAccounts | Self::GetControlledAccounts => RpcApi::History,
            _ => RpcApi::Chain,
        }
    }

    pub fn path(&self) -> String {
        format!("/{}/{}/{}", API_VERSION, self.api(), self.name())
    }

    /// Resolves a `/v1/<api>/<endpoint>` path.
    pub fn from_path(path: &str) -> Result<Self> {
        let mut segments = path.trim_start_matches('/').split('/');
        let (Some(version), Some(api), Some(name), None) = (segments.next(), segments.next(), segments.next(), segments.next()) else {
            bail!("Malformed RPC path: {}", path);
        };

        if version != API_VERSION {
            bail!("Unsupported RPC API version '{}' in path {}", version, path);
        }

        let api = RpcApi::from_str(api).with_context(|| format!("Unknown RPC API '{}' in path {}", api, path))?;
        let endpoint = Endpoint::from_str(name).with_context(|| format!("Unknown RPC endpoint '{}' in path {}", name, path))?;

        if endpoint.api() != api {
            bail!("Endpoint {} is not part of the {} API", endpoint, api);
        }

        Ok(endpoint)
    }
}
