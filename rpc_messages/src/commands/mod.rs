mod endpoint;

pub use endpoint::*;

use crate::{
    AbiArgs, AbiBinToJsonArgs, AbiJsonToBinArgs, AccountArgs, AccountsByAuthorizersArgs, ActivatedProtocolFeaturesArgs, BlockArgs,
    BlockHeaderStateArgs, BlockInfoArgs, CodeArgs, CodeHashArgs, ControlledAccountsArgs, CurrencyBalanceArgs, CurrencyStatsArgs,
    HistoryActionsArgs, HistoryTransactionArgs, KeyAccountsArgs, KvTableRowsArgs, ProducersArgs, PushTransactionArgs,
    PushTransactionsArgs, RawCodeAndAbiArgs, ScheduledTransactionsArgs, SendTransaction2Args, SendTransactionArgs,
    SendTransactionsArgs, TableByScopeArgs, TableRowsArgs,
};
use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// A request to one endpoint. It serializes as the bare request body; the
/// endpoint itself travels in the URL path (see [`RpcCommand::endpoint`]).
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum RpcCommand {
    AbiBinToJson(AbiBinToJsonArgs),
    AbiJsonToBin(AbiJsonToBinArgs),
    GetAbi(AbiArgs),
    GetAccount(AccountArgs),
    GetAccountsByAuthorizers(AccountsByAuthorizersArgs),
    GetActivatedProtocolFeatures(ActivatedProtocolFeaturesArgs),
    GetBlock(BlockArgs),
    GetBlockHeaderState(BlockHeaderStateArgs),
    GetBlockInfo(BlockInfoArgs),
    GetCode(CodeArgs),
    GetCodeHash(CodeHashArgs),
    GetCurrencyBalance(CurrencyBalanceArgs),
    GetCurrencyStats(CurrencyStatsArgs),
    GetKvTableRows(KvTableRowsArgs),
    GetProducers(ProducersArgs),
    GetRawCodeAndAbi(RawCodeAndAbiArgs),
    GetScheduledTransactions(ScheduledTransactionsArgs),
    GetTableByScope(TableByScopeArgs),
    GetTableRows(TableRowsArgs),
    PushTransaction(PushTransactionArgs),
    PushTransactions(PushTransactionsArgs),
    SendTransaction(SendTransactionArgs),
    SendTransaction2(SendTransaction2Args),
    SendTransactions(SendTransactionsArgs),
    GetActions(HistoryActionsArgs),
    GetTransaction(HistoryTransactionArgs),
    GetKeyAccounts(KeyAccountsArgs),
    GetControlledAccounts(ControlledAccountsArgs),
}

impl RpcCommand {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::AbiBinToJson(_) => Endpoint::AbiBinToJson,
            Self::AbiJsonToBin(_) => Endpoint::AbiJsonToBin,
            Self::GetAbi(_) => Endpoint::GetAbi,
            Self::GetAccount(_) => Endpoint::GetAccount,
            Self::GetAccountsByAuthorizers(_) => Endpoint::GetAccountsByAuthorizers,
            Self::GetActivatedProtocolFeatures(_) => Endpoint::GetActivatedProtocolFeatures,
            Self::GetBlock(_) => Endpoint::GetBlock,
            Self::GetBlockHeaderState(_) => Endpoint::GetBlockHeaderState,
            Self::GetBlockInfo(_) => Endpoint::GetBlockInfo,
            Self::GetCode(_) => Endpoint::GetCode,
            Self::GetCodeHash(_) => Endpoint::GetCodeHash,
            Self::GetCurrencyBalance(_) => Endpoint::GetCurrencyBalance,
            Self::GetCurrencyStats(_) => Endpoint::GetCurrencyStats,
            Self::GetKvTableRows(_) => Endpoint::GetKvTableRows,
            Self::GetProducers(_) => Endpoint::GetProducers,
            Self::GetRawCodeAndAbi(_) => Endpoint::GetRawCodeAndAbi,
            Self::GetScheduledTransactions(_) => Endpoint::GetScheduledTransactions,
            Self::GetTableByScope(_) => Endpoint::GetTableByScope,
            Self::GetTableRows(_) => Endpoint::GetTableRows,
            Self::PushTransaction(_) => Endpoint::PushTransaction,
            Self::PushTransactions(_) => Endpoint::PushTransactions,
            Self::SendTransaction(_) => Endpoint::SendTransaction,
            Self::SendTransaction2(_) => Endpoint::SendTransaction2,
            Self::SendTransactions(_) => Endpoint::SendTransactions,
            Self::GetActions(_) => Endpoint::GetActions,
            Self::GetTransaction(_) => Endpoint::GetTransaction,
            Self::GetKeyAccounts(_) => Endpoint::GetKeyAccounts,
            Self::GetControlledAccounts(_) => Endpoint::GetControlledAccounts,
        }
    }

    pub fn path(&self) -> String {
        self.endpoint().path()
    }

    pub fn to_json_body(&self) -> Result<String> {
        let endpoint = self.endpoint();
        debug!(%endpoint, "Encoding RPC request body");
        serde_json::to_string(self).with_context(|| format!("Could not encode request body for {}", endpoint))
    }

    pub fn from_json_body(endpoint: Endpoint, body: &str) -> Result<Self> {
        debug!(%endpoint, "Decoding RPC request body");
        let command = match endpoint {
            Endpoint::AbiBinToJson => Self::AbiBinToJson(decode(endpoint, body)?),
            Endpoint::AbiJsonToBin => Self::AbiJsonToBin(decode(endpoint, body)?),
            Endpoint::GetAbi => Self::GetAbi(decode(endpoint, body)?),
            Endpoint::GetAccount => Self::GetAccount(decode(endpoint, body)?),
            Endpoint::GetAccountsByAuthorizers => Self::GetAccountsByAuthorizers(decode(endpoint, body)?),
            Endpoint::GetActivatedProtocolFeatures => Self::GetActivatedProtocolFeatures(decode(endpoint, body)?),
            Endpoint::GetBlock => Self::GetBlock(decode(endpoint, body)?),
            Endpoint::GetBlockHeaderState => Self::GetBlockHeaderState(decode(endpoint, body)?),
            Endpoint::GetBlockInfo => Self::GetBlockInfo(decode(endpoint, body)?),
            Endpoint::GetCode => Self::GetCode(decode(endpoint, body)?),
            Endpoint::GetCodeHash => Self::GetCodeHash(decode(endpoint, body)?),
            Endpoint::GetCurrencyBalance => Self::GetCurrencyBalance(decode(endpoint, body)?),
            Endpoint::GetCurrencyStats => Self::GetCurrencyStats(decode(endpoint, body)?),
            Endpoint::GetKvTableRows => Self::GetKvTableRows(decode(endpoint, body)?),
            Endpoint::GetProducers => Self::GetProducers(decode(endpoint, body)?),
            Endpoint::GetRawCodeAndAbi => Self::GetRawCodeAndAbi(decode(endpoint, body)?),
            Endpoint::GetScheduledTransactions => Self::GetScheduledTransactions(decode(endpoint, body)?),
            Endpoint::GetTableByScope => Self::GetTableByScope(decode(endpoint, body)?),
            Endpoint::GetTableRows => Self::GetTableRows(decode(endpoint, body)?),
            Endpoint::PushTransaction => Self::PushTransaction(decode(endpoint, body)?),
            Endpoint::PushTransactions => Self::PushTransactions(decode(endpoint, body)?),
            Endpoint::SendTransaction => Self::SendTransaction(decode(endpoint, body)?),
            Endpoint::SendTransaction2 => Self::SendTransaction2(decode(endpoint, body)?),
            Endpoint::SendTransactions => Self::SendTransactions(decode(endpoint, body)?),
            Endpoint::GetActions => Self::GetActions(decode(endpoint, body)?),
            Endpoint::GetTransaction => Self::GetTransaction(decode(endpoint, body)?),
            Endpoint::GetKeyAccounts => Self::GetKeyAccounts(decode(endpoint, body)?),
            Endpoint::GetControlledAccounts => Self::GetControlledAccounts(decode(endpoint, body)?),
        };
        Ok(command)
    }

    pub fn from_path_and_body(path: &str, body: &str) -> Result<Self> {
        let endpoint = match Endpoint::from_path(path) {
            Ok(endpoint) => endpoint,
            Err(e) => {
                warn!(path, "Could not resolve RPC path: {:?}", e);
                return Err(e);
            }
        };
        Self::from_json_body(endpoint, body)
    }
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T> {
    serde_json::from_str(body).with_context(|| format!("Invalid request body for {}", endpoint))
}
