mod abi_bin_to_json;
mod abi_json_to_bin;
mod accounts_by_authorizers;
mod activated_protocol_features;
mod block;
mod code;
mod currency_balance;
mod currency_stats;
mod kv_table_rows;
mod producers;
mod send_transaction;
mod send_transaction2;
mod table_by_scope;
mod table_rows;
mod transactions;

pub use abi_bin_to_json::*;
pub use abi_json_to_bin::*;
pub use accounts_by_authorizers::*;
pub use activated_protocol_features::*;
pub use block::*;
pub use code::*;
pub use currency_balance::*;
pub use currency_stats::*;
pub use kv_table_rows::*;
pub use producers::*;
pub use send_transaction::*;
pub use send_transaction2::*;
pub use table_by_scope::*;
pub use table_rows::*;
pub use transactions::*;
