mod actions;
mod controlled_accounts;
mod key_accounts;
mod transaction;

pub use actions::*;
pub use controlled_accounts::*;
pub use key_accounts::*;
pub use transaction::*;
