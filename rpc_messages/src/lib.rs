mod chain;
mod commands;
mod common;
mod history;

pub use chain::*;
pub use commands::*;
pub use common::*;
pub use history::*;
