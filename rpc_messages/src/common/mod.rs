mod account_info;
mod authorization;

pub use account_info::*;
pub use authorization::*;

/// Row limit used by the table queries when the caller gives none.
pub const DEFAULT_LIMIT: u32 = 10;

/// Primary index of a multi-index table.
pub const DEFAULT_INDEX_POSITION: &str = "1";

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_index_position() -> String {
    DEFAULT_INDEX_POSITION.to_string()
}
