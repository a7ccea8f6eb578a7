use serde::{Deserialize, Serialize};

/// An `actor@permission` pair.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct Authorization {
    pub actor: String,
    pub permission: String,
}

impl Authorization {
    pub fn new(actor: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            permission: permission.into(),
        }
    }
}
