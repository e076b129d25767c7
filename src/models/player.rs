//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store in registration order.
pub type PlayerId = i64;

/// A registered player. Never mutated after registration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
