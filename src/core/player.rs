//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque identifier for the caller on whose behalf a game is tracked.
//! Every tracker call takes it explicitly; nothing is derived from ambient
//! context.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// The tracker never interprets the value - it is only hashed and
/// compared. Callers map their own notion of identity (account, address,
/// connection) onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
