//! Game event types.
//!
//! The tracker announces two things: a game (re)starting, and an attempt
//! being recorded. Both carry the player they concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Arrangement, PlayerId};

/// Discriminant of a `GameEvent`, for filtering without matching payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    GameStarted,
    AttemptMade,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameStarted => write!(f, "GameStarted"),
            Self::AttemptMade => write!(f, "AttemptMade"),
        }
    }
}

/// Something that happened to a player's session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum GameEvent {
    /// A session became active, either by request or by automatic restart.
    GameStarted {
        player: PlayerId,
        started_at: DateTime<Utc>,
    },

    /// An attempt was accepted.
    ///
    /// `attempts` is the count after this attempt, before any restart, so
    /// the final attempt of a game reports `max_attempts`.
    AttemptMade {
        player: PlayerId,
        arrangement: Arrangement,
        attempts: u8,
    },
}

impl GameEvent {
    /// The player the event concerns.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Self::GameStarted { player, .. } | Self::AttemptMade { player, .. } => *player,
        }
    }

    /// The kind of event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::GameStarted { .. } => EventKind::GameStarted,
            Self::AttemptMade { .. } => EventKind::AttemptMade,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameStarted { player, started_at } => {
                write!(f, "GameStarted({}, {})", player, started_at.timestamp())
            }
            Self::AttemptMade {
                player,
                arrangement,
                attempts,
            } => write!(f, "AttemptMade({}, {}, {})", player, arrangement, attempts),
        }
    }
}
