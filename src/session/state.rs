//! Per-player session records and read-only snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Arrangement, PlayerId};

/// One player's game.
///
/// Created by the first `start_new_game` for a player and mutated only
/// through the tracker. `attempts` stays below the configured ceiling: the
/// attempt that would reach it resets the session in place instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) player: PlayerId,
    pub(crate) is_active: bool,
    pub(crate) attempts: u8,
    pub(crate) started_at: DateTime<Utc>,
    /// Arrangements submitted in the current game, oldest first.
    pub(crate) guesses: Vec<Arrangement>,
    /// Games begun in this session, counting automatic restarts.
    pub(crate) games_started: u32,
}

impl GameSession {
    pub(crate) fn start(player: PlayerId, now: DateTime<Utc>) -> Self {
        Self {
            player,
            is_active: true,
            attempts: 0,
            started_at: now,
            guesses: Vec::new(),
            games_started: 1,
        }
    }

    /// Reset in place for a fresh game.
    pub(crate) fn restart(&mut self, now: DateTime<Utc>) {
        self.is_active = true;
        self.attempts = 0;
        self.started_at = now;
        self.guesses.clear();
        self.games_started = self.games_started.saturating_add(1);
    }

    /// The owning player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Whether a game is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Attempts made in the current game.
    #[must_use]
    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// When the current game began.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Arrangements submitted in the current game.
    #[must_use]
    pub fn guesses(&self) -> &[Arrangement] {
        &self.guesses
    }

    /// Games begun, including automatic restarts.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Snapshot of the externally visible state.
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState {
            attempts: self.attempts,
            is_active: self.is_active,
        }
    }
}

/// What `get_game_state` reports.
///
/// A player with no session reads as `GameState::default()`: zero
/// attempts, inactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub attempts: u8,
    pub is_active: bool,
}

/// Result of an accepted attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptOutcome {
    /// Attempts in the current game after the call (0 if it restarted).
    pub attempts: u8,

    /// Whether this attempt exhausted the game and triggered a restart.
    pub restarted: bool,

    /// Events emitted by the call, in order.
    pub events: Vec<crate::events::GameEvent>,
}
