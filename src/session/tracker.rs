//! The game session tracker.
//!
//! Owns every player's session and is the only place sessions change.
//! Each call is a single synchronous transition that either commits in
//! full or is rejected with no effect.
//!
//! ## Lifecycle
//!
//! ```text
//! NoSession        --start_new_game-->  Active(0)
//! Active(n)        --make_attempt----> Active(n + 1)    n + 1 < max
//! Active(max - 1)  --make_attempt----> Active(0)        automatic restart
//! Active(_)        --start_new_game--> rejected
//! NoSession        --make_attempt----> rejected
//! ```

use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::{Arrangement, ArrangementError, Clock, GameConfig, PlayerId, SystemClock};
use crate::events::{EventListener, GameEvent};

use super::error::GameError;
use super::state::{AttemptOutcome, GameSession, GameState};

/// Tracks one game session per player.
///
/// ## Example
///
/// ```
/// use bottle_game::core::PlayerId;
/// use bottle_game::session::GameTracker;
///
/// let mut tracker = GameTracker::new();
/// let player = PlayerId::new(1);
///
/// tracker.start_new_game(player).unwrap();
/// let outcome = tracker.make_attempt(player, &[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(outcome.attempts, 1);
///
/// let state = tracker.get_game_state(player);
/// assert_eq!(state.attempts, 1);
/// assert!(state.is_active);
/// ```
pub struct GameTracker {
    config: GameConfig,
    clock: Arc<dyn Clock>,
    sessions: FxHashMap<PlayerId, GameSession>,
    listeners: Vec<Box<dyn EventListener>>,
}

impl Default for GameTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameTracker")
            .field("config", &self.config)
            .field("sessions", &self.sessions.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GameTracker {
    /// Create a tracker with the standard rules and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            clock: Arc::new(SystemClock::new()),
            sessions: FxHashMap::default(),
            listeners: Vec::new(),
        }
    }

    /// Use different rules.
    ///
    /// Panics if the configuration cannot describe a playable game.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        config.validate();
        self.config = config;
        self
    }

    /// Use a different timestamp source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Register a listener for every future event.
    pub fn add_listener(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The rules in force.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game for `player`.
    ///
    /// Rejected with `GameAlreadyInProgress` if the player already has an
    /// active game; the existing game is left untouched.
    pub fn start_new_game(&mut self, player: PlayerId) -> Result<GameEvent, GameError> {
        let now = self.clock.now();

        let session = match self.sessions.entry(player) {
            Entry::Occupied(entry) if entry.get().is_active() => {
                debug!(%player, "start rejected: game already in progress");
                return Err(GameError::GameAlreadyInProgress(player));
            }
            Entry::Occupied(entry) => {
                let session = entry.into_mut();
                session.restart(now);
                session
            }
            Entry::Vacant(entry) => entry.insert(GameSession::start(player, now)),
        };

        info!(%player, started_at = %session.started_at(), "game started");

        let event = GameEvent::GameStarted {
            player,
            started_at: session.started_at(),
        };
        self.emit(std::slice::from_ref(&event));
        Ok(event)
    }

    /// Record an attempt for `player`.
    ///
    /// Checks, in order: the arrangement is valid, the player has an
    /// active game, the game has attempts left. The attempt that uses the
    /// last one restarts the game in place.
    pub fn make_attempt(
        &mut self,
        player: PlayerId,
        arrangement: &[u8],
    ) -> Result<AttemptOutcome, GameError> {
        let parsed = Arrangement::parse(arrangement, &self.config);
        self.apply_attempt(player, parsed)
    }

    /// Record an attempt given as wide integers.
    ///
    /// Same as [`make_attempt`](Self::make_attempt), except values that do
    /// not fit a bottle (negative, above 255) are rejected as an invalid
    /// arrangement rather than being unrepresentable.
    pub fn make_attempt_wide(
        &mut self,
        player: PlayerId,
        arrangement: &[i64],
    ) -> Result<AttemptOutcome, GameError> {
        let parsed = Arrangement::parse_wide(arrangement, &self.config);
        self.apply_attempt(player, parsed)
    }

    fn apply_attempt(
        &mut self,
        player: PlayerId,
        parsed: Result<Arrangement, ArrangementError>,
    ) -> Result<AttemptOutcome, GameError> {
        let arrangement = parsed.map_err(|err| {
            debug!(%player, reason = %err, "attempt rejected: invalid arrangement");
            GameError::InvalidBottleArrangement(err)
        })?;

        let max_attempts = self.config.max_attempts;

        let Some(session) = self.sessions.get_mut(&player).filter(|s| s.is_active) else {
            debug!(%player, "attempt rejected: no active game");
            return Err(GameError::GameNotStarted(player));
        };

        if session.attempts >= max_attempts {
            debug!(%player, attempts = session.attempts, "attempt rejected: no attempts left");
            return Err(GameError::MaxAttemptsReached {
                player,
                attempts: session.attempts,
            });
        }

        session.attempts += 1;
        let attempts = session.attempts;
        debug!(%player, %arrangement, attempts, "attempt made");

        let mut events = Vec::with_capacity(2);
        events.push(GameEvent::AttemptMade {
            player,
            arrangement: arrangement.clone(),
            attempts,
        });
        session.guesses.push(arrangement);

        let restarted = attempts >= max_attempts;
        if restarted {
            session.restart(self.clock.now());
            info!(
                %player,
                games_started = session.games_started(),
                "attempts exhausted, game restarted"
            );
            events.push(GameEvent::GameStarted {
                player,
                started_at: session.started_at(),
            });
        }

        let outcome = AttemptOutcome {
            attempts: session.attempts,
            restarted,
            events,
        };
        self.emit(&outcome.events);
        Ok(outcome)
    }

    /// Current attempts and activity for `player`.
    ///
    /// A player who never started a game reads as zero attempts, inactive.
    #[must_use]
    pub fn get_game_state(&self, player: PlayerId) -> GameState {
        self.sessions
            .get(&player)
            .map(GameSession::state)
            .unwrap_or_default()
    }

    /// Full session record for `player`, if one exists.
    #[must_use]
    pub fn session(&self, player: PlayerId) -> Option<&GameSession> {
        self.sessions.get(&player)
    }

    /// Number of players with a session.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn emit(&mut self, events: &[GameEvent]) {
        for event in events {
            for listener in &mut self.listeners {
                listener.on_event(event);
            }
        }
    }
}
