//! # bottle-game
//!
//! A turn-based bottle arrangement guessing game.
//!
//! A player starts a game and submits up to five ordered arrangements of
//! small integers. The tracker counts attempts per player and, once the
//! ceiling is reached, restarts the game in place.
//!
//! ## Design Principles
//!
//! 1. **Explicit Identity**: Every call names the player it acts for.
//!    Nothing is read from ambient context.
//!
//! 2. **All-or-Nothing Calls**: A call either commits one state transition
//!    or is rejected with a specific error and changes nothing.
//!
//! 3. **Configuration Over Constants**: The five-attempt, five-bottle,
//!    values-1-to-5 game is `GameConfig::default()`; other shapes are a
//!    builder call away.
//!
//! ## Modules
//!
//! - `core`: Player IDs, arrangements, configuration, clocks
//! - `session`: The session tracker, session records, errors
//! - `events`: `GameStarted` / `AttemptMade` events and listeners
//!
//! ## Example
//!
//! ```
//! use bottle_game::{GameError, GameTracker, PlayerId};
//!
//! let mut tracker = GameTracker::new();
//! let player = PlayerId::new(7);
//!
//! assert_eq!(
//!     tracker.make_attempt(player, &[1, 2, 3, 4, 5]),
//!     Err(GameError::GameNotStarted(player))
//! );
//!
//! tracker.start_new_game(player).unwrap();
//! for _ in 0..5 {
//!     tracker.make_attempt(player, &[1, 1, 1, 1, 1]).unwrap();
//! }
//!
//! let state = tracker.get_game_state(player);
//! assert_eq!(state.attempts, 0);
//! assert!(state.is_active);
//! ```

pub mod core;
pub mod session;
pub mod events;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Arrangement, ArrangementError, GameConfig,
    Clock, SystemClock, ManualClock,
};

pub use crate::session::{GameTracker, GameSession, GameState, AttemptOutcome, GameError};

pub use crate::events::{GameEvent, EventKind, EventListener, EventLog};
