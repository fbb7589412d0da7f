//! Game session tracking.
//!
//! [`GameTracker`] owns one [`GameSession`] per player and exposes the
//! three game calls: `start_new_game`, `make_attempt` and
//! `get_game_state`. Rejected calls return a [`GameError`] and change
//! nothing.
//!
//! All mutation takes `&mut self`, so a tracker shared between threads
//! goes behind a `Mutex` (or lives on a single task) and each call is
//! applied atomically.

mod error;
mod state;
mod tracker;

pub use error::GameError;
pub use state::{AttemptOutcome, GameSession, GameState};
pub use tracker::GameTracker;
