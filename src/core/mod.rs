//! Core types: players, arrangements, configuration, clocks.
//!
//! These are the building blocks the session tracker is assembled from.
//! None of them hold game state.

pub mod player;
pub mod arrangement;
pub mod config;
pub mod clock;

pub use player::PlayerId;
pub use arrangement::{Arrangement, ArrangementError};
pub use config::GameConfig;
pub use clock::{Clock, ManualClock, SystemClock};
