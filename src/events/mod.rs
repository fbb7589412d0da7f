//! Game events and the listeners that receive them.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: `GameStarted` or `AttemptMade`, with their payloads
//! - [`EventListener`]: Observer notified by the tracker after each change
//! - [`EventLog`]: Listener that records everything it sees
//!
//! Every tracker call also returns the events it emitted, so callers that
//! prefer plain return values can skip listeners entirely.

mod event;
mod listener;

pub use event::{EventKind, GameEvent};
pub use listener::{EventListener, EventLog};
