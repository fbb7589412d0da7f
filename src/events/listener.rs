//! Event listeners.
//!
//! Listeners are notified synchronously, in emission order, once a state
//! transition has been committed. Rejected calls notify nobody.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::event::{EventKind, GameEvent};

/// Receives game events from a tracker.
pub trait EventListener: Send {
    /// Called once per emitted event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Recording listener.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// the other to the tracker.
///
/// ## Example
///
/// ```
/// use bottle_game::core::PlayerId;
/// use bottle_game::events::EventLog;
/// use bottle_game::session::GameTracker;
///
/// let log = EventLog::new();
/// let mut tracker = GameTracker::new();
/// tracker.add_listener(log.clone());
///
/// tracker.start_new_game(PlayerId::new(1)).unwrap();
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GameEvent>> {
        // A panicking listener elsewhere leaves the buffer itself intact.
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.lock().clone()
    }

    /// Recorded events of one kind.
    #[must_use]
    pub fn of_kind(&self, kind: EventKind) -> Vec<GameEvent> {
        self.lock()
            .iter()
            .filter(|e| e.kind() == kind)
            .cloned()
            .collect()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return every recorded event.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.lock())
    }
}

impl EventListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.lock().push(event.clone());
    }
}
