//! Event delivery integration tests.
//!
//! These tests verify that listeners see exactly the events each call
//! returns, in order, and nothing for rejected calls.

use std::sync::{Arc, Mutex};

use bottle_game::core::{ManualClock, PlayerId};
use bottle_game::events::{EventKind, EventLog, GameEvent};
use bottle_game::session::GameTracker;

const PLAYER: PlayerId = PlayerId::new(42);

fn tracker_with_log() -> (GameTracker, EventLog, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at_seconds(500));
    let log = EventLog::new();
    let mut tracker = GameTracker::new().with_clock(clock.clone());
    tracker.add_listener(log.clone());
    (tracker, log, clock)
}

/// Listener events match returned events.
#[test]
fn test_listener_sees_returned_events() {
    let (mut tracker, log, _clock) = tracker_with_log();

    let started = tracker.start_new_game(PLAYER).unwrap();
    let outcome = tracker.make_attempt(PLAYER, &[1, 2, 3, 4, 5]).unwrap();

    let mut expected = vec![started];
    expected.extend(outcome.events);
    assert_eq!(log.events(), expected);
}

/// A full game emits one start, five attempts, then a restart.
#[test]
fn test_full_game_event_sequence() {
    let (mut tracker, log, clock) = tracker_with_log();
    tracker.start_new_game(PLAYER).unwrap();

    for _ in 0..5 {
        clock.advance_seconds(1);
        tracker.make_attempt(PLAYER, &[1, 1, 1, 1, 1]).unwrap();
    }

    let kinds: Vec<_> = log.events().iter().map(GameEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::GameStarted,
            EventKind::AttemptMade,
            EventKind::AttemptMade,
            EventKind::AttemptMade,
            EventKind::AttemptMade,
            EventKind::AttemptMade,
            EventKind::GameStarted,
        ]
    );

    let counts: Vec<u8> = log
        .of_kind(EventKind::AttemptMade)
        .iter()
        .filter_map(|e| match e {
            GameEvent::AttemptMade { attempts, .. } => Some(*attempts),
            _ => None,
        })
        .collect();
    assert_eq!(counts, vec![1, 2, 3, 4, 5]);

    let starts: Vec<i64> = log
        .of_kind(EventKind::GameStarted)
        .iter()
        .filter_map(|e| match e {
            GameEvent::GameStarted { started_at, .. } => Some(started_at.timestamp()),
            _ => None,
        })
        .collect();
    assert_eq!(starts, vec![500, 505]);
}

/// Rejected calls are silent.
#[test]
fn test_rejected_calls_emit_nothing() {
    let (mut tracker, log, _clock) = tracker_with_log();

    let _ = tracker.make_attempt(PLAYER, &[1, 2, 3, 4, 5]);
    let _ = tracker.make_attempt(PLAYER, &[7, 2, 3, 4, 5]);
    assert!(log.is_empty());

    tracker.start_new_game(PLAYER).unwrap();
    log.drain();
    let _ = tracker.start_new_game(PLAYER);
    let _ = tracker.make_attempt(PLAYER, &[1, 2, 3]);
    assert!(log.is_empty());
}

/// Closures work as listeners, and every listener gets every event.
#[test]
fn test_multiple_listeners() {
    let (mut tracker, log, _clock) = tracker_with_log();
    let players = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&players);
    tracker.add_listener(move |event: &GameEvent| {
        sink.lock().unwrap().push(event.player());
    });

    tracker.start_new_game(PLAYER).unwrap();
    tracker.start_new_game(PlayerId::new(7)).unwrap();

    assert_eq!(log.len(), 2);
    assert_eq!(*players.lock().unwrap(), vec![PLAYER, PlayerId::new(7)]);
}
