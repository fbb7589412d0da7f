//! Game tracker bindings for Python.

use pyo3::prelude::*;

use crate::core::PlayerId;
use crate::session::GameTracker;

use super::py_core::{to_py_err, PyGameConfig};

/// Python wrapper for GameTracker.
///
/// Players are plain integers on the Python side.
#[pyclass(name = "BottleGame")]
pub struct PyBottleGame {
    tracker: GameTracker,
}

#[pymethods]
impl PyBottleGame {
    /// Create a game with the given rules (standard rules by default).
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyRef<'_, PyGameConfig>>) -> Self {
        let tracker = match config {
            Some(config) => GameTracker::new().with_config(config.0.clone()),
            None => GameTracker::new(),
        };
        Self { tracker }
    }

    /// Start a game for `player`.
    ///
    /// Returns the start time as Unix seconds.
    fn start_new_game(&mut self, player: u64) -> PyResult<i64> {
        self.tracker
            .start_new_game(PlayerId::new(player))
            .map_err(to_py_err)?;
        Ok(self
            .tracker
            .session(PlayerId::new(player))
            .map_or(0, |s| s.started_at().timestamp()))
    }

    /// Submit an arrangement.
    ///
    /// Returns the attempt count afterwards (0 when the game restarted).
    fn make_attempt(&mut self, player: u64, arrangement: Vec<i64>) -> PyResult<u8> {
        self.tracker
            .make_attempt_wide(PlayerId::new(player), &arrangement)
            .map(|outcome| outcome.attempts)
            .map_err(to_py_err)
    }

    /// Get `(attempts, is_active)` for `player`.
    fn get_game_state(&self, player: u64) -> (u8, bool) {
        let state = self.tracker.get_game_state(PlayerId::new(player));
        (state.attempts, state.is_active)
    }

    /// Arrangements submitted in the player's current game.
    fn guesses(&self, player: u64) -> Vec<Vec<u8>> {
        self.tracker
            .session(PlayerId::new(player))
            .map(|s| s.guesses().iter().map(|g| g.as_slice().to_vec()).collect())
            .unwrap_or_default()
    }

    fn __repr__(&self) -> String {
        format!("BottleGame(sessions={})", self.tracker.session_count())
    }
}
