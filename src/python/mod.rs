//! Python bindings for the bottle game.
//!
//! # Quick Start
//!
//! ```python
//! import bottle_game as bg
//!
//! game = bg.BottleGame()
//! game.start_new_game(1)
//! attempts = game.make_attempt(1, [1, 2, 3, 4, 5])
//! assert game.get_game_state(1) == (1, True)
//! ```
//!
//! Rejected calls raise `ValueError`; the message starts with the error
//! kind (`GameNotStarted`, `InvalidBottleArrangement`, ...).

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// bottle_game: five-attempt bottle arrangement guessing game.
#[pymodule]
fn bottle_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyGameConfig>()?;
    m.add_class::<PyBottleGame>()?;

    Ok(())
}
