//! Python bindings for the Ludo rules engine.
//!
//! Exposes a synchronous game for scripting and bots. There are no
//! animation delays here: `roll_dice` lands immediately and a roll with no
//! legal move must be given up with `pass_turn`.
//!
//! # Quick Start
//!
//! ```python
//! import rust_ludo
//!
//! game = rust_ludo.LudoGame(seed=42)
//! roll = game.roll_dice()
//! legal = game.legal_pieces()
//! if legal:
//!     game.move_piece(game.current_turn, legal[0])
//! else:
//!     game.pass_turn()
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust_ludo: four-player Ludo rules.
#[pymodule]
fn rust_ludo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLudoGame>()?;
    m.add_class::<PyMoveOutcome>()?;
    Ok(())
}
