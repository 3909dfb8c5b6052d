//! Python bindings for the find-pair engine.
//!
//! Lets a scripted front end drive the match engine.
//!
//! # Quick Start
//!
//! ```python
//! import find_pair as fp
//!
//! game = fp.PairsGame(fp.BoardSize.small(), seed=42)
//! game.tap(0)
//! game.tap(1)
//!
//! for card in game.cards:
//!     print(card.face or " ", card.accessibility_label)
//!
//! if game.won:
//!     game.restart()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// find_pair: a memory-matching game engine.
#[pymodule]
fn find_pair(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardSize>()?;
    m.add_class::<PyCard>()?;
    m.add_class::<PyPairsGame>()?;

    Ok(())
}
