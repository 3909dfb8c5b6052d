//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Board, TapOutcome};
use crate::games::pairs::{PairsGame, PairsGameBuilder};
use crate::rules::RulesEngine;

use super::py_core::{config_err, PyBoardSize, PyCard};

/// Python wrapper for PairsGame.
///
/// Owns the engine and the board currently being played.
#[pyclass(name = "PairsGame")]
pub struct PyPairsGame {
    rules: PairsGame,
    board: Board,
}

#[pymethods]
impl PyPairsGame {
    /// Create a game and deal its first board.
    ///
    /// # Arguments
    /// - size: Board size to deal
    /// - seed: RNG seed for reproducible deals (None for entropy)
    /// - alphabet: Candidate glyphs (None for the default set)
    #[new]
    #[pyo3(signature = (size, seed = None, alphabet = None))]
    fn new(size: PyBoardSize, seed: Option<u64>, alphabet: Option<Vec<String>>) -> PyResult<Self> {
        let mut builder = PairsGameBuilder::new();
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        if let Some(symbols) = alphabet {
            builder = builder.alphabet(symbols);
        }

        let mut rules = builder.build().map_err(config_err)?;
        let board = rules.new_game(size.0);
        Ok(Self { rules, board })
    }

    /// Deal a new board, optionally of a different size.
    #[pyo3(signature = (size = None))]
    fn new_game(&mut self, size: Option<PyBoardSize>) {
        let size = size.map_or(self.board.size(), |s| s.0);
        self.board = self.rules.new_game(size);
    }

    /// Tap a card.
    ///
    /// Returns one of "ignored", "revealed", "matched", "mismatched".
    fn tap(&mut self, index: usize) -> &'static str {
        match self.rules.tap(&mut self.board, index) {
            TapOutcome::Ignored => "ignored",
            TapOutcome::Revealed => "revealed",
            TapOutcome::Matched { .. } => "matched",
            TapOutcome::Mismatched { .. } => "mismatched",
        }
    }

    /// Deal a fresh board of the same size.
    fn restart(&mut self) {
        self.board = self.rules.restart(self.board.size());
    }

    #[getter]
    fn size(&self) -> PyBoardSize {
        PyBoardSize(self.board.size())
    }

    /// Cards in display order.
    #[getter]
    fn cards(&self) -> Vec<PyCard> {
        self.board.cards().iter().cloned().map(PyCard).collect()
    }

    /// Indices of face-up, unresolved cards.
    #[getter]
    fn selection(&self) -> Vec<usize> {
        self.board.selection().indices()
    }

    #[getter]
    fn won(&self) -> bool {
        self.board.is_won()
    }

    #[getter]
    fn attempts(&self) -> usize {
        self.board.attempts()
    }

    #[getter]
    fn remaining_pairs(&self) -> usize {
        self.board.remaining_pairs()
    }

    fn __repr__(&self) -> String {
        let status = if self.board.is_won() { "won" } else { "ongoing" };
        format!(
            "PairsGame(size={}, attempts={}, status={})",
            self.board.size(),
            self.board.attempts(),
            status
        )
    }
}
