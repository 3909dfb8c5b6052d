//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::{BoardSize, ConfigError};

pub(crate) fn config_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for BoardSize.
#[pyclass(name = "BoardSize")]
#[derive(Clone, Copy, Debug)]
pub struct PyBoardSize(pub BoardSize);

#[pymethods]
impl PyBoardSize {
    /// Parse a board size from its grid width (2 or 4).
    #[new]
    fn new(columns: usize) -> PyResult<Self> {
        BoardSize::ALL
            .into_iter()
            .find(|size| size.columns() == columns)
            .map(Self)
            .ok_or_else(|| PyValueError::new_err(format!("no {columns}-column board")))
    }

    /// The 2×2 board.
    #[staticmethod]
    fn small() -> Self {
        Self(BoardSize::Small)
    }

    /// The 4×4 board.
    #[staticmethod]
    fn large() -> Self {
        Self(BoardSize::Large)
    }

    #[getter]
    fn columns(&self) -> usize {
        self.0.columns()
    }

    #[getter]
    fn cell_count(&self) -> usize {
        self.0.cell_count()
    }

    #[getter]
    fn label(&self) -> &'static str {
        self.0.label()
    }

    fn __repr__(&self) -> String {
        format!("BoardSize({})", self.0.label())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.cell_count() as u64
    }
}

/// Read-only snapshot of a card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Card key, unique within its game.
    #[getter]
    fn key(&self) -> u32 {
        self.0.key.raw()
    }

    /// Glyph to draw, or None when face-down.
    #[getter]
    fn face(&self) -> Option<String> {
        self.0.face().map(|s| s.to_string())
    }

    #[getter]
    fn revealed(&self) -> bool {
        self.0.revealed
    }

    #[getter]
    fn matched(&self) -> bool {
        self.0.matched
    }

    #[getter]
    fn enabled(&self) -> bool {
        self.0.is_enabled()
    }

    #[getter]
    fn accessibility_label(&self) -> &'static str {
        self.0.accessibility_label()
    }

    fn __repr__(&self) -> String {
        let face = self.0.face().map_or("?", |s| s.as_str());
        format!("Card({}, face={}, matched={})", self.0.key.raw(), face, self.0.matched)
    }
}
