//! Game configuration types.
//!
//! - `BoardSize`: the two supported grids
//! - `EngineConfig`: symbol alphabet and optional seed
//! - `ConfigError`: everything that can be wrong with the above, or with a
//!   board layout handed in from outside (fixed layouts, deserialized boards)
//!
//! Configuration is the only place this crate can fail. Once an engine is
//! built, dealing and tapping never return errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::CardKey;
use super::state::Selection;
use crate::cards::{Alphabet, Symbol};

/// Board dimensions. Closed set: there is no invalid size to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 2×2 grid, 2 pairs.
    Small,
    /// 4×4 grid, 8 pairs.
    Large,
}

impl BoardSize {
    /// Both sizes, in menu order.
    pub const ALL: [BoardSize; 2] = [BoardSize::Small, BoardSize::Large];

    /// Pairs needed by the largest board. Alphabets must cover this.
    pub const MAX_PAIRS: usize = 8;

    /// Grid width (and height; boards are square).
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            BoardSize::Small => 2,
            BoardSize::Large => 4,
        }
    }

    /// Grid height.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.columns()
    }

    /// Number of cards on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.columns() * self.rows()
    }

    /// Number of distinct symbols on the board.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.cell_count() / 2
    }

    /// Short title for menus and headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            BoardSize::Small => "2×2",
            BoardSize::Large => "4×4",
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while configuring an engine or laying out a board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alphabet has {available} symbols, need at least {required}")]
    AlphabetTooSmall { required: usize, available: usize },

    #[error("symbol {0} appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),

    #[error("{size} board needs {expected} cards, layout has {actual}")]
    LayoutLength {
        size: BoardSize,
        expected: usize,
        actual: usize,
    },

    #[error("symbol {symbol} appears {count} times in the layout, expected 2")]
    UnpairedSymbol { symbol: Symbol, count: usize },

    #[error("{0} appears more than once on the board")]
    DuplicateKey(CardKey),

    #[error("card at {index} has inconsistent revealed/matched flags")]
    InconsistentCard { index: usize },

    #[error("selection {0:?} does not point at face-up unmatched cards")]
    InvalidSelection(Selection),

    #[error("win flag is {won} but matched cards say otherwise")]
    WinFlagMismatch { won: bool },
}

/// Engine configuration.
///
/// Usually assembled by `PairsGameBuilder` rather than by hand.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Candidate symbols to deal from.
    pub alphabet: Alphabet,

    /// Seed for the deal stream. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default alphabet and no fixed seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Fix the seed so deals are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_dimensions() {
        assert_eq!(BoardSize::Small.cell_count(), 4);
        assert_eq!(BoardSize::Small.pair_count(), 2);
        assert_eq!(BoardSize::Small.columns(), 2);

        assert_eq!(BoardSize::Large.cell_count(), 16);
        assert_eq!(BoardSize::Large.pair_count(), 8);
        assert_eq!(BoardSize::Large.columns(), 4);
        assert_eq!(BoardSize::Large.rows(), 4);
    }

    #[test]
    fn test_max_pairs_covers_all_sizes() {
        for size in BoardSize::ALL {
            assert!(size.pair_count() <= BoardSize::MAX_PAIRS);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(BoardSize::Small.label(), "2×2");
        assert_eq!(format!("{}", BoardSize::Large), "4×4");
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new().with_seed(9);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.alphabet.len(), Alphabet::default().len());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::AlphabetTooSmall { required: 8, available: 3 };
        assert_eq!(err.to_string(), "alphabet has 3 symbols, need at least 8");

        let err = ConfigError::LayoutLength {
            size: BoardSize::Small,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "2×2 board needs 4 cards, layout has 3");
    }

    #[test]
    fn test_board_size_serde() {
        let json = serde_json::to_string(&BoardSize::Large).unwrap();
        let size: BoardSize = serde_json::from_str(&json).unwrap();
        assert_eq!(size, BoardSize::Large);
    }
}
