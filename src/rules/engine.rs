//! Rules engine trait for game implementations.
//!
//! The presentation layer drives a game through three calls:
//! - `new_game`: deal a fresh board
//! - `tap`: apply one player tap to a board
//! - `restart`: throw the board away and deal again

use serde::{Deserialize, Serialize};

use crate::core::action::TapOutcome;
use crate::core::config::BoardSize;
use crate::core::state::Board;

/// Whether the win banner should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Pairs remain.
    InProgress,
    /// Every card is matched.
    Won,
}

impl GameStatus {
    /// Check if the game is over.
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, GameStatus::Won)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `new_game`: Must return a board satisfying the card invariant
///   (every symbol on exactly two cards, all face-down)
/// - `tap`: Never fails; invalid targets return `TapOutcome::Ignored`
///   and leave the board untouched
/// - `restart`: Must not reuse any state from a previous board
pub trait RulesEngine {
    /// Deal a new board of the given size.
    fn new_game(&mut self, size: BoardSize) -> Board;

    /// Apply a tap at a deck index.
    fn tap(&self, board: &mut Board, index: usize) -> TapOutcome;

    /// Deal a replacement board of the same kind.
    ///
    /// Default implementation is a plain `new_game`.
    fn restart(&mut self, size: BoardSize) -> Board {
        self.new_game(size)
    }

    // === Convenience Methods ===

    /// Apply a sequence of taps, returning each outcome.
    fn tap_all<I>(&self, board: &mut Board, indices: I) -> Vec<TapOutcome>
    where
        I: IntoIterator<Item = usize>,
        Self: Sized,
    {
        indices.into_iter().map(|index| self.tap(board, index)).collect()
    }

    /// Deck indices a tap would currently be accepted on.
    fn selectable_indices(&self, board: &Board) -> Vec<usize> {
        board
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_selectable())
            .map(|(i, _)| i)
            .collect()
    }
}
