//! Card instances - runtime card state.
//!
//! A `Card` is one grid cell: its key, its symbol, and two flags.
//! Only the engine flips the flags; the presentation side reads them
//! through `face`, `is_enabled` and `accessibility_label`.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::entity::CardKey;

/// A card dealt onto a board.
///
/// `matched` implies `revealed`. Once matched, a card stays matched and
/// face-up for the rest of the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique key within the game.
    pub key: CardKey,

    /// Face glyph, shared with exactly one other card.
    pub symbol: Symbol,

    /// Is the symbol currently face-up?
    pub revealed: bool,

    /// Has this card been confirmed as part of a found pair?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(key: CardKey, symbol: Symbol) -> Self {
        Self {
            key,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Can this card still be selected by a tap?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Glyph to draw, or `None` for a blank (face-down) card.
    #[must_use]
    pub fn face(&self) -> Option<&Symbol> {
        if self.revealed || self.matched {
            Some(&self.symbol)
        } else {
            None
        }
    }

    /// Whether the card accepts input. Matched cards are disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.matched
    }

    /// Screen reader label.
    #[must_use]
    pub fn accessibility_label(&self) -> &'static str {
        if self.matched {
            "matched"
        } else {
            "card"
        }
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn hide(&mut self) {
        debug_assert!(!self.matched, "matched cards never hide");
        self.revealed = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.revealed = true;
        self.matched = true;
    }
}
