//! Classic "pairs" memory game.
//!
//! - Cards are dealt face-down, each symbol on exactly two cards
//! - Flip two cards per turn; equal symbols stay face-up for good
//! - A mismatched pair stays visible until the next tap hides it
//! - The game is won once every card is matched
//!
//! Supports 2×2 and 4×4 boards.

mod game;

pub use game::{PairsGame, PairsGameBuilder};
