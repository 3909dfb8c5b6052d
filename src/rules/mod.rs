//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - How a board is dealt
//! - How a tap changes the board
//! - When the game is won
//!
//! Front ends only talk to `RulesEngine` and read `Board`.

pub mod engine;

pub use engine::{GameStatus, RulesEngine};
