//! # find-pair
//!
//! A memory-matching ("pairs") game engine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every deal comes from a seeded ChaCha8 stream.
//!    The same seed replays the same sequence of boards.
//!
//! 2. **Never Fails Mid-Game**: Taps on out-of-range, face-up or matched
//!    cards are ignored, not errors. Only configuration can be rejected.
//!
//! 3. **Plain State**: A `Board` is a value. Front ends re-render after each
//!    engine call instead of observing fine-grained changes.
//!
//! ## Example
//!
//! ```
//! use find_pair::{BoardSize, PairsGameBuilder, RulesEngine, TapOutcome};
//!
//! let mut game = PairsGameBuilder::new().seed(7).build().unwrap();
//! let mut board = game.new_game(BoardSize::Small);
//!
//! assert_eq!(game.tap(&mut board, 0), TapOutcome::Revealed);
//! assert_eq!(game.tap(&mut board, 0), TapOutcome::Ignored);
//! ```
//!
//! ## Modules
//!
//! - `core`: Card keys, RNG, configuration, tap records, board state
//! - `cards`: Symbols, alphabets and card instances
//! - `rules`: RulesEngine trait (`new_game`, `tap`, `restart`)
//! - `games`: The pairs game itself
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardKey,
    GameRng,
    BoardSize, ConfigError, EngineConfig,
    TapOutcome, TapRecord,
    Board, Selection,
};

pub use crate::cards::{Alphabet, Card, Symbol, DEFAULT_GLYPHS};

pub use crate::rules::{GameStatus, RulesEngine};

pub use crate::games::pairs::{PairsGame, PairsGameBuilder};
