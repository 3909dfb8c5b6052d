//! Core engine types: card keys, RNG, configuration, tap records, board state.
//!
//! Nothing here knows how a tap is resolved; that lives in `rules` and
//! `games`. This module only holds the data the engine operates on.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::CardKey;
pub use rng::GameRng;
pub use config::{BoardSize, ConfigError, EngineConfig};
pub use action::{TapOutcome, TapRecord};
pub use state::{Board, Selection};
