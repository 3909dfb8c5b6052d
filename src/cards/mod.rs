//! Card system: symbols, alphabets and card instances.
//!
//! ## Key Types
//!
//! - `Symbol`: Face glyph shared by the two cards of a pair
//! - `Alphabet`: Validated pool of distinct symbols to deal from
//! - `Card`: Runtime card state (revealed, matched)

pub mod instance;
pub mod symbol;

pub use instance::Card;
pub use symbol::{Alphabet, Symbol, DEFAULT_GLYPHS};
