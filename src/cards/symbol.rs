//! Card symbols and the alphabet they are dealt from.
//!
//! A `Symbol` is an opaque glyph (usually a single emoji). An `Alphabet` is a
//! validated pool of distinct symbols, large enough for the biggest board.
//! Tests inject small alphabets with plain letters; the default alphabet is
//! the 32 glyphs the game ships with.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::config::{BoardSize, ConfigError};

/// A card face glyph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a symbol.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// The glyph text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(glyph: &str) -> Self {
        Self(glyph.to_string())
    }
}

impl From<String> for Symbol {
    fn from(glyph: String) -> Self {
        Self(glyph)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Glyphs shipped with the game: animals, fruit, sports balls.
pub const DEFAULT_GLYPHS: [&str; 32] = [
    "🐶", "🐱", "🐭", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🦄", "🐙",
    "🍎", "🍊", "🍋", "🍉", "🍇", "🍓", "🍒", "🥝",
    "⚽️", "🏀", "🏈", "⚾️", "🎾", "🏐", "🎱", "🏓",
];

/// Validated pool of distinct symbols.
///
/// Always holds at least `BoardSize::MAX_PAIRS` symbols, so any board size
/// can be dealt without repeating a pair.
///
/// Serializes as a plain list of glyphs; deserializing validates like `new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = ConfigError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, ConfigError> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl Alphabet {
    /// Build an alphabet, rejecting duplicates and undersized pools.
    pub fn new<I, S>(symbols: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();

        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        if symbols.len() < BoardSize::MAX_PAIRS {
            return Err(ConfigError::AlphabetTooSmall {
                required: BoardSize::MAX_PAIRS,
                available: symbols.len(),
            });
        }

        Ok(Self { symbols })
    }

    /// All symbols, in the order they were supplied.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true for a validated alphabet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether a symbol belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_GLYPHS.iter().map(|g| Symbol::from(*g)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet_is_valid() {
        let default = Alphabet::default();
        let rebuilt = Alphabet::new(DEFAULT_GLYPHS).unwrap();

        assert_eq!(default, rebuilt);
        assert_eq!(default.len(), 32);
        assert!(default.contains(&Symbol::from("🦄")));
    }

    #[test]
    fn test_alphabet_too_small() {
        let err = Alphabet::new(["A", "B", "C"]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::AlphabetTooSmall { required: 8, available: 3 }
        );
    }

    #[test]
    fn test_alphabet_exact_minimum() {
        let alphabet = Alphabet::new(["A", "B", "C", "D", "E", "F", "G", "H"]).unwrap();
        assert_eq!(alphabet.len(), BoardSize::MAX_PAIRS);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn test_alphabet_duplicate() {
        let err = Alphabet::new(["A", "B", "C", "D", "E", "F", "G", "A"]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateSymbol(Symbol::from("A")));
    }

    #[test]
    fn test_alphabet_serde_round_trip() {
        let json = serde_json::to_string(&Alphabet::default()).unwrap();
        assert!(json.starts_with("[\"🐶\""));

        let alphabet: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(alphabet, Alphabet::default());
    }

    #[test]
    fn test_alphabet_deserialize_validates() {
        let err = serde_json::from_str::<Alphabet>(r#"["A"]"#).unwrap_err();
        assert!(err.to_string().contains("need at least 8"), "{err}");

        let err = serde_json::from_str::<Alphabet>(r#"["A","B","C","D","E","F","G","G"]"#)
            .unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");

        // A struct-shaped payload is rejected too
        assert!(serde_json::from_str::<Alphabet>(r#"{"symbols":["A"]}"#).is_err());
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new("🐙").to_string(), "🐙");
        assert_eq!(Symbol::from("x").as_str(), "x");
    }
}
