//! Card identity.
//!
//! Every card dealt onto a board gets a `CardKey`. Keys are allocated
//! sequentially from zero when a board is dealt, so within one game no two
//! cards share a key. Keys carry no meaning beyond identity: two cards with
//! the same symbol still have different keys.
//!
//! ## Usage
//!
//! ```
//! use find_pair::core::CardKey;
//!
//! let mut keys = CardKey::allocator();
//! let first = keys.next().unwrap();
//! let second = keys.next().unwrap();
//!
//! assert_ne!(first, second);
//! assert_eq!(first.raw(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey(pub u32);

impl CardKey {
    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Sequential key source for dealing a fresh board.
    ///
    /// Starts at 0 every time, which is why keys are only unique within a game.
    pub fn allocator() -> impl Iterator<Item = CardKey> {
        (0u32..).map(CardKey)
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_sequential() {
        let keys: Vec<_> = CardKey::allocator().take(4).collect();
        assert_eq!(keys, vec![CardKey(0), CardKey(1), CardKey(2), CardKey(3)]);
    }

    #[test]
    fn test_allocator_restarts_per_board() {
        let first = CardKey::allocator().next();
        let again = CardKey::allocator().next();
        assert_eq!(first, again);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardKey(7)), "Card(7)");
    }

    #[test]
    fn test_serialization() {
        let key = CardKey(12);
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: CardKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
