//! Tap outcomes and tap history.
//!
//! A tap is the only action a player can take. The engine reports what the
//! tap did as a `TapOutcome`, and every tap that changed the board is kept
//! on the board as a `TapRecord` for replay and debugging.

use serde::{Deserialize, Serialize};

/// What a single tap did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapOutcome {
    /// Out of range, already revealed, or already matched. Board unchanged.
    Ignored,

    /// First card of a new pair flipped face-up.
    Revealed,

    /// Second card matched the first. Both are now permanently matched.
    Matched {
        /// True if this match completed the board.
        won: bool,
    },

    /// Second card differs from the first. Both stay face-up until the
    /// next accepted tap hides them.
    Mismatched {
        first: usize,
        second: usize,
    },
}

impl TapOutcome {
    /// Did the tap change the board?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TapOutcome::Ignored)
    }

    /// Did the tap complete a two-card flip (matched or not)?
    #[must_use]
    pub fn completes_attempt(&self) -> bool {
        matches!(self, TapOutcome::Matched { .. } | TapOutcome::Mismatched { .. })
    }
}

/// A recorded tap with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapRecord {
    /// Position in the game's tap sequence (starts at 0).
    pub sequence: usize,

    /// Deck index that was tapped.
    pub index: usize,

    /// What the tap did.
    pub outcome: TapOutcome,
}

impl TapRecord {
    /// Create a new tap record.
    #[must_use]
    pub fn new(sequence: usize, index: usize, outcome: TapOutcome) -> Self {
        Self {
            sequence,
            index,
            outcome,
        }
    }
}
