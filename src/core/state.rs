//! Board state.
//!
//! ## Board
//!
//! Everything about one game session:
//! - Board size and the shuffled deck (display order, row-major)
//! - The transient selection of face-up, unresolved cards
//! - Win flag, attempt counter, tap history
//!
//! A board is created fresh for every game and restart. Only the rules
//! engine mutates it; everything public here is read-only.
//!
//! ## Selection
//!
//! The selection length is the engine's whole state machine:
//! `Idle` (nothing pending), `One` (first card of a pair shown),
//! `Two` (a mismatched pair still face-up, hidden by the next tap).

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::action::{TapOutcome, TapRecord};
use super::config::{BoardSize, ConfigError};
use super::entity::CardKey;
use crate::cards::{Card, Symbol};
use crate::rules::GameStatus;

/// Face-up cards that are not yet resolved, by deck index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// No unresolved cards.
    #[default]
    Idle,
    /// First card of a pair is face-up.
    One(usize),
    /// Two differing cards are face-up, waiting for the next tap.
    Two(usize, usize),
}

impl Selection {
    /// Number of selected cards (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Selection::Idle => 0,
            Selection::One(_) => 1,
            Selection::Two(_, _) => 2,
        }
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// Selected indices in tap order.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Selection::Idle => vec![],
            Selection::One(i) => vec![i],
            Selection::Two(i, j) => vec![i, j],
        }
    }

    /// Is `index` part of the selection?
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Selection::Idle => false,
            Selection::One(i) => i == index,
            Selection::Two(i, j) => i == index || j == index,
        }
    }
}

/// One game session: layout plus transient selection state.
///
/// Deserializing goes through the same checks the engine relies on, so a
/// board read back from JSON can be tapped like a freshly dealt one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    pub(crate) size: BoardSize,
    pub(crate) deck: Vec<Card>,
    pub(crate) selection: Selection,
    pub(crate) won: bool,
    pub(crate) attempts: usize,
    pub(crate) history: Vec<TapRecord>,
}

/// Unchecked serialized form of a `Board`.
#[derive(Deserialize)]
struct BoardRecord {
    size: BoardSize,
    deck: Vec<Card>,
    selection: Selection,
    won: bool,
    attempts: usize,
    history: Vec<TapRecord>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = ConfigError;

    fn try_from(record: BoardRecord) -> Result<Self, ConfigError> {
        let symbols: Vec<Symbol> = record.deck.iter().map(|c| c.symbol.clone()).collect();
        check_layout(record.size, &symbols)?;

        let mut keys = FxHashSet::default();
        for card in &record.deck {
            if !keys.insert(card.key) {
                return Err(ConfigError::DuplicateKey(card.key));
            }
        }

        let selection = record.selection;
        let pending = |index: usize| {
            record
                .deck
                .get(index)
                .is_some_and(|c| c.revealed && !c.matched)
        };
        let selection_ok = match selection {
            Selection::Idle => true,
            Selection::One(i) => pending(i),
            Selection::Two(i, j) => i != j && pending(i) && pending(j),
        };
        if !selection_ok {
            return Err(ConfigError::InvalidSelection(selection));
        }

        // Face-up cards are either matched or waiting in the selection.
        for (index, card) in record.deck.iter().enumerate() {
            let stray = card.revealed && !card.matched && !selection.contains(index);
            if stray || (card.matched && !card.revealed) {
                return Err(ConfigError::InconsistentCard { index });
            }
        }

        if record.won != record.deck.iter().all(|c| c.matched) {
            return Err(ConfigError::WinFlagMismatch { won: record.won });
        }

        Ok(Self {
            size: record.size,
            deck: record.deck,
            selection,
            won: record.won,
            attempts: record.attempts,
            history: record.history,
        })
    }
}

/// Check deck length and that every symbol sits on exactly two cards.
fn check_layout(size: BoardSize, symbols: &[Symbol]) -> Result<(), ConfigError> {
    if symbols.len() != size.cell_count() {
        return Err(ConfigError::LayoutLength {
            size,
            expected: size.cell_count(),
            actual: symbols.len(),
        });
    }

    let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
    for symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    // Report the first offender in layout order so errors are stable.
    for symbol in symbols {
        let count = counts[symbol];
        if count != 2 {
            return Err(ConfigError::UnpairedSymbol {
                symbol: symbol.clone(),
                count,
            });
        }
    }

    Ok(())
}

impl Board {
    /// Lay out a board from symbols already in display order.
    ///
    /// Callers guarantee the card invariant; see `from_symbols` for the
    /// checked version.
    pub(crate) fn deal(size: BoardSize, symbols: Vec<Symbol>) -> Self {
        debug_assert_eq!(symbols.len(), size.cell_count());

        let deck = CardKey::allocator()
            .zip(symbols)
            .map(|(key, symbol)| Card::new(key, symbol))
            .collect();

        Self {
            size,
            deck,
            selection: Selection::Idle,
            won: false,
            attempts: 0,
            history: Vec::new(),
        }
    }

    /// Build a board with a fixed layout instead of a random deal.
    ///
    /// Used to replay a known deck or to set up a test scenario.
    ///
    /// ```
    /// use find_pair::core::{Board, BoardSize};
    ///
    /// let board = Board::from_symbols(BoardSize::Small, ["A", "B", "A", "B"]).unwrap();
    /// assert_eq!(board.cards().len(), 4);
    /// assert!(!board.is_won());
    ///
    /// assert!(Board::from_symbols(BoardSize::Small, ["A", "A", "A", "B"]).is_err());
    /// ```
    pub fn from_symbols<I, S>(size: BoardSize, symbols: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        check_layout(size, &symbols)?;

        Ok(Self::deal(size, symbols))
    }

    /// Board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// All cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    /// Card at a deck index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Cards grouped into grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.deck.chunks(self.size.columns())
    }

    /// Current unresolved selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Win banner or keep playing.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Completed two-card flips so far.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Every accepted tap, in order.
    #[must_use]
    pub fn history(&self) -> &[TapRecord] {
        &self.history
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.deck.iter().filter(|c| c.matched).count() / 2
    }

    /// Pairs still hidden.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.size.pair_count() - self.matched_pairs()
    }

    /// Recompute the win flag from the deck.
    pub(crate) fn refresh_won(&mut self) -> bool {
        self.won = self.deck.iter().all(|c| c.matched);
        self.won
    }

    /// Append an accepted tap to the history.
    pub(crate) fn record(&mut self, index: usize, outcome: TapOutcome) {
        debug_assert!(outcome.is_accepted());

        if outcome.completes_attempt() {
            self.attempts += 1;
        }
        let sequence = self.history.len();
        self.history.push(TapRecord::new(sequence, index, outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Board {
        Board::from_symbols(BoardSize::Small, ["A", "B", "A", "B"]).unwrap()
    }

    #[test]
    fn test_from_symbols_initial_state() {
        let board = small();

        assert_eq!(board.size(), BoardSize::Small);
        assert_eq!(board.cards().len(), 4);
        assert!(board.cards().iter().all(Card::is_selectable));
        assert_eq!(board.selection(), Selection::Idle);
        assert!(!board.is_won());
        assert_eq!(board.status(), GameStatus::InProgress);
        assert_eq!(board.attempts(), 0);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_keys_are_unique() {
        let board = small();
        let keys: Vec<_> = board.cards().iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![CardKey(0), CardKey(1), CardKey(2), CardKey(3)]);
    }

    #[test]
    fn test_from_symbols_wrong_length() {
        let err = Board::from_symbols(BoardSize::Large, ["A", "A"]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LayoutLength {
                size: BoardSize::Large,
                expected: 16,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_from_symbols_unpaired() {
        let err = Board::from_symbols(BoardSize::Small, ["A", "A", "A", "B"]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnpairedSymbol {
                symbol: Symbol::from("A"),
                count: 3,
            }
        );
    }

    #[test]
    fn test_rows() {
        let board = small();
        let rows: Vec<Vec<&str>> = board
            .rows()
            .map(|row| row.iter().map(|c| c.symbol.as_str()).collect())
            .collect();

        assert_eq!(rows, vec![vec!["A", "B"], vec!["A", "B"]]);
    }

    #[test]
    fn test_pair_counts() {
        let mut board = small();
        assert_eq!(board.matched_pairs(), 0);
        assert_eq!(board.remaining_pairs(), 2);

        board.deck[0].mark_matched();
        board.deck[2].mark_matched();

        assert_eq!(board.matched_pairs(), 1);
        assert_eq!(board.remaining_pairs(), 1);
        assert!(!board.refresh_won());
    }

    #[test]
    fn test_record_counts_attempts() {
        let mut board = small();
        board.record(0, TapOutcome::Revealed);
        board.record(1, TapOutcome::Mismatched { first: 0, second: 1 });

        assert_eq!(board.attempts(), 1);
        assert_eq!(board.history().len(), 2);
        assert_eq!(board.history()[1].sequence, 1);
    }

    #[test]
    fn test_selection_helpers() {
        assert_eq!(Selection::Idle.len(), 0);
        assert!(Selection::Idle.is_empty());
        assert_eq!(Selection::One(3).indices(), vec![3]);
        assert_eq!(Selection::Two(1, 2).len(), 2);
        assert!(Selection::Two(1, 2).contains(2));
        assert!(!Selection::One(1).contains(2));
    }

    #[test]
    fn test_history_sequence_tracks_position() {
        let mut board = small();
        for n in 0..1000 {
            board.record(n % 4, TapOutcome::Revealed);
        }

        assert!(board.history().iter().enumerate().all(|(i, r)| r.sequence == i));
    }

    #[test]
    fn test_board_serialization() {
        let board = small();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    /// Serialize a valid board, apply `edit` to the JSON, read it back.
    fn reload(board: &Board, edit: impl FnOnce(&mut serde_json::Value)) -> Result<Board, String> {
        let mut value = serde_json::to_value(board).unwrap();
        edit(&mut value);
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    #[test]
    fn test_pending_mismatch_round_trips() {
        let mut board = small();
        board.deck[0].reveal();
        board.deck[1].reveal();
        board.selection = Selection::Two(0, 1);

        assert_eq!(reload(&board, |_| {}).unwrap(), board);
    }

    #[test]
    fn test_rejects_out_of_range_selection() {
        let mut board = small();
        board.deck[0].reveal();
        board.selection = Selection::One(0);

        let err = reload(&board, |v| v["selection"] = serde_json::json!({ "Two": [7, 9] }))
            .unwrap_err();
        assert!(err.contains("selection"), "{err}");
    }

    #[test]
    fn test_rejects_selection_on_face_down_card() {
        let err = reload(&small(), |v| v["selection"] = serde_json::json!({ "One": 2 }))
            .unwrap_err();
        assert!(err.contains("selection"), "{err}");
    }

    #[test]
    fn test_rejects_stray_face_up_card() {
        let err = reload(&small(), |v| v["deck"][3]["revealed"] = true.into()).unwrap_err();
        assert!(err.contains("card at 3"), "{err}");
    }

    #[test]
    fn test_rejects_matched_face_down_card() {
        let err = reload(&small(), |v| v["deck"][1]["matched"] = true.into()).unwrap_err();
        assert!(err.contains("card at 1"), "{err}");
    }

    #[test]
    fn test_rejects_short_deck() {
        let err = reload(&small(), |v| {
            v["deck"].as_array_mut().unwrap().truncate(2);
        })
        .unwrap_err();
        assert!(err.contains("needs 4 cards"), "{err}");
    }

    #[test]
    fn test_rejects_false_win() {
        let err = reload(&small(), |v| v["won"] = true.into()).unwrap_err();
        assert!(err.contains("win flag"), "{err}");
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let err = reload(&small(), |v| v["deck"][2]["key"] = 0.into()).unwrap_err();
        assert!(err.contains("Card(0)"), "{err}");
    }
}
