//! Pairs game implementation.

use log::{debug, trace};

use crate::cards::{Alphabet, Symbol};
use crate::core::{Board, BoardSize, ConfigError, EngineConfig, GameRng, Selection, TapOutcome};
use crate::rules::RulesEngine;

/// The match engine: deals boards and resolves taps.
#[derive(Clone, Debug)]
pub struct PairsGame {
    config: EngineConfig,
    rng: GameRng,
}

/// Builder for creating a PairsGame.
#[derive(Clone, Debug, Default)]
pub struct PairsGameBuilder {
    symbols: Option<Vec<Symbol>>,
    seed: Option<u64>,
}

impl PairsGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal from these symbols instead of the default glyphs.
    pub fn alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols = Some(symbols.into_iter().map(Into::into).collect());
        self
    }

    /// Fix the seed so every deal is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the alphabet and build the engine.
    pub fn build(self) -> Result<PairsGame, ConfigError> {
        let alphabet = match self.symbols {
            Some(symbols) => Alphabet::new(symbols)?,
            None => Alphabet::default(),
        };

        let mut config = EngineConfig::new().with_alphabet(alphabet);
        config.seed = self.seed;

        Ok(PairsGame::new(config))
    }
}

impl PairsGame {
    /// Create an engine from a ready configuration.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("pairs engine seeded with {}", rng.seed());

        Self { config, rng }
    }

    /// Default alphabet, fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::new().with_seed(seed))
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the alphabet boards are dealt from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.config.alphabet
    }

    /// Seed of the engine's root stream.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl RulesEngine for PairsGame {
    fn new_game(&mut self, size: BoardSize) -> Board {
        // Each board gets its own stream, so a deal never depends on how
        // many taps the previous game took.
        let mut rng = self.rng.fork();

        let chosen = rng.sample(self.config.alphabet.symbols(), size.pair_count());
        let mut symbols = chosen.clone();
        symbols.extend(chosen);
        rng.shuffle(&mut symbols);

        debug!("dealt {} board from stream {:#x}", size, rng.seed());
        Board::deal(size, symbols)
    }

    fn tap(&self, board: &mut Board, index: usize) -> TapOutcome {
        match board.card(index) {
            Some(card) if card.is_selectable() => {}
            _ => {
                trace!("ignored tap at {}", index);
                return TapOutcome::Ignored;
            }
        }

        // A mismatched pair left face-up is resolved before anything else.
        let pending = match std::mem::take(&mut board.selection) {
            Selection::Two(i, j) => {
                if board.deck[i].symbol != board.deck[j].symbol {
                    board.deck[i].hide();
                    board.deck[j].hide();
                    trace!("hid mismatched pair {} and {}", i, j);
                }
                None
            }
            Selection::One(first) => Some(first),
            Selection::Idle => None,
        };

        board.deck[index].reveal();

        let outcome = match pending {
            None => {
                board.selection = Selection::One(index);
                TapOutcome::Revealed
            }
            Some(first) if board.deck[first].symbol == board.deck[index].symbol => {
                board.deck[first].mark_matched();
                board.deck[index].mark_matched();
                let won = board.refresh_won();
                debug!("matched {} at {} and {}", board.deck[index].symbol, first, index);
                if won {
                    debug!("{} board cleared", board.size);
                }
                TapOutcome::Matched { won }
            }
            Some(first) => {
                board.selection = Selection::Two(first, index);
                TapOutcome::Mismatched { first, second: index }
            }
        };

        trace!("tap at {} -> {:?}", index, outcome);
        board.record(index, outcome);
        outcome
    }
}
