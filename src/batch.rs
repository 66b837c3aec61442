//! Runs many independent games side by side, one per slot.
//!
//! Every slot owns its own `WordleGame` and generator (slot `i` is seeded with
//! `base_seed + i`); only the vocabulary is shared. Slots reset themselves on
//! terminal steps exactly like a single game does.

use crate::alphabet::Code;
use crate::game::{GameConfig, GameError, Step, WordleGame};
use crate::info_log;
use crate::observation::Observation;
use crate::vocabulary::Vocabulary;
use rayon::prelude::*;
use std::sync::Arc;

pub struct VecWordle {
    games: Vec<WordleGame>,
    base_seed: u64,
}

impl VecWordle {
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        config: GameConfig,
        num_envs: usize,
        base_seed: u64,
    ) -> Result<Self, GameError> {
        if num_envs == 0 {
            return Err(GameError::InvalidConfig("batch needs at least one game"));
        }
        let games = (0..num_envs)
            .map(|i| WordleGame::new(Arc::clone(&vocabulary), config, Some(slot_seed(base_seed, i))))
            .collect::<Result<Vec<_>, _>>()?;
        info_log!("VecWordle::new() - {} games, base seed {}", num_envs, base_seed);
        Ok(Self { games, base_seed })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Resets every slot back to its own initial seed.
    pub fn reset_all(&mut self) -> Vec<Observation> {
        let base_seed = self.base_seed;
        self.games
            .iter_mut()
            .enumerate()
            .map(|(i, game)| game.reset(Some(slot_seed(base_seed, i))))
            .collect()
    }

    /// Steps every slot with its guess, in parallel. Fails before touching any
    /// slot if the batch is the wrong size or any guess is malformed.
    pub fn step<G: AsRef<[Code]> + Sync>(&mut self, guesses: &[G]) -> Result<Vec<Step>, GameError> {
        if guesses.len() != self.games.len() {
            return Err(GameError::BatchSizeMismatch {
                expected: self.games.len(),
                actual: guesses.len(),
            });
        }
        if let Some(game) = self.games.first() {
            let expected = game.config().word_length;
            if let Some(bad) = guesses.iter().find(|g| g.as_ref().len() != expected) {
                return Err(GameError::MalformedGuess {
                    expected,
                    actual: bad.as_ref().len(),
                });
            }
        }

        self.games
            .par_iter_mut()
            .zip(guesses.par_iter())
            .map(|(game, guess)| game.step(guess.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn observe_all(&self) -> Vec<Observation> {
        self.games.iter().map(WordleGame::observe).collect()
    }

    #[must_use]
    pub fn games(&self) -> &[WordleGame] {
        &self.games
    }
}

fn slot_seed(base_seed: u64, slot: usize) -> u64 {
    base_seed.wrapping_add(slot as u64)
}
