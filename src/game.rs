//! The Wordle episode engine.
//!
//! # State Machine
//! A game is always `InProgress` between calls. `step` either stays in
//! `InProgress` (tries remain) or passes through `Done` and immediately resets,
//! so a terminal step returns the *next* episode's observation together with the
//! reward and `done` flag of the finished turn.

use crate::alphabet::{Alphabet, Code, PAD_CODE};
use crate::feedback::{DuplicatePolicy, FeedbackCell, count_correct, score_guess};
use crate::observation::{Board, Observation};
use crate::vocabulary::Vocabulary;
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;

pub const WORD_LENGTH: usize = 5;
pub const MAX_TRIES: usize = 6;
pub const WIN_REWARD: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess length differs from the configured word length.
    MalformedGuess { expected: usize, actual: usize },
    /// Vocabulary words do not have the configured length.
    VocabularyMismatch { expected: usize, actual: usize },
    InvalidConfig(&'static str),
    /// Batch step received a different number of guesses than there are games.
    BatchSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGuess { expected, actual } => {
                write!(f, "guess has {actual} letters, expected {expected}")
            }
            Self::VocabularyMismatch { expected, actual } => write!(
                f,
                "vocabulary words have {actual} letters, game expects {expected}"
            ),
            Self::InvalidConfig(reason) => write!(f, "invalid game configuration: {reason}"),
            Self::BatchSizeMismatch { expected, actual } => {
                write!(f, "got {actual} guesses for {expected} games")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Game rules. Immutable for the lifetime of a `WordleGame`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_tries: usize,
    pub win_reward: f32,
    pub duplicates: DuplicatePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_tries: MAX_TRIES,
            win_reward: WIN_REWARD,
            duplicates: DuplicatePolicy::Membership,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.word_length == 0 {
            return Err(GameError::InvalidConfig("word length must be positive"));
        }
        if self.max_tries == 0 {
            return Err(GameError::InvalidConfig("max tries must be positive"));
        }
        if !self.win_reward.is_finite() {
            return Err(GameError::InvalidConfig("win reward must be finite"));
        }
        Ok(())
    }

    /// Shape of the flat observation tensor, `[2, max_tries, word_length]`.
    #[must_use]
    pub fn observation_shape(&self) -> [usize; 3] {
        [2, self.max_tries, self.word_length]
    }

    /// Number of choices for each guess slot, one entry per slot.
    #[must_use]
    pub fn action_shape(&self, alphabet: &Alphabet) -> Vec<usize> {
        vec![alphabet.letter_count(); self.word_length]
    }
}

/// How a finished episode ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won,
    /// Tries exhausted; carries the hidden word for display.
    Lost { target: Vec<Code> },
}

/// Details about the turn that was just played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    /// Row index the guess was recorded at.
    pub turn: usize,
    pub feedback: Vec<FeedbackCell>,
    /// Set only on terminal steps.
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}

pub struct WordleGame {
    config: GameConfig,
    vocabulary: Arc<Vocabulary>,
    rng: StdRng,
    target: Vec<Code>,
    turn: usize,
    guesses: Board<Code>,
    feedback: Board<FeedbackCell>,
}

impl WordleGame {
    /// Creates a game and starts its first episode. Without a seed the
    /// generator is seeded from the OS.
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        config: GameConfig,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if vocabulary.word_length() != config.word_length {
            return Err(GameError::VocabularyMismatch {
                expected: config.word_length,
                actual: vocabulary.word_length(),
            });
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Self {
            config,
            vocabulary,
            rng,
            target: vec![PAD_CODE; config.word_length],
            turn: 0,
            guesses: Board::filled(config.max_tries, config.word_length, PAD_CODE),
            feedback: Board::filled(config.max_tries, config.word_length, FeedbackCell::Empty),
        };
        game.reset(None);
        Ok(game)
    }

    /// Starts a new episode with a uniformly drawn target. A seed re-seeds this
    /// game's generator so the draw is reproducible.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let index = self.rng.gen_range(0..self.vocabulary.len());
        self.target.clear();
        self.target
            .extend_from_slice(self.vocabulary.get(index).unwrap_or_default());
        self.turn = 0;
        self.guesses = Board::filled(self.config.max_tries, self.config.word_length, PAD_CODE);
        self.feedback = Board::filled(
            self.config.max_tries,
            self.config.word_length,
            FeedbackCell::Empty,
        );
        debug_log!("reset: target index {} of {}", index, self.vocabulary.len());
        self.observe()
    }

    /// Plays `guess` into the current row.
    pub fn step(&mut self, guess: &[Code]) -> Result<Step, GameError> {
        if guess.len() != self.config.word_length {
            return Err(GameError::MalformedGuess {
                expected: self.config.word_length,
                actual: guess.len(),
            });
        }

        let turn = self.turn;
        let row = score_guess(guess, &self.target, self.config.duplicates);
        self.guesses.set_row(turn, guess);
        self.feedback.set_row(turn, &row);

        let correct = count_correct(&row);
        debug_log!("step: turn {} scored {:?} ({} correct)", turn, row, correct);

        let (reward, outcome) = self.evaluate_terminal(correct);
        let done = outcome.is_some();
        let observation = if done {
            info_log!("episode finished on turn {}: {:?}", turn, outcome);
            self.reset(None)
        } else {
            self.turn += 1;
            self.observe()
        };

        Ok(Step {
            observation,
            reward,
            done,
            info: StepInfo {
                turn,
                feedback: row,
                outcome,
            },
        })
    }

    /// Reward for a row with `correct` exact matches, and the outcome if the
    /// episode ends on this turn.
    fn evaluate_terminal(&self, correct: usize) -> (f32, Option<Outcome>) {
        #[allow(clippy::cast_precision_loss)]
        let partial = correct as f32 / self.config.word_length as f32;
        if correct == self.config.word_length {
            (self.config.win_reward, Some(Outcome::Won))
        } else if self.turn == self.config.max_tries - 1 {
            (
                partial,
                Some(Outcome::Lost {
                    target: self.target.clone(),
                }),
            )
        } else {
            (partial, None)
        }
    }

    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation {
            guesses: self.guesses.clone(),
            feedback: self.feedback.clone(),
        }
    }

    /// Index of the next row to be played.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The hidden word of the current episode.
    #[must_use]
    pub fn target(&self) -> &[Code] {
        &self.target
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }
}
