// Library interface for wordle-env
// The binary and the integration tests both go through these modules

pub mod alphabet;
pub mod batch;
pub mod cli;
pub mod feedback;
pub mod game;
pub mod logging;
pub mod observation;
pub mod render;
pub mod simulate;
pub mod tui;
pub mod vocabulary;

// Re-export commonly used items for easier testing
pub use alphabet::{Alphabet, Code, PAD_CODE};
pub use batch::VecWordle;
pub use feedback::{DuplicatePolicy, FeedbackCell, score_guess};
pub use game::{GameConfig, GameError, Outcome, Step, StepInfo, WordleGame};
pub use observation::{Board, Observation};
pub use vocabulary::{Vocabulary, VocabularyError, load_vocabulary_from_file, load_vocabulary_from_str};
