use crate::alphabet::Alphabet;
use crate::feedback::DuplicatePolicy;
use crate::game::{GameConfig, MAX_TRIES, WIN_REWARD, WORD_LENGTH};
use crate::vocabulary::{
    EMBEDDED_VOCABULARY, Vocabulary, VocabularyError, load_vocabulary_from_file,
    load_vocabulary_from_str, user_vocabulary_path,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Wordle reinforcement-learning environment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited vocabulary of target words
    #[arg(short = 'i', long = "input", global = true)]
    pub vocabulary_path: Option<PathBuf>,

    /// Number of guesses allowed per episode
    #[arg(long, default_value_t = MAX_TRIES, global = true)]
    pub max_tries: usize,

    /// How repeated letters are marked present
    #[arg(long, value_enum, default_value_t = Duplicates::Membership, global = true)]
    pub duplicates: Duplicates,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write log records to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Seed for target selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Roll out a random agent over a batch of games and print statistics
    Simulate {
        /// Number of games stepped in parallel
        #[arg(long, default_value_t = 8)]
        envs: usize,
        /// Minimum number of finished episodes
        #[arg(long, default_value_t = 1000)]
        episodes: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplicates {
    /// Any occurrence of the letter in the target marks it present
    Membership,
    /// Canonical Wordle letter counting
    Multiplicity,
}

impl From<Duplicates> for DuplicatePolicy {
    fn from(value: Duplicates) -> Self {
        match value {
            Duplicates::Membership => DuplicatePolicy::Membership,
            Duplicates::Multiplicity => DuplicatePolicy::Multiplicity,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            word_length: WORD_LENGTH,
            max_tries: self.max_tries,
            win_reward: WIN_REWARD,
            duplicates: self.duplicates.into(),
        }
    }

    /// Vocabulary from `--input`, else the per-user file if present, else the embedded list.
    pub fn load_vocabulary(&self, alphabet: &Alphabet) -> Result<Vocabulary, VocabularyError> {
        let user_path = user_vocabulary_path().filter(|p| p.is_file());
        resolve_vocabulary(self.vocabulary_path.as_deref(), user_path.as_deref(), alphabet)
    }
}

fn resolve_vocabulary(
    explicit: Option<&Path>,
    user: Option<&Path>,
    alphabet: &Alphabet,
) -> Result<Vocabulary, VocabularyError> {
    match explicit.or(user) {
        Some(path) => load_vocabulary_from_file(path, alphabet, WORD_LENGTH),
        None => load_vocabulary_from_str(EMBEDDED_VOCABULARY, alphabet, WORD_LENGTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["wordle-env", "play"]).unwrap();
        assert_eq!(cli.command, Command::Play { seed: None });
        assert_eq!(cli.vocabulary_path, None);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.game_config(), GameConfig::default());
    }

    #[test]
    fn test_parse_simulate_with_options() {
        let cli = Cli::try_parse_from([
            "wordle-env",
            "simulate",
            "--envs",
            "4",
            "--episodes",
            "50",
            "--duplicates",
            "multiplicity",
            "--max-tries",
            "3",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Simulate {
                envs: 4,
                episodes: 50,
                seed: 0
            }
        );
        assert_eq!(cli.verbose, 2);
        let config = cli.game_config();
        assert_eq!(config.max_tries, 3);
        assert_eq!(config.duplicates, DuplicatePolicy::Multiplicity);
    }

    #[test]
    fn test_parse_input_path() {
        let cli = Cli::try_parse_from(["wordle-env", "-i", "words.txt", "play", "--seed", "7"]).unwrap();
        assert_eq!(cli.vocabulary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.command, Command::Play { seed: Some(7) });
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["wordle-env"]).is_err());
    }

    #[test]
    fn test_resolve_embedded_vocabulary() {
        let vocabulary = resolve_vocabulary(None, None, &Alphabet::english()).unwrap();
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let err = resolve_vocabulary(
            Some(Path::new("/nonexistent/explicit.txt")),
            None,
            &Alphabet::english(),
        )
        .unwrap_err();
        assert!(matches!(err, VocabularyError::Io(_)));
    }
}
