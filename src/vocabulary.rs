use crate::alphabet::{Alphabet, Code};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const EMBEDDED_VOCABULARY: &str = include_str!("resources/vocabulary.txt");

#[derive(Debug)]
pub enum VocabularyError {
    Io(io::Error),
    Empty,
    WrongLength { word: String, expected: usize },
    UnknownLetter { word: String, letter: char },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read vocabulary: {e}"),
            Self::Empty => write!(f, "vocabulary contains no words"),
            Self::WrongLength { word, expected } => {
                write!(f, "word '{word}' is not {expected} letters long")
            }
            Self::UnknownLetter { word, letter } => {
                write!(f, "word '{word}' contains unknown letter '{letter}'")
            }
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VocabularyError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Fixed list of candidate target words, stored as letter codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    word_length: usize,
    words: Vec<Vec<Code>>,
}

impl Vocabulary {
    /// Encodes `words`, rejecting any word of the wrong length or with letters
    /// outside `alphabet`.
    pub fn from_words<S: AsRef<str>>(
        words: &[S],
        alphabet: &Alphabet,
        word_length: usize,
    ) -> Result<Self, VocabularyError> {
        let mut encoded = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            if word.chars().count() != word_length {
                return Err(VocabularyError::WrongLength {
                    word: word.to_string(),
                    expected: word_length,
                });
            }
            let codes = alphabet
                .encode_word(word)
                .map_err(|letter| VocabularyError::UnknownLetter {
                    word: word.to_string(),
                    letter,
                })?;
            encoded.push(codes);
        }
        if encoded.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self {
            word_length,
            words: encoded,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[Code]> {
        self.words.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Code]> {
        self.words.iter().map(Vec::as_slice)
    }
}

/// Splits newline-delimited text into lowercase words, skipping blank lines and `#` comments.
pub fn parse_word_list(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && !word.starts_with('#'))
        .collect()
}

pub fn load_vocabulary_from_str(
    data: &str,
    alphabet: &Alphabet,
    word_length: usize,
) -> Result<Vocabulary, VocabularyError> {
    Vocabulary::from_words(&parse_word_list(data), alphabet, word_length)
}

pub fn load_vocabulary_from_file<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
    word_length: usize,
) -> Result<Vocabulary, VocabularyError> {
    let data = fs::read_to_string(path)?;
    load_vocabulary_from_str(&data, alphabet, word_length)
}

/// Per-user vocabulary location, e.g. `~/.config/wordle-env/vocabulary.txt`.
#[must_use]
pub fn user_vocabulary_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordle-env").join("vocabulary.txt"))
}
