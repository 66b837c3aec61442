//! Letter <-> code table shared by the vocabulary, the engine and the renderer.
//!
//! Code `0` is reserved for empty (pad) slots; `a..=z` map to `1..=26`.

/// Integer code of a single letter slot.
pub type Code = u8;

/// Code stored in guess slots that have not been played yet.
pub const PAD_CODE: Code = 0;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Bidirectional, immutable mapping between letters and codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

impl Alphabet {
    /// The lowercase latin alphabet.
    #[must_use]
    pub fn english() -> Self {
        Self {
            letters: LETTERS.chars().collect(),
        }
    }

    /// Number of codes including the pad code.
    #[must_use]
    pub fn size(&self) -> usize {
        self.letters.len() + 1
    }

    /// Number of letters, i.e. choices per guess slot.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn pad(&self) -> Code {
        PAD_CODE
    }

    /// Code for `letter`, ignoring case.
    #[must_use]
    pub fn encode(&self, letter: char) -> Option<Code> {
        let lower = letter.to_ascii_lowercase();
        self.letters
            .iter()
            .position(|&c| c == lower)
            .and_then(|i| Code::try_from(i + 1).ok())
    }

    /// Letter for `code`; `None` for the pad code and unknown codes.
    #[must_use]
    pub fn decode(&self, code: Code) -> Option<char> {
        if code == PAD_CODE {
            return None;
        }
        self.letters.get(usize::from(code) - 1).copied()
    }

    /// Encodes every letter of `word`, failing on the first letter outside the table.
    pub fn encode_word(&self, word: &str) -> Result<Vec<Code>, char> {
        word.chars()
            .map(|c| self.encode(c).ok_or(c))
            .collect()
    }

    /// Decodes a code row for display: pad slots become spaces, unknown codes `?`.
    #[must_use]
    pub fn decode_word(&self, codes: &[Code]) -> String {
        codes
            .iter()
            .map(|&code| match code {
                PAD_CODE => ' ',
                _ => self.decode(code).unwrap_or('?'),
            })
            .collect()
    }
}
