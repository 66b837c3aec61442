//! Per-letter feedback coding for a guess against the target.

use crate::alphabet::Code;
use std::collections::HashMap;

/// Verdict for one letter slot. The discriminants are the codes exposed in observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FeedbackCell {
    /// Row not played yet
    #[default]
    Empty = 0,
    /// Gray
    Absent = 1,
    /// Green
    Correct = 2,
    /// Yellow
    Present = 3,
}

impl FeedbackCell {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Absent),
            2 => Some(Self::Correct),
            3 => Some(Self::Present),
            _ => None,
        }
    }
}

/// How `Present` is assigned when a letter occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// A non-correct slot is `Present` whenever the target contains the letter
    /// anywhere. Repeated guess letters can all be marked `Present`.
    #[default]
    Membership,
    /// Canonical Wordle: each target letter is consumed by at most one
    /// `Correct` or `Present` slot.
    Multiplicity,
}

/// Scores `guess` against `target`. Both slices must have the same length.
#[must_use]
pub fn score_guess(guess: &[Code], target: &[Code], policy: DuplicatePolicy) -> Vec<FeedbackCell> {
    debug_assert_eq!(guess.len(), target.len());

    let mut row = vec![FeedbackCell::Absent; guess.len()];
    for (cell, (g, t)) in row.iter_mut().zip(guess.iter().zip(target)) {
        if g == t {
            *cell = FeedbackCell::Correct;
        }
    }

    match policy {
        DuplicatePolicy::Membership => {
            for (cell, g) in row.iter_mut().zip(guess) {
                if *cell != FeedbackCell::Correct && target.contains(g) {
                    *cell = FeedbackCell::Present;
                }
            }
        }
        DuplicatePolicy::Multiplicity => {
            let mut remaining: HashMap<Code, usize> = HashMap::new();
            for (cell, t) in row.iter().zip(target) {
                if *cell != FeedbackCell::Correct {
                    *remaining.entry(*t).or_insert(0) += 1;
                }
            }
            for (cell, g) in row.iter_mut().zip(guess) {
                if *cell == FeedbackCell::Correct {
                    continue;
                }
                if let Some(count) = remaining.get_mut(g) {
                    if *count > 0 {
                        *cell = FeedbackCell::Present;
                        *count -= 1;
                    }
                }
            }
        }
    }
    row
}

#[must_use]
pub fn count_correct(row: &[FeedbackCell]) -> usize {
    row.iter().filter(|&&c| c == FeedbackCell::Correct).count()
}
