use crate::alphabet::{Code, PAD_CODE};
use crate::feedback::FeedbackCell;

/// Row-major fixed-size grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Board<T> {
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// # Panics
    /// If `index >= rows`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[T] {
        &self.cells[index * self.cols..(index + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// # Panics
    /// If `index >= rows` or `values.len() != cols`.
    pub fn set_row(&mut self, index: usize, values: &[T]) {
        self.cells[index * self.cols..(index + 1) * self.cols].copy_from_slice(values);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

/// Snapshot of an episode's guess and feedback history, both `max_tries x word_length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guesses: Board<Code>,
    pub feedback: Board<FeedbackCell>,
}

impl Observation {
    #[must_use]
    pub fn empty(max_tries: usize, word_length: usize) -> Self {
        Self {
            guesses: Board::filled(max_tries, word_length, PAD_CODE),
            feedback: Board::filled(max_tries, word_length, FeedbackCell::Empty),
        }
    }

    #[must_use]
    pub fn max_tries(&self) -> usize {
        self.guesses.rows()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.guesses.cols()
    }

    /// Shape of `to_codes()`: `[2, max_tries, word_length]`.
    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        [2, self.max_tries(), self.word_length()]
    }

    /// Number of rows that have been played.
    #[must_use]
    pub fn played_rows(&self) -> usize {
        self.feedback
            .iter_rows()
            .take_while(|row| row.iter().any(|&c| c != FeedbackCell::Empty))
            .count()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.played_rows() == 0
    }

    /// Copy of this snapshot with row `index` replaced. Used to rebuild a
    /// terminal board from the pre-step snapshot, since a terminal step
    /// returns the next episode's observation.
    #[must_use]
    pub fn with_row(&self, index: usize, guess: &[Code], feedback: &[FeedbackCell]) -> Self {
        let mut next = self.clone();
        next.guesses.set_row(index, guess);
        next.feedback.set_row(index, feedback);
        next
    }

    /// Flat `2 x max_tries x word_length` tensor: guess codes, then feedback codes.
    #[must_use]
    pub fn to_codes(&self) -> Vec<u8> {
        self.guesses
            .as_slice()
            .iter()
            .copied()
            .chain(self.feedback.as_slice().iter().map(|c| c.code()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_observation() {
        let obs = Observation::empty(6, 5);
        assert_eq!(obs.max_tries(), 6);
        assert_eq!(obs.word_length(), 5);
        assert!(obs.is_blank());
        assert!(obs.guesses.as_slice().iter().all(|&c| c == PAD_CODE));
        assert_eq!(obs.to_codes(), vec![0; 60]);
        assert_eq!(obs.shape(), [2, 6, 5]);
    }

    #[test]
    fn test_with_row_and_codes() {
        let obs = Observation::empty(2, 3).with_row(
            0,
            &[1, 2, 3],
            &[FeedbackCell::Correct, FeedbackCell::Absent, FeedbackCell::Present],
        );
        assert_eq!(obs.played_rows(), 1);
        assert_eq!(obs.guesses.row(0), &[1, 2, 3]);
        assert_eq!(obs.feedback.get(0, 2), Some(FeedbackCell::Present));
        assert_eq!(obs.feedback.get(2, 0), None);
        assert_eq!(obs.to_codes(), vec![1, 2, 3, 0, 0, 0, 2, 1, 3, 0, 0, 0]);
    }
}
