//! Board rendering for observations.
//!
//! Reads nothing but an `Observation` and the alphabet; correct cells are
//! green, present cells yellow, absent cells gray.

use crate::alphabet::Alphabet;
use crate::feedback::FeedbackCell;
use crate::observation::Observation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Background and foreground for a cell.
#[must_use]
pub fn cell_colors(cell: FeedbackCell) -> (Color, Color) {
    match cell {
        FeedbackCell::Empty => (Color::DarkGray, Color::White),
        FeedbackCell::Correct => (Color::Green, Color::Black),
        FeedbackCell::Present => (Color::Yellow, Color::Black),
        FeedbackCell::Absent => (Color::Gray, Color::White),
    }
}

/// One styled line per row, each cell drawn as ` X ` followed by a gap.
#[must_use]
pub fn board_lines(observation: &Observation, alphabet: &Alphabet) -> Vec<Line<'static>> {
    observation
        .guesses
        .iter_rows()
        .zip(observation.feedback.iter_rows())
        .map(|(guess, feedback)| {
            let mut spans = vec![Span::raw("  ")];
            for (&code, &cell) in guess.iter().zip(feedback) {
                let (bg, fg) = cell_colors(cell);
                let letter = alphabet
                    .decode(code)
                    .map_or(' ', |c| c.to_ascii_uppercase());
                spans.push(Span::styled(format!(" {letter} "), Style::default().fg(fg).bg(bg)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect()
}

/// Plain-text board, e.g. for logs: `[P]` correct, `(L)` present, ` a ` absent.
#[must_use]
pub fn board_text(observation: &Observation, alphabet: &Alphabet) -> String {
    let mut out = String::new();
    for (guess, feedback) in observation
        .guesses
        .iter_rows()
        .zip(observation.feedback.iter_rows())
    {
        for (&code, &cell) in guess.iter().zip(feedback) {
            let letter = alphabet.decode(code).unwrap_or('.');
            let upper = letter.to_ascii_uppercase();
            match cell {
                FeedbackCell::Correct => out.push_str(&format!("[{upper}]")),
                FeedbackCell::Present => out.push_str(&format!("({upper})")),
                FeedbackCell::Absent | FeedbackCell::Empty => {
                    out.push_str(&format!(" {letter} "));
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Widget drawing the whole board with a titled border.
pub struct BoardWidget<'a> {
    observation: &'a Observation,
    alphabet: &'a Alphabet,
    title: &'a str,
}

impl<'a> BoardWidget<'a> {
    #[must_use]
    pub fn new(observation: &'a Observation, alphabet: &'a Alphabet) -> Self {
        Self {
            observation,
            alphabet,
            title: "Guesses",
        }
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = board_lines(self.observation, self.alphabet);
        Paragraph::new(lines)
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .render(area, buf);
    }
}
