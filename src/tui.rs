//! TUI (Terminal User Interface) for playing the environment by hand.
//!
//! # State Machine
//! - `EnteringGuess` → (Enter) → `EnteringGuess` while tries remain
//! - `EnteringGuess` → (Enter on a terminal step) → `EpisodeOver` → (any key) → `EnteringGuess`
//!
//! A terminal step already returns the next episode's blank board, so the
//! finished board is rebuilt from the snapshot taken before the step.

use crate::alphabet::{Alphabet, Code};
use crate::game::{Outcome, Step, WordleGame};
use crate::observation::Observation;
use crate::render::BoardWidget;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayState {
    EnteringGuess,
    EpisodeOver,
}

#[derive(Debug, PartialEq, Eq)]
enum KeyResult {
    Continue,
    Quit,
}

/// Input handling and game driving, independent of the terminal so it can be tested.
pub struct PlaySession {
    game: WordleGame,
    alphabet: Alphabet,
    state: PlayState,
    input: String,
    board: Observation,
    episode: usize,
    total_reward: f32,
    message: String,
    error_message: String,
}

impl PlaySession {
    #[must_use]
    pub fn new(game: WordleGame, alphabet: Alphabet) -> Self {
        let board = game.observe();
        Self {
            game,
            alphabet,
            state: PlayState::EnteringGuess,
            input: String::new(),
            board,
            episode: 1,
            total_reward: 0.0,
            message: String::new(),
            error_message: String::new(),
        }
    }

    /// Board currently on screen. After a terminal step this is the finished episode.
    #[must_use]
    pub fn board(&self) -> &Observation {
        &self.board
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.kind != KeyEventKind::Press {
            return KeyResult::Continue;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return KeyResult::Quit;
        }

        match self.state {
            PlayState::EpisodeOver => {
                self.start_next_episode();
            }
            PlayState::EnteringGuess => self.handle_guess_key(key),
        }
        KeyResult::Continue
    }

    fn handle_guess_key(&mut self, key: KeyEvent) {
        self.error_message.clear();
        let word_length = self.game.config().word_length;
        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && self.input.len() < word_length
                    && !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) =>
            {
                self.input.push(c.to_ascii_lowercase());
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {
                debug_log!("handle_guess_key() - ignoring {:?}", key.code);
            }
        }
    }

    fn submit(&mut self) {
        let codes: Vec<Code> = match self.alphabet.encode_word(&self.input) {
            Ok(codes) => codes,
            Err(letter) => {
                self.error_message = format!("Unknown letter '{letter}'");
                return;
            }
        };

        let before = self.game.observe();
        match self.game.step(&codes) {
            Ok(step) => self.apply_step(&before, &codes, step),
            Err(e) => self.error_message = e.to_string(),
        }
    }

    fn apply_step(&mut self, before: &Observation, guess: &[Code], step: Step) {
        self.input.clear();
        self.total_reward += step.reward;
        info_log!(
            "PlaySession::apply_step() - turn {} reward {:.2} done {}",
            step.info.turn,
            step.reward,
            step.done
        );

        if !step.done {
            self.board = step.observation;
            self.message = format!("Reward {:.2}", step.reward);
            return;
        }

        self.board = before.with_row(step.info.turn, guess, &step.info.feedback);
        self.message = match &step.info.outcome {
            Some(Outcome::Won) => format!(
                "Solved in {} tries! Reward {:.1}. Press any key for the next word.",
                step.info.turn + 1,
                step.reward
            ),
            Some(Outcome::Lost { target }) => format!(
                "Out of tries, the word was {}. Press any key for the next word.",
                self.alphabet.decode_word(target).to_uppercase()
            ),
            None => String::new(),
        };
        self.state = PlayState::EpisodeOver;
    }

    fn start_next_episode(&mut self) {
        self.board = self.game.observe();
        self.episode += 1;
        self.message.clear();
        self.state = PlayState::EnteringGuess;
    }

    fn render(&self, f: &mut Frame) {
        let max_tries = u16::try_from(self.game.config().max_tries).unwrap_or(u16::MAX);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                            // Title
                Constraint::Length(max_tries.saturating_add(2)),  // Board
                Constraint::Length(3),                            // Input
                Constraint::Min(3),                               // Messages
                Constraint::Length(3),                            // Instructions
            ])
            .split(f.area());

        self.render_title(f, chunks[0]);
        f.render_widget(BoardWidget::new(&self.board, &self.alphabet), chunks[1]);
        self.render_input(f, chunks[2]);
        self.render_messages(f, chunks[3]);
        self.render_instructions(f, chunks[4]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(format!(
            "WORDLE  episode {}  total reward {:.2}",
            self.episode, self.total_reward
        ))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let text = match self.state {
            PlayState::EnteringGuess => self.input.to_uppercase(),
            PlayState::EpisodeOver => String::new(),
        };
        let paragraph = Paragraph::new(text)
            .style(INFO_STYLE)
            .block(Block::default().title("Guess").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_messages(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if !self.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(self.message.as_str(), SUCCESS_STYLE)]));
        }
        if !self.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                self.error_message.as_str(),
                ERROR_STYLE,
            )]));
        }
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Information").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(&self, f: &mut Frame, area: Rect) {
        let text = match self.state {
            PlayState::EnteringGuess => "Type a guess | ENTER: Submit | BACKSPACE: Edit | ESC: Quit",
            PlayState::EpisodeOver => "Any key: Next word | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Owns the terminal for the duration of a play session.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("Tui::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Runs until the player quits.
    pub fn run(&mut self, session: &mut PlaySession) -> Result<(), io::Error> {
        loop {
            self.terminal.draw(|f| session.render(f))?;

            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if session.handle_key(key) == KeyResult::Quit {
                    info_log!("Tui::run() - quit requested");
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            debug_log!("Tui cleanup failed: {}", e);
        }
    }
}
