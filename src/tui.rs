//! TUI (Terminal User Interface) module for Playerdle
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringGuess`: letters and spaces are typed up to the secret length,
//!   ENTER submits, TAB abandons the round.
//! - `RoundOver`: the round was won or lost; N starts another round.
//!
//! ESC quits from either state.

use crate::controller::SessionSnapshot;
use crate::error::GameError;
use crate::evaluator::{Feedback, Mark};
use crate::game_state::{GameInterface, RoundTally, UserAction};
use crate::session::{ATTEMPT_BUDGET, RoundState};
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
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const ROW_SPACING: u16 = 2;
const BOARD_HEIGHT: u16 = ATTEMPT_BUDGET as u16 * ROW_SPACING + 2;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum TileState {
    Empty,
    Entered,
    Scored(Mark),
}

impl TileState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Scored(Mark::Exact) => (Color::Green, Color::Black),
            Self::Scored(Mark::Present) => (Color::Yellow, Color::Black),
            Self::Scored(Mark::Absent) => (Color::Gray, Color::White),
        }
    }
}

#[derive(Debug)]
struct GuessRow {
    letters: Vec<char>,
    states: Vec<TileState>,
}

impl GuessRow {
    fn scored(guess: &str, feedback: &Feedback) -> Self {
        Self {
            letters: guess.chars().map(|c| c.to_ascii_uppercase()).collect(),
            states: feedback.marks().iter().copied().map(TileState::Scored).collect(),
        }
    }

    fn pending(input: &str, width: usize) -> Self {
        let mut letters: Vec<char> = input.chars().map(|c| c.to_ascii_uppercase()).collect();
        let mut states = vec![TileState::Entered; letters.len()];
        letters.resize(width, ' ');
        states.resize(width, TileState::Empty);
        Self { letters, states }
    }

    fn blank(width: usize) -> Self {
        Self::pending("", width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    RoundOver(RoundState),
}

/// Outcome banner shown once a round ends.
#[derive(Debug, Clone)]
struct Banner {
    text: String,
    style: Style,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    rows: &'a [GuessRow],
    current_input: &'a str,
    secret_length: usize,
    state: TuiState,
    round: usize,
    attempts_remaining: usize,
    banner: Option<&'a Banner>,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<GuessRow>,
    current_input: String,
    secret_length: usize,
    state: TuiState,
    round: usize,
    attempts_remaining: usize,
    banner: Option<Banner>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            current_input: String::new(),
            secret_length: 0,
            state: TuiState::EnteringGuess,
            round: 0,
            attempts_remaining: ATTEMPT_BUDGET,
            banner: None,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
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

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rows: &self.rows,
            current_input: &self.current_input,
            secret_length: self.secret_length,
            state: self.state,
            round: self.round,
            attempts_remaining: self.attempts_remaining,
            banner: self.banner.as_ref(),
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(BOARD_HEIGHT), // One row per attempt
                Constraint::Min(6),               // Info panel
                Constraint::Length(3),            // Status line
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.round);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, round: usize) {
        let text = if round > 0 {
            format!("PLAYERDLE - Round {round}")
        } else {
            "PLAYERDLE".to_string()
        };
        let title = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(format!("Guess the player ({} characters)", ctx.secret_length))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for row_index in 0..ATTEMPT_BUDGET {
            let row = match ctx.rows.get(row_index) {
                Some(row) => Self::render_tiles(&row.letters, &row.states),
                None if row_index == ctx.rows.len() && ctx.state == TuiState::EnteringGuess => {
                    let pending = GuessRow::pending(ctx.current_input, ctx.secret_length);
                    Self::render_tiles(&pending.letters, &pending.states)
                }
                None => {
                    let blank = GuessRow::blank(ctx.secret_length);
                    Self::render_tiles(&blank.letters, &blank.states)
                }
            };
            Self::render_line(f, inner, row_index, row);
        }
    }

    fn render_tiles(letters: &[char], states: &[TileState]) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw("  ")];
        for (letter, state) in letters.iter().zip(states) {
            let (bg_color, fg_color) = state.colors();
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_line(f: &mut Frame, area: Rect, row_index: usize, spans: Vec<Span>) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(banner) = ctx.banner {
            lines.push(Line::from(vec![Span::styled(banner.text.clone(), banner.style)]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            format!("Attempts remaining: {}", ctx.attempts_remaining),
            INFO_STYLE,
        )]));

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type the player's name | ENTER: Submit | TAB: New round | ESC: Quit"
            }
            TuiState::RoundOver(_) => "N or ENTER: New round | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Windows reports both press and release
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info_log!("handle_input() - Ctrl-C pressed, returning Exit");
            return Ok(Some(UserAction::Exit));
        }
        debug_log!("handle_input() - {:?} in state {:?}", key.code, self.state);
        Ok(match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::RoundOver(_) => Self::handle_round_over_input(key),
        })
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        let typed = self.current_input.chars().count();
        match key.code {
            KeyCode::Char(c)
                if (c.is_ascii_alphabetic() || c == ' ')
                    && typed < self.secret_length
                    && !Self::has_modifier_keys(&key) =>
            {
                self.current_input.push(c.to_ascii_lowercase());
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() && c != ' ' => {
                self.error_message = format!("Only letters and spaces are allowed! ('{c}')");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if typed == self.secret_length => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message =
                    format!("Guess must be exactly {} characters!", self.secret_length);
            }
            KeyCode::Tab => return Some(UserAction::NewGame),
            KeyCode::Esc => return Some(UserAction::Exit),
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(UserAction::NewGame),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn display_round_start(&mut self, snapshot: &SessionSnapshot, round: usize) {
        self.rows.clear();
        self.current_input.clear();
        self.secret_length = snapshot.secret_length;
        self.attempts_remaining = snapshot.attempts_remaining;
        self.round = round;
        self.banner = None;
        self.state = TuiState::EnteringGuess;
        self.error_message.clear();
        self.message = format!(
            "The player's name has {} characters (spaces count).",
            snapshot.secret_length
        );
        self.status = "Enter your first guess".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_feedback(&mut self, guess: &str, feedback: &Feedback, snapshot: &SessionSnapshot) {
        self.rows.push(GuessRow::scored(guess, feedback));
        self.attempts_remaining = snapshot.attempts_remaining;
        self.error_message.clear();
        self.status = format!("{}: {}", guess.to_uppercase(), feedback.to_symbols());
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_round_over(&mut self, snapshot: &SessionSnapshot) {
        self.state = TuiState::RoundOver(snapshot.state);
        let secret = snapshot
            .revealed_secret
            .as_deref()
            .unwrap_or_default()
            .to_uppercase();
        self.banner = Some(match snapshot.state {
            RoundState::Won => Banner {
                text: format!("✓ You got it in {}! {secret}", snapshot.attempts_used),
                style: SUCCESS_STYLE,
            },
            _ => Banner {
                text: format!("✗ Out of attempts. The player was {secret}"),
                style: LOSS_STYLE,
            },
        });
        self.status = format!("Round {} over", self.round);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, tally: &RoundTally) {
        self.message = format!(
            "Won {}, lost {}, abandoned {}.",
            tally.won, tally.lost, tally.abandoned
        );
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
