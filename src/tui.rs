//! TUI (Terminal User Interface) module for the code-breaking game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringGuess`: symbols are typed into the current row, ENTER submits
//! - `GameOver`: the board is frozen; N starts a new game, S shares,
//!   a digit switches to that round

use crate::error::GameError;
use crate::evaluator::Feedback;
use crate::game_state::{GameInterface, GameSummary, SessionStart, UserAction};
use crate::rounds::RoundInfo;
use crate::session::{GuessReport, Outcome};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
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

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn feedback_colors(feedback: Feedback) -> (Color, Color) {
    match feedback {
        Feedback::Exact => (Color::Green, Color::Black),
        Feedback::Displaced => (Color::Yellow, Color::Black),
        Feedback::Absent => (Color::Gray, Color::White),
    }
}

#[derive(Debug)]
struct GuessRow {
    symbols: Vec<char>,
    feedback: Vec<Feedback>,
}

impl GuessRow {
    fn from_report(report: &GuessReport) -> Self {
        Self {
            symbols: report.guess.chars().collect(),
            feedback: report.feedback.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    rows: &'a [GuessRow],
    current_input: &'a str,
    state: TuiState,
    target_length: usize,
    max_attempts: usize,
    heading: &'a str,
    share_text: &'a str,
    message: &'a str,
    error_message: &'a str,
}

/// Full-screen game interface.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    target_length: usize,
    max_attempts: usize,
    heading: String,
    share_text: String,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            target_length: 0,
            max_attempts: 0,
            heading: String::new(),
            share_text: String::new(),
            message: String::new(),
            error_message: String::new(),
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

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rows: &self.rows,
            current_input: &self.current_input,
            state: self.state,
            target_length: self.target_length,
            max_attempts: self.max_attempts,
            heading: &self.heading,
            share_text: &self.share_text,
            message: &self.message,
            error_message: &self.error_message,
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
        #[allow(clippy::cast_possible_truncation)]
        let board_height = (ctx.max_attempts as u16).saturating_mul(ROW_SPACING) + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(board_height), // Game board
                Constraint::Min(6),               // Info panel
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.heading);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, heading: &str) {
        let title = Paragraph::new(format!("CODE BREAKER  {heading}"))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for row_index in 0..ctx.max_attempts {
            let y = inner.y + (row_index as u16 * ROW_SPACING);
            if y >= inner.y + inner.height {
                return;
            }
            let mut spans = vec![Span::raw("  ")];
            if let Some(row) = ctx.rows.get(row_index) {
                for (symbol, feedback) in row.symbols.iter().zip(&row.feedback) {
                    let (bg, fg) = feedback_colors(*feedback);
                    spans.push(Span::styled(format!(" {symbol} "), Style::default().fg(fg).bg(bg)));
                    spans.push(Span::raw(" "));
                }
            } else {
                let live = row_index == ctx.rows.len() && ctx.state == TuiState::EnteringGuess;
                for i in 0..ctx.target_length {
                    let symbol = if live {
                        ctx.current_input.chars().nth(i).unwrap_or(' ')
                    } else {
                        ' '
                    };
                    spans.push(Span::styled(
                        format!(" {symbol} "),
                        Style::default().fg(Color::White).bg(Color::DarkGray),
                    ));
                    spans.push(Span::raw(" "));
                }
            }
            let line = Paragraph::new(Line::from(spans));
            f.render_widget(
                line,
                Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if !ctx.message.is_empty() {
            let style = if ctx.state == TuiState::GameOver {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        if !ctx.share_text.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled("Share:", INFO_STYLE)]));
            for text_line in ctx.share_text.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit",
            TuiState::GameOver => "N: New Game | S: Share | 1-9: Switch round | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                debug_log!("handle_input() - key: {:?}", key.code);
                if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
                    return Ok(None);
                }
                Ok(match self.state {
                    TuiState::EnteringGuess => self.handle_guess_input(key),
                    TuiState::GameOver => Self::handle_game_over_input(key),
                })
            }
            _ => Ok(None),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_alphanumeric() && self.current_input.len() < self.target_length =>
            {
                self.current_input.push(c.to_ascii_uppercase());
            }
            KeyCode::Char(c) if !c.is_ascii_alphanumeric() => {
                self.error_message = format!("Only letters and digits are allowed! ('{c}')");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == self.target_length => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - submitting '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = format!("Guess must be exactly {} symbols!", self.target_length);
            }
            KeyCode::Esc => return Some(UserAction::Exit),
            _ => {}
        }
        None
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Char('s' | 'S') => Some(UserAction::Share),
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|n| UserAction::SelectRound(Some(n))),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_session_start(&mut self, start: &SessionStart) {
        self.rows.clear();
        self.current_input.clear();
        self.share_text.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringGuess;
        self.target_length = start.target_length;
        self.max_attempts = start.max_attempts;
        self.heading = match start.round {
            Some(round) if round.is_bonus => format!("Round {} (bonus)", round.round_number),
            Some(round) => format!("Round {}", round.round_number),
            None => "Random code".to_string(),
        };
        self.message = format!(
            "Guess the {}-symbol answer in {} tries.",
            start.target_length, start.max_attempts
        );
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    debug_log!("read_action() - input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_feedback(&mut self, report: &GuessReport) {
        self.rows.push(GuessRow::from_report(report));
        if report.outcome == Outcome::InProgress {
            self.message = format!("{} guesses left.", report.attempts_remaining);
        }
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, summary: &GameSummary) {
        self.state = TuiState::GameOver;
        self.message = match summary.outcome {
            Outcome::Won => format!(
                "✓ Congratulations! Solved in {}/{}",
                summary.attempts_used, summary.max_attempts
            ),
            _ => format!("The correct answer was {}.", summary.answer),
        };
        self.draw_or_log();
    }

    fn display_round(&mut self, info: &RoundInfo) {
        self.message = format!(
            "Current round: {} ({} symbols)",
            info.round_number, info.target_length
        );
        self.draw_or_log();
    }

    fn display_share(&mut self, text: &str) {
        self.share_text = text.to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_game_over_keys() {
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Char('n'))),
            Some(UserAction::NewGame)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Char('S'))),
            Some(UserAction::Share)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Char('4'))),
            Some(UserAction::SelectRound(Some(4)))
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Esc)),
            Some(UserAction::Exit)
        );
        assert_eq!(TuiInterface::handle_game_over_input(key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_feedback_colors_are_distinct() {
        let exact = feedback_colors(Feedback::Exact).0;
        let displaced = feedback_colors(Feedback::Displaced).0;
        let absent = feedback_colors(Feedback::Absent).0;
        assert_ne!(exact, displaced);
        assert_ne!(displaced, absent);
        assert_ne!(exact, absent);
    }

    #[test]
    fn test_guess_row_from_report() {
        let report = GuessReport {
            guess: "AB".to_string(),
            feedback: vec![Feedback::Exact, Feedback::Absent],
            attempts_remaining: 3,
            outcome: Outcome::InProgress,
        };
        let row = GuessRow::from_report(&report);
        assert_eq!(row.symbols, vec!['A', 'B']);
        assert_eq!(row.feedback, report.feedback);
    }
}
