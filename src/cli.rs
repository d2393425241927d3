use crate::error::GameError;
use crate::evaluator::Feedback;
use crate::game_state::{
    DEFAULT_CODE_ATTEMPTS, DEFAULT_ROUND_ATTEMPTS, GameInterface, GameSettings, GameSummary,
    SessionStart, TargetMode, UserAction,
};
use crate::rounds::RoundInfo;
use crate::session::{GuessReport, Outcome};
use crate::share::share_intent_url;
use crate::target::Target;
use clap::Parser;
use std::io::BufRead;
use std::num::NonZeroUsize;

/// Code-breaking guessing game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a round list file (`<number> <TARGET> [bonus]` per line)
    #[arg(short = 'i', long = "input")]
    pub rounds_path: Option<String>,

    /// Round to start on
    #[arg(short, long)]
    pub round: Option<u32>,

    /// Guesses allowed per game (default: 6 for rounds, 4 for codes)
    #[arg(short, long)]
    pub attempts: Option<usize>,

    /// Play a code game instead of the rounds (the winning code if set, else random digits)
    #[arg(long)]
    pub code: bool,

    /// Length of the random code
    #[arg(long, default_value_t = crate::game_state::DEFAULT_CODE_LENGTH)]
    pub length: usize,

    /// Code to play against with --code, and to compare with --check
    #[arg(long, env = "WINNING_CODE")]
    pub winning_code: Option<String>,

    /// Check a single code against the winning code and exit
    #[arg(long, value_name = "CODE", requires = "winning_code")]
    pub check: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    /// Game settings for these flags.
    ///
    /// The winning code only selects the target together with `--code`, so a
    /// `WINNING_CODE` left in the environment never replaces the rounds.
    pub fn game_settings(&self) -> Result<GameSettings, String> {
        let mode = match (self.code, &self.winning_code) {
            (true, Some(code)) => TargetMode::FixedCode(
                Target::new(code).map_err(|e| format!("Invalid winning code: {e}"))?,
            ),
            (true, None) => TargetMode::RandomCode { length: self.length },
            (false, winning) => {
                if winning.is_some() && self.check.is_none() {
                    log::info!("Winning code is set but unused; pass --code to play it");
                }
                TargetMode::CurrentRound
            }
        };
        let default_attempts = match mode {
            TargetMode::CurrentRound => DEFAULT_ROUND_ATTEMPTS,
            _ => DEFAULT_CODE_ATTEMPTS,
        };
        let max_attempts = match self.attempts {
            Some(n) => NonZeroUsize::new(n).ok_or("--attempts must be at least 1")?,
            None => default_attempts,
        };

        Ok(GameSettings {
            max_attempts,
            mode,
            ..GameSettings::default()
        })
    }
}

/// Turns one input line into an action. Returns `None` for blank lines.
///
/// While a game is running, `guess_length` is the target length and a single
/// word of that length is always a guess, even when it spells a command.
/// `guess <word>` forces a guess and a leading `/` forces a command.
#[must_use]
pub fn parse_action(line: &str, guess_length: Option<usize>) -> Option<UserAction> {
    let input = line.trim().to_uppercase();
    let mut words = input.split_whitespace();
    let first = words.next()?;
    let second = words.next();
    if words.next().is_some() {
        println!("Invalid guess. Please enter a single word or code.");
        return None;
    }

    if let Some(command) = first.strip_prefix('/') {
        return parse_command(command, second);
    }
    match (first, second) {
        ("GUESS", Some(word)) => Some(UserAction::Guess(word.to_string())),
        (word, None) if Some(word.chars().count()) == guess_length => {
            Some(UserAction::Guess(word.to_string()))
        }
        _ => parse_command(first, second),
    }
}

fn parse_command(first: &str, second: Option<&str>) -> Option<UserAction> {
    match (first, second) {
        ("EXIT" | "QUIT", None) => Some(UserAction::Exit),
        ("NEXT", None) => Some(UserAction::NewGame),
        ("SHARE", None) => Some(UserAction::Share),
        ("ROUND", None) => Some(UserAction::SelectRound(None)),
        ("ROUND", Some(n)) => match n.parse() {
            Ok(n) => Some(UserAction::SelectRound(Some(n))),
            Err(_) => {
                println!("Usage: round <number>");
                None
            }
        },
        (guess, None) => Some(UserAction::Guess(guess.to_string())),
        _ => {
            println!("Invalid guess. Please enter a single word or code.");
            None
        }
    }
}

#[must_use]
pub fn feedback_pattern(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_char()).collect()
}

#[must_use]
pub fn feedback_glyphs(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.glyph()).collect()
}

pub fn display_session_start(start: &SessionStart) {
    match start.round {
        Some(round) => println!(
            "\nRound {}{}: guess the {}-letter word in {} tries.",
            round.round_number,
            if round.is_bonus { " (bonus)" } else { "" },
            start.target_length,
            start.max_attempts
        ),
        None => println!(
            "\nNew code: guess the {}-digit code in {} tries.",
            start.target_length, start.max_attempts
        ),
    }
}

pub fn display_feedback(report: &GuessReport) {
    println!(
        "{}  {}  {}",
        report.guess,
        feedback_glyphs(&report.feedback),
        feedback_pattern(&report.feedback)
    );
    if report.outcome == Outcome::InProgress {
        println!("{} guesses left.", report.attempts_remaining);
    }
}

pub fn display_outcome(summary: &GameSummary) {
    match summary.outcome {
        Outcome::Won => println!(
            "Congratulations! Solved in {}/{}.",
            summary.attempts_used, summary.max_attempts
        ),
        Outcome::Lost => println!("Out of guesses. The answer was {}.", summary.answer),
        Outcome::InProgress => {}
    }
    display_share(&summary.share_text);
    println!("Type 'next' to play again, 'round <n>' to switch rounds, or 'exit' to quit.");
}

pub fn display_round(info: &RoundInfo) {
    println!(
        "Current round: {}{} ({} letters)",
        info.round_number,
        if info.is_bonus { " (bonus)" } else { "" },
        info.target_length
    );
}

pub fn display_share(text: &str) {
    println!("\n{text}\n");
    println!("Post it: {}", share_intent_url(text));
}

pub fn display_error(error: &GameError) {
    println!("{error}");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// Line-oriented front end over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
    // Target length of the game in progress, if any.
    guess_length: Option<usize>,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            guess_length: None,
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_session_start(&mut self, start: &SessionStart) {
        self.guess_length = Some(start.target_length);
        display_session_start(start);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!(
            "\nEnter your guess (or 'share', 'next', 'round [n]', 'exit'; 'guess <word>' and '/<command>' force either):"
        );
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // End of input behaves like `exit`.
            Ok(0) | Err(_) => Some(UserAction::Exit),
            Ok(_) => parse_action(&input, self.guess_length),
        }
    }

    fn display_feedback(&mut self, report: &GuessReport) {
        display_feedback(report);
    }

    fn display_error(&mut self, error: &GameError) {
        display_error(error);
    }

    fn display_outcome(&mut self, summary: &GameSummary) {
        self.guess_length = None;
        display_outcome(summary);
    }

    fn display_round(&mut self, info: &RoundInfo) {
        display_round(info);
    }

    fn display_share(&mut self, text: &str) {
        display_share(text);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
