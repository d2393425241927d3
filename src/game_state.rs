use crate::error::GameError;
use crate::rounds::{RoundCatalog, RoundInfo};
use crate::session::{GameSession, GuessReport, Outcome};
use crate::share::DEFAULT_SHARE_HEADER;
use crate::target::{Target, generate_code};
use crate::{debug_log, info_log};
use std::num::NonZeroUsize;

pub const DEFAULT_ROUND_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(6).unwrap();
pub const DEFAULT_CODE_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(4).unwrap();
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Where each new session gets its target from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetMode {
    /// Whatever round the catalog currently points at.
    CurrentRound,
    /// The same code every game.
    FixedCode(Target),
    /// A fresh code of distinct digits every game.
    RandomCode { length: usize },
}

#[derive(Debug, Clone)]
pub struct GameSettings {
    pub max_attempts: NonZeroUsize,
    pub mode: TargetMode,
    pub share_header: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_ROUND_ATTEMPTS,
            mode: TargetMode::CurrentRound,
            share_header: DEFAULT_SHARE_HEADER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    /// `None` asks for the current round without changing it.
    SelectRound(Option<u32>),
    Share,
    NewGame,
    Exit,
}

/// Shown when a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStart {
    pub round: Option<RoundInfo>,
    pub target_length: usize,
    pub max_attempts: usize,
}

/// End-of-game details for the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub answer: String,
    pub share_text: String,
}

/// Games finished during one `game_loop` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub won: usize,
    pub lost: usize,
}

impl Scoreboard {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.won += 1,
            Outcome::Lost => self.lost += 1,
            Outcome::InProgress => {}
        }
    }
}

/// Everything the driver loop needs from a front end.
pub trait GameInterface {
    fn display_session_start(&mut self, start: &SessionStart);
    /// `None` means the input could not be understood; the loop asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_feedback(&mut self, report: &GuessReport);
    fn display_error(&mut self, error: &GameError);
    fn display_outcome(&mut self, summary: &GameSummary);
    fn display_round(&mut self, info: &RoundInfo);
    fn display_share(&mut self, text: &str);
    fn display_exit_message(&mut self);
}

/// Runs games until the interface asks to exit.
pub fn game_loop<I: GameInterface>(
    catalog: &RoundCatalog,
    settings: &GameSettings,
    interface: &mut I,
) -> Scoreboard {
    let mut scoreboard = Scoreboard::default();
    let mut session = match start_session(catalog, settings, interface) {
        Ok(session) => session,
        Err(e) => {
            interface.display_error(&e);
            interface.display_exit_message();
            return scoreboard;
        }
    };

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => match start_session(catalog, settings, interface) {
                Ok(next) => session = next,
                Err(e) => interface.display_error(&e),
            },
            UserAction::SelectRound(requested) => {
                if !matches!(settings.mode, TargetMode::CurrentRound) {
                    interface.display_error(&GameError::NoRounds);
                    continue;
                }
                match catalog.select(requested) {
                    Ok(info) => {
                        interface.display_round(&info);
                        if requested.is_some() {
                            info_log!("Switched to round {}", info.round_number);
                            match start_session(catalog, settings, interface) {
                                Ok(next) => session = next,
                                Err(e) => interface.display_error(&e),
                            }
                        }
                    }
                    Err(e) => interface.display_error(&e.into()),
                }
            }
            UserAction::Share => match session.share_text(&settings.share_header) {
                Some(text) => interface.display_share(&text),
                None => interface.display_error(&GameError::ShareUnavailable),
            },
            UserAction::Guess(guess) => match session.submit_guess(&guess) {
                Ok(report) => {
                    interface.display_feedback(&report);
                    if report.outcome.is_terminal() {
                        scoreboard.record(report.outcome);
                        if let Some(summary) = summarize(&session, &settings.share_header) {
                            interface.display_outcome(&summary);
                        }
                    }
                }
                Err(e) => interface.display_error(&e.into()),
            },
        }
    }

    scoreboard
}

fn start_session<I: GameInterface>(
    catalog: &RoundCatalog,
    settings: &GameSettings,
    interface: &mut I,
) -> Result<GameSession, GameError> {
    let (target, round) = match &settings.mode {
        TargetMode::CurrentRound => {
            let round = catalog.current_round();
            (round.target.clone(), Some(round.info()))
        }
        TargetMode::FixedCode(code) => (code.clone(), None),
        TargetMode::RandomCode { length } => (generate_code(&mut rand::thread_rng(), *length)?, None),
    };
    info_log!(
        "Starting session: round={:?}, length={}",
        round.map(|r| r.round_number),
        target.len()
    );

    let session = GameSession::new(target, settings.max_attempts);
    interface.display_session_start(&SessionStart {
        round,
        target_length: session.target_len(),
        max_attempts: session.max_attempts(),
    });
    Ok(session)
}

fn summarize(session: &GameSession, header: &str) -> Option<GameSummary> {
    Some(GameSummary {
        outcome: session.outcome(),
        attempts_used: session.attempts_used(),
        max_attempts: session.max_attempts(),
        answer: session.reveal_target()?.to_string(),
        share_text: session.share_text(header)?,
    })
}
