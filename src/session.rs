//! Per-player game state machine.
//!
//! A session starts `InProgress` and moves to `Won` or `Lost` after a guess.
//! Both end states are final. All mutation goes through
//! [`GameSession::submit_guess`], which takes `&mut self`, so submissions for
//! one session are serialized by whoever owns it.

use crate::error::SessionError;
use crate::evaluator::{Feedback, evaluate, is_win};
use crate::share::format_share;
use crate::target::{Target, normalize_guess};
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a player learns from one accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: String,
    pub feedback: Vec<Feedback>,
    pub attempts_remaining: usize,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    target: Target,
    target_len: usize,
    max_attempts: NonZeroUsize,
    guesses: Vec<String>,
    feedback_history: Vec<Vec<Feedback>>,
    outcome: Outcome,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Target, max_attempts: NonZeroUsize) -> Self {
        let target_len = target.len();
        Self {
            target,
            target_len,
            max_attempts,
            guesses: Vec::new(),
            feedback_history: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Scores a guess and advances the game.
    ///
    /// The guess is trimmed and upper-cased before it is compared.
    ///
    /// # Errors
    ///
    /// - [`SessionError::SessionFinished`] once the game is won or lost.
    /// - [`SessionError::InvalidLength`] when the guess length differs from
    ///   the target's. No attempt is used.
    ///
    /// The session is unchanged on error.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::SessionFinished);
        }

        let guess = normalize_guess(raw);
        let actual = guess.chars().count();
        let invalid_length = SessionError::InvalidLength {
            expected: self.target_len,
            actual,
        };
        if actual != self.target_len {
            return Err(invalid_length);
        }

        let feedback = evaluate(&guess, self.target.as_str()).map_err(|_| invalid_length)?;

        self.outcome = if is_win(&feedback) {
            Outcome::Won
        } else if self.guesses.len() + 1 == self.max_attempts.get() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        self.guesses.push(guess.clone());
        self.feedback_history.push(feedback.clone());

        Ok(GuessReport {
            guess,
            feedback,
            attempts_remaining: self.attempts_remaining(),
            outcome: self.outcome,
        })
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.get() - self.attempts_used()
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts.get()
    }

    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn feedback_history(&self) -> &[Vec<Feedback>] {
        &self.feedback_history
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The answer, once there is nothing left to guess.
    #[must_use]
    pub fn reveal_target(&self) -> Option<&str> {
        self.is_finished().then(|| self.target.as_str())
    }

    /// Shareable summary; `None` while the game is still running.
    #[must_use]
    pub fn share_text(&self, header: &str) -> Option<String> {
        self.is_finished().then(|| {
            format_share(
                &self.feedback_history,
                self.attempts_used(),
                self.max_attempts(),
                header,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Feedback::{Absent, Displaced, Exact};

    fn session(target: &str, max_attempts: usize) -> GameSession {
        GameSession::new(
            Target::new(target).unwrap(),
            NonZeroUsize::new(max_attempts).unwrap(),
        )
    }

    #[test]
    fn test_new_session_is_in_progress() {
        let s = session("CODER", 6);
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert_eq!(s.attempts_used(), 0);
        assert_eq!(s.attempts_remaining(), 6);
        assert!(s.guesses().is_empty());
        assert!(s.feedback_history().is_empty());
        assert_eq!(s.reveal_target(), None);
    }

    #[test]
    fn test_huge_attempt_budget() {
        let mut s = GameSession::new(Target::new("CODER").unwrap(), NonZeroUsize::MAX);
        assert_eq!(s.attempts_remaining(), usize::MAX);
        let report = s.submit_guess("AGENT").unwrap();
        assert_eq!(report.outcome, Outcome::InProgress);
        assert_eq!(report.attempts_remaining, usize::MAX - 1);
    }

    #[test]
    fn test_code_game_win_on_second_guess() {
        let mut s = session("12345", 4);

        let first = s.submit_guess("15243").unwrap();
        assert_eq!(
            first.feedback,
            vec![Exact, Absent, Displaced, Displaced, Displaced]
        );
        assert_eq!(first.outcome, Outcome::InProgress);
        assert_eq!(first.attempts_remaining, 3);
        assert_eq!(s.attempts_used(), 1);

        let second = s.submit_guess("12345").unwrap();
        assert_eq!(second.feedback, vec![Exact; 5]);
        assert_eq!(second.outcome, Outcome::Won);
        assert_eq!(s.attempts_used(), 2);
        assert_eq!(s.guesses(), ["15243", "12345"]);
    }

    #[test]
    fn test_wrong_length_does_not_use_an_attempt() {
        let mut s = session("CODER", 4);
        s.submit_guess("AGENT").unwrap();

        assert_eq!(
            s.submit_guess("CODE"),
            Err(SessionError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            s.submit_guess("VERMILLION"),
            Err(SessionError::InvalidLength {
                expected: 5,
                actual: 10
            })
        );
        assert_eq!(s.attempts_used(), 1);
        assert_eq!(s.feedback_history().len(), 1);
        assert_eq!(s.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_lost_after_max_attempts() {
        let mut s = session("CODER", 3);
        assert_eq!(s.submit_guess("AGENT").unwrap().outcome, Outcome::InProgress);
        assert_eq!(s.submit_guess("BUILD").unwrap().outcome, Outcome::InProgress);
        let last = s.submit_guess("RACED").unwrap();
        assert_eq!(last.outcome, Outcome::Lost);
        assert_eq!(last.attempts_remaining, 0);
        assert_eq!(s.reveal_target(), Some("CODER"));
    }

    #[test]
    fn test_win_on_last_attempt() {
        let mut s = session("CODER", 2);
        s.submit_guess("AGENT").unwrap();
        assert_eq!(s.submit_guess("coder").unwrap().outcome, Outcome::Won);
    }

    #[test]
    fn test_terminal_sessions_reject_guesses() {
        let mut won = session("AGENT", 4);
        won.submit_guess("AGENT").unwrap();
        assert_eq!(won.submit_guess("AGENT"), Err(SessionError::SessionFinished));
        assert_eq!(won.submit_guess("AG"), Err(SessionError::SessionFinished));
        assert_eq!(won.attempts_used(), 1);

        let mut lost = session("AGENT", 1);
        lost.submit_guess("BUILD").unwrap();
        assert_eq!(lost.outcome(), Outcome::Lost);
        assert_eq!(lost.submit_guess("AGENT"), Err(SessionError::SessionFinished));
        assert_eq!(lost.attempts_used(), 1);
    }

    #[test]
    fn test_guess_is_normalized() {
        let mut s = session("BUILD", 6);
        let report = s.submit_guess("  build \n").unwrap();
        assert_eq!(report.guess, "BUILD");
        assert_eq!(report.outcome, Outcome::Won);
    }

    #[test]
    fn test_share_text_only_when_finished() {
        let mut s = session("12345", 4);
        s.submit_guess("15243").unwrap();
        assert_eq!(s.share_text("Code Game"), None);
        s.submit_guess("12345").unwrap();
        let text = s.share_text("Code Game").unwrap();
        assert!(text.starts_with("Code Game\n2/4\n\n🟩⬜🟨🟨🟨\n🟩🟩🟩🟩🟩"));
    }
}
