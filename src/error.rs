//! Error types shared across the game core.
//!
//! None of these are fatal: every operation reports them back to its caller,
//! which decides how to present them.

use thiserror::Error;

/// The evaluator was handed a guess and target of different lengths.
///
/// Sessions validate guess length first, so seeing this from a session is a bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("guess has {guess} symbols but target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// A guess could not be applied to a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid guess. Please enter {expected} symbols (got {actual}).")]
    InvalidLength { expected: usize, actual: usize },
    #[error("This game is already over. Start a new game to keep playing.")]
    SessionFinished,
}

/// Problems building or updating a round catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Round {requested} does not exist (valid rounds: 1-{round_count}).")]
    InvalidRound { requested: u32, round_count: u32 },
    #[error("a round catalog needs at least one round")]
    Empty,
    #[error("round {found} listed where round {expected} was expected")]
    OutOfOrder { expected: u32, found: u32 },
}

/// A target could not be built from the given symbols.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("target must not be empty")]
    Empty,
    #[error("'{symbol}' at position {position} is not a digit or letter")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("a code of distinct digits must be 1-10 long, not {0}")]
    CodeLength(usize),
}

/// Loading a round list failed.
#[derive(Debug, Error)]
pub enum RoundsError {
    #[error("failed to read round list: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Everything the driver loop may have to show a player or operator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error("Nothing to share until the game is over.")]
    ShareUnavailable,
    #[error("Round selection is not available when playing a code.")]
    NoRounds,
}
