use crate::error::TargetError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::sync::Arc;

const MAX_DISTINCT_DIGITS: usize = 10;

/// Hidden symbol sequence a session is played against.
///
/// Symbols are ASCII digits or upper-case letters. Clones share storage, so
/// every session started from the same round reads the same target.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Target(Arc<str>);

impl Target {
    /// Builds a target from `raw`, trimming and upper-casing it first.
    ///
    /// # Errors
    ///
    /// Fails on empty input or on any symbol that is not `0-9` or `A-Z`.
    pub fn new(raw: &str) -> Result<Self, TargetError> {
        let normalized = normalize_guess(raw);
        if normalized.is_empty() {
            return Err(TargetError::Empty);
        }
        if let Some((position, symbol)) = normalized
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit() && !c.is_ascii_uppercase())
        {
            return Err(TargetError::InvalidSymbol { symbol, position });
        }
        Ok(Self(Arc::from(normalized)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Keep the symbols out of debug output so logs never leak an answer.
impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target(len={})", self.len())
    }
}

/// Trims whitespace and upper-cases a raw guess.
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Draws a code of `length` distinct digits.
///
/// # Errors
///
/// Returns [`TargetError::CodeLength`] unless `length` is between 1 and 10.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<Target, TargetError> {
    if length == 0 || length > MAX_DISTINCT_DIGITS {
        return Err(TargetError::CodeLength(length));
    }
    let mut digits: Vec<char> = ('0'..='9').collect();
    digits.shuffle(rng);
    let code: String = digits.into_iter().take(length).collect();
    Ok(Target(Arc::from(code)))
}

/// Checks a submitted code against the winning one after normalizing both.
#[must_use]
pub fn check_code(submitted: &str, winning: &str) -> bool {
    let winning = normalize_guess(winning);
    !winning.is_empty() && normalize_guess(submitted) == winning
}
