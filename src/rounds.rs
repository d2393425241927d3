//! Round catalog: the fixed list of rounds and the shared "current round".
//!
//! Rounds are loaded once and never change. The current round is a single
//! atomic cell, so an operator can switch rounds while sessions read it
//! without any locking.

use crate::error::{CatalogError, RoundsError};
use crate::roundbank::{EMBEDDED_ROUNDS, load_rounds_from_str};
use crate::target::Target;
use std::sync::atomic::{AtomicU32, Ordering};

/// One round of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub round_number: u32,
    pub target: Target,
    pub is_bonus: bool,
}

impl Round {
    #[must_use]
    pub fn new(round_number: u32, target: Target, is_bonus: bool) -> Self {
        Self {
            round_number,
            target,
            is_bonus,
        }
    }

    /// What a client may know about the round. The target itself stays out.
    #[must_use]
    pub fn info(&self) -> RoundInfo {
        RoundInfo {
            round_number: self.round_number,
            is_bonus: self.is_bonus,
            target_length: self.target.len(),
        }
    }
}

/// Client-facing description of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundInfo {
    pub round_number: u32,
    pub is_bonus: bool,
    pub target_length: usize,
}

#[derive(Debug)]
pub struct RoundCatalog {
    rounds: Vec<Round>,
    current: AtomicU32,
}

impl RoundCatalog {
    /// Builds a catalog whose current round is round 1.
    ///
    /// # Errors
    ///
    /// Rejects an empty list, and lists not numbered `1..=N` in order.
    pub fn new(rounds: Vec<Round>) -> Result<Self, CatalogError> {
        if rounds.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (expected, round) in (1u32..).zip(&rounds) {
            if round.round_number != expected {
                return Err(CatalogError::OutOfOrder {
                    expected,
                    found: round.round_number,
                });
            }
        }
        Ok(Self {
            rounds,
            current: AtomicU32::new(1),
        })
    }

    /// The rounds shipped with the game.
    ///
    /// # Errors
    ///
    /// Only if the embedded list is malformed.
    pub fn default_rounds() -> Result<Self, RoundsError> {
        Ok(Self::new(load_rounds_from_str(EMBEDDED_ROUNDS)?)?)
    }

    #[must_use]
    pub fn current_round(&self) -> &Round {
        let number = self.current.load(Ordering::Acquire);
        // The cell only ever holds a number validated against `rounds`.
        &self.rounds[(number - 1) as usize]
    }

    /// Points the catalog at round `n`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRound`] when `n` is outside
    /// `1..=round_count`; the current round is left as it was.
    pub fn set_current_round(&self, n: u32) -> Result<(), CatalogError> {
        if self.round_by_number(n).is_none() {
            return Err(CatalogError::InvalidRound {
                requested: n,
                round_count: self.round_count(),
            });
        }
        self.current.store(n, Ordering::Release);
        Ok(())
    }

    #[must_use]
    pub fn round_by_number(&self, n: u32) -> Option<&Round> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        self.rounds.get(index)
    }

    /// Reads the current round, switching to `n` first when one is given.
    ///
    /// # Errors
    ///
    /// Same as [`RoundCatalog::set_current_round`].
    pub fn select(&self, n: Option<u32>) -> Result<RoundInfo, CatalogError> {
        if let Some(n) = n {
            self.set_current_round(n)?;
        }
        Ok(self.current_round().info())
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn round_count(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Configurations are expected to flag at most one bonus round; the
    /// catalog reports the count but does not enforce it.
    #[must_use]
    pub fn bonus_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_bonus).count()
    }
}
