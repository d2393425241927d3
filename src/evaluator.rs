use crate::error::EvaluationError;

/// Per-position result of comparing a guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Same symbol in the same position (green).
    Exact,
    /// Symbol is in the target at another, not yet claimed, position (yellow).
    Displaced,
    /// No unclaimed occurrence of the symbol remains (gray).
    Absent,
}

impl Feedback {
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Displaced => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Emoji used in the share grid.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Displaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Scores `guess` against `target`, handling repeated symbols.
///
/// Exact matches are claimed first. Each remaining guess symbol, in guess
/// order, then claims the leftmost unclaimed matching target position. A
/// symbol is therefore never reported (as `Exact` or `Displaced`) more often
/// than it occurs in the target.
///
/// # Errors
///
/// Returns [`EvaluationError::LengthMismatch`] if the two sequences differ in
/// length. Nothing is truncated or padded.
pub fn evaluate(guess: &str, target: &str) -> Result<Vec<Feedback>, EvaluationError> {
    let guess_chars: Vec<char> = guess.chars().collect();
    // `None` marks a target position that has already been claimed.
    let mut remaining: Vec<Option<char>> = target.chars().map(Some).collect();

    if guess_chars.len() != remaining.len() {
        return Err(EvaluationError::LengthMismatch {
            guess: guess_chars.len(),
            target: remaining.len(),
        });
    }

    let mut feedback = vec![Feedback::Absent; guess_chars.len()];

    // First pass: exact matches
    for (i, &g) in guess_chars.iter().enumerate() {
        if remaining[i] == Some(g) {
            feedback[i] = Feedback::Exact;
            remaining[i] = None;
        }
    }

    // Second pass: displaced matches, leftmost unclaimed target position wins
    for (i, &g) in guess_chars.iter().enumerate() {
        if feedback[i] == Feedback::Exact {
            continue;
        }
        if let Some(pos) = remaining.iter().position(|&t| t == Some(g)) {
            feedback[i] = Feedback::Displaced;
            remaining[pos] = None;
        }
    }

    Ok(feedback)
}

/// True when every position is an exact match.
#[must_use]
pub fn is_win(feedback: &[Feedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|f| *f == Feedback::Exact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Feedback::{Absent, Displaced, Exact};
    use proptest::prelude::*;

    fn pattern(feedback: &[Feedback]) -> String {
        feedback.iter().map(|f| f.to_char()).collect()
    }

    #[test]
    fn test_evaluate_all_exact() {
        let feedback = evaluate("CODER", "CODER").unwrap();
        assert_eq!(feedback, vec![Exact; 5]);
        assert!(is_win(&feedback));
    }

    #[test]
    fn test_evaluate_no_matches() {
        let feedback = evaluate("67890", "12345").unwrap();
        assert_eq!(feedback, vec![Absent; 5]);
        assert!(!is_win(&feedback));
    }

    #[test]
    fn test_evaluate_duplicate_guess_symbols() {
        // target ABA, guess AAB
        assert_eq!(
            evaluate("AAB", "ABA").unwrap(),
            vec![Exact, Displaced, Displaced]
        );
    }

    #[test]
    fn test_evaluate_extra_duplicates_are_absent() {
        // Only one E remains unclaimed after the exact match at the end.
        assert_eq!(pattern(&evaluate("EEEEE", "AGENT").unwrap()), "XXGXX");
        assert_eq!(pattern(&evaluate("SPEED", "CREEP").unwrap()), "XYGGX");
    }

    #[test]
    fn test_evaluate_left_to_right_tie_break() {
        // The leading A finds both target A's already claimed as exact.
        assert_eq!(pattern(&evaluate("AAAB", "BAAC").unwrap()), "XGGY");
        assert_eq!(pattern(&evaluate("ABBB", "BBAC").unwrap()), "YGYX");
    }

    #[test]
    fn test_evaluate_digit_code() {
        assert_eq!(
            evaluate("15243", "12345").unwrap(),
            vec![Exact, Absent, Displaced, Displaced, Displaced]
        );
    }

    #[test]
    fn test_evaluate_length_mismatch() {
        assert_eq!(
            evaluate("CODE", "CODER"),
            Err(EvaluationError::LengthMismatch {
                guess: 4,
                target: 5
            })
        );
        assert!(evaluate("VERMILLION", "AGENT").is_err());
    }

    #[test]
    fn test_evaluate_empty_is_not_a_win() {
        assert_eq!(evaluate("", "").unwrap(), Vec::<Feedback>::new());
        assert!(!is_win(&[]));
    }

    #[test]
    fn test_feedback_chars() {
        assert_eq!(Exact.to_char(), 'G');
        assert_eq!(Displaced.to_char(), 'Y');
        assert_eq!(Absent.to_char(), 'X');
    }

    #[test]
    fn test_feedback_glyphs_are_distinct() {
        assert_ne!(Exact.glyph(), Displaced.glyph());
        assert_ne!(Displaced.glyph(), Absent.glyph());
        assert_ne!(Exact.glyph(), Absent.glyph());
    }

    fn equal_length_pair() -> impl Strategy<Value = (String, String)> {
        let symbol = || prop::char::range('A', 'D');
        (1usize..8)
            .prop_flat_map(move |len| {
                (
                    prop::collection::vec(symbol(), len),
                    prop::collection::vec(symbol(), len),
                )
            })
            .prop_map(|(g, t): (Vec<char>, Vec<char>)| {
                (g.into_iter().collect::<String>(), t.into_iter().collect::<String>())
            })
    }

    proptest! {
        #[test]
        fn prop_exact_count_matches_positional_equality((guess, target) in equal_length_pair()) {
            let feedback = evaluate(&guess, &target).unwrap();
            let expected = guess.chars().zip(target.chars()).filter(|(g, t)| g == t).count();
            prop_assert_eq!(feedback.iter().filter(|f| **f == Exact).count(), expected);
        }

        #[test]
        fn prop_self_evaluation_is_all_exact(target in "[0-9A-Z]{1,10}") {
            let feedback = evaluate(&target, &target).unwrap();
            prop_assert!(is_win(&feedback));
        }

        #[test]
        fn prop_symbol_counts_are_conserved((guess, target) in equal_length_pair()) {
            let feedback = evaluate(&guess, &target).unwrap();
            for symbol in guess.chars() {
                let credited = guess
                    .chars()
                    .zip(&feedback)
                    .filter(|(g, f)| *g == symbol && **f != Absent)
                    .count();
                let available = target.chars().filter(|t| *t == symbol).count();
                prop_assert!(credited <= available);
            }
        }

        #[test]
        fn prop_evaluate_is_deterministic((guess, target) in equal_length_pair()) {
            prop_assert_eq!(evaluate(&guess, &target), evaluate(&guess, &target));
        }
    }
}
