use crate::evaluator::Feedback;
use std::fmt::Write;

/// Call to action appended to every share summary.
pub const SHARE_URL: &str = "https://ato.cody.dev";

pub const DEFAULT_SHARE_HEADER: &str = "Cody AI Code Game";

const TWEET_INTENT_URL: &str = "https://x.com/intent/tweet?text=";

/// Renders a finished game as an emoji grid, one row per guess.
#[must_use]
pub fn format_share(
    feedback_history: &[Vec<Feedback>],
    attempts_used: usize,
    max_attempts: usize,
    header: &str,
) -> String {
    let grid = feedback_history
        .iter()
        .take(attempts_used)
        .map(|row| row.iter().map(|f| f.glyph()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    format!("{header}\n{attempts_used}/{max_attempts}\n\n{grid}\n\nPlay at {SHARE_URL}")
}

/// Link that opens a pre-filled post containing `text`.
#[must_use]
pub fn share_intent_url(text: &str) -> String {
    format!("{TWEET_INTENT_URL}{}", percent_encode(text))
}

// Same character set as JavaScript's `encodeURIComponent`.
fn percent_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
        {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
