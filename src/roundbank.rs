use crate::error::RoundsError;
use crate::rounds::Round;
use crate::target::Target;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_ROUNDS: &str = include_str!("resources/rounds.txt");

const BONUS_MARKER: &str = "bonus";

/// Parses a round list: `<number> <TARGET> [bonus]` per line.
///
/// Blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns [`RoundsError::Parse`] with the 1-based line number of the first
/// malformed line.
pub fn load_rounds_from_str(data: &str) -> Result<Vec<Round>, RoundsError> {
    let mut rounds = Vec::new();
    for (index, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        rounds.push(parse_round(line).map_err(|reason| RoundsError::Parse {
            line: index + 1,
            reason,
        })?);
    }
    Ok(rounds)
}

/// Reads and parses a round list file.
///
/// # Errors
///
/// I/O failures and parse failures are both reported.
pub fn load_rounds_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Round>, RoundsError> {
    let data = fs::read_to_string(path)?;
    load_rounds_from_str(&data)
}

/// Per-user round list location, if the platform has a config directory.
#[must_use]
pub fn get_rounds_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codebreaker").join("rounds.txt"))
}

fn parse_round(line: &str) -> Result<Round, String> {
    let mut fields = line.split_whitespace();
    let number = fields.next().ok_or("missing round number")?;
    let round_number: u32 = number
        .parse()
        .map_err(|_| format!("'{number}' is not a round number"))?;
    let word = fields.next().ok_or("missing target")?;
    let target = Target::new(word).map_err(|e| e.to_string())?;
    let is_bonus = match fields.next() {
        None => false,
        Some(flag) if flag.eq_ignore_ascii_case(BONUS_MARKER) => true,
        Some(other) => return Err(format!("unexpected '{other}' (only 'bonus' may follow the target)")),
    };
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected '{extra}' after the bonus flag"));
    }
    Ok(Round::new(round_number, target, is_bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_load_rounds_from_str() {
        let rounds = load_rounds_from_str("1 coder\n2 BUILD\n3 vermillion BONUS\n").unwrap();
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0].target.as_str(), "CODER");
        assert!(!rounds[1].is_bonus);
        assert!(rounds[2].is_bonus);
        assert_eq!(rounds[2].round_number, 3);
    }

    #[test]
    fn test_load_rounds_skips_comments_and_blanks() {
        let rounds = load_rounds_from_str("# header\n\n  1 AGENT  \n\n").unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].target.as_str(), "AGENT");
    }

    #[test]
    fn test_load_rounds_reports_line_numbers() {
        assert_matches!(
            load_rounds_from_str("1 CODER\nx BUILD\n"),
            Err(RoundsError::Parse { line: 2, .. })
        );
        assert_matches!(
            load_rounds_from_str("1\n"),
            Err(RoundsError::Parse { line: 1, .. })
        );
        assert_matches!(
            load_rounds_from_str("1 CODER\n# c\n3 BU-ILD\n"),
            Err(RoundsError::Parse { line: 3, .. })
        );
    }

    #[test]
    fn test_load_rounds_rejects_trailing_fields() {
        assert_matches!(
            load_rounds_from_str("1 CODER extra\n"),
            Err(RoundsError::Parse { line: 1, .. })
        );
        assert_matches!(
            load_rounds_from_str("1 CODER bonus extra\n"),
            Err(RoundsError::Parse { line: 1, .. })
        );
    }

    #[test]
    fn test_embedded_rounds_parse() {
        let rounds = load_rounds_from_str(EMBEDDED_ROUNDS).unwrap();
        let words: Vec<&str> = rounds.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(words, ["CODER", "BUILD", "AGENT", "VERMILLION"]);
        assert_eq!(rounds.iter().filter(|r| r.is_bonus).count(), 1);
    }

    #[test]
    fn test_load_rounds_from_missing_file() {
        let path = std::env::temp_dir().join(format!("codebreaker_missing_rounds_{}.txt", std::process::id()));
        let _ = fs::remove_file(&path);
        assert_matches!(load_rounds_from_file(&path), Err(RoundsError::Io(_)));
    }

    #[test]
    fn test_get_rounds_path_ends_with_file_name() {
        if let Some(path) = get_rounds_path() {
            assert!(path.ends_with("codebreaker/rounds.txt"));
        }
    }
}
