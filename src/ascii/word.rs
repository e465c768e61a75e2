use crate::pattern::{Pattern, PatternParser};
use once_cell::sync::Lazy;

static WORD: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[a-zA-Z]+").expect("word pattern init failed"));
static IDENTIFIER: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[a-zA-Z0-9_]+").expect("identifier pattern init failed"));
static HANDLE: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[a-zA-Z0-9_-]+").expect("handle pattern init failed"));

/// ASCII letters: `[a-zA-Z]+`
pub fn word() -> PatternParser {
    PatternParser::new(WORD.clone())
}

/// ASCII letters, digits and underscore: `[a-zA-Z0-9_]+`
pub fn identifier() -> PatternParser {
    PatternParser::new(IDENTIFIER.clone())
}

/// ASCII letters, digits, underscore and hyphen: `[a-zA-Z0-9_-]+`
pub fn handle() -> PatternParser {
    PatternParser::new(HANDLE.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn test_word_stops_at_digit() {
        assert_eq!(word().parse_str("alpha2").unwrap().as_str(), "alpha");
    }

    #[test]
    fn test_word_is_ascii_only() {
        assert!(word().parse_str("ñu").is_err());
    }

    #[test]
    fn test_identifier() {
        let matched = identifier().parse_str("snake_case_2-x").unwrap();
        assert_eq!(matched.as_str(), "snake_case_2");
    }

    #[test]
    fn test_handle_allows_hyphen() {
        let matched = handle().parse_str("left-pad@1.0.0").unwrap();
        assert_eq!(matched.as_str(), "left-pad");
        assert_eq!(matched.remainder().peek(1), "@");
    }

    #[test]
    fn test_handle_rejects_scope_marker() {
        assert!(handle().parse_str("@foo").is_err());
    }

    #[test]
    fn test_no_empty_matches() {
        for parser in [word(), identifier(), handle()] {
            assert!(!parser.pattern().matches_empty());
            assert!(parser.parse_str("").is_err());
        }
    }
}
