use crate::cursor::StrCursor;
use crate::error::{GrammarError, ParseError};
use crate::matched::Match;
use crate::parser::{ParseResult, Parser};
use regex::Regex;
use std::sync::Arc;

/// A regular expression that only ever matches at the start of the text it is
/// given
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Expression as written by the caller, used in diagnostics
    expr: Arc<str>,
    anchored: Regex,
}

impl Pattern {
    pub fn new(expr: &str) -> Result<Self, GrammarError> {
        let anchored = Regex::new(&format!("^(?:{})", expr)).map_err(|source| {
            GrammarError::InvalidPattern {
                pattern: expr.to_owned(),
                source,
            }
        })?;
        Ok(Pattern {
            expr: expr.into(),
            anchored,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    /// Whether this pattern succeeds without consuming anything
    pub fn matches_empty(&self) -> bool {
        self.anchored.is_match("")
    }

    pub(crate) fn find_prefix<'code>(&self, text: &'code str) -> Option<&'code str> {
        self.anchored.find(text).map(|m| m.as_str())
    }
}

/// Parser that matches a prefix of the remaining input against a [`Pattern`]
#[derive(Debug, Clone)]
pub struct PatternParser {
    pattern: Pattern,
}

impl PatternParser {
    pub fn new(pattern: Pattern) -> Self {
        PatternParser { pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl From<Pattern> for PatternParser {
    fn from(pattern: Pattern) -> Self {
        PatternParser::new(pattern)
    }
}

impl Parser for PatternParser {
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        match cursor.match_pattern(&self.pattern) {
            Some(found) => Ok(Match::leaf(cursor, cursor.advance_bytes(found.len()))),
            None => Err(ParseError::PatternMismatch {
                pattern: self.pattern.expr.clone(),
                position: cursor.position(),
            }),
        }
    }
}

/// Convenience function to compile `expr` into a PatternParser
pub fn pattern(expr: &str) -> Result<PatternParser, GrammarError> {
    Pattern::new(expr).map(PatternParser::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matches_prefix() {
        let parser = pattern("[a-z]+").unwrap();
        let matched = parser.parse_str("abc123").unwrap();
        assert_eq!(matched.as_str(), "abc");
        assert_eq!(matched.remainder().position(), 3);
        assert_eq!(matched.remainder().remaining(), "123");
    }

    #[test]
    fn test_pattern_does_not_search_ahead() {
        let parser = pattern("[0-9]+").unwrap();
        let err = parser.parse_str("abc123").unwrap_err();
        assert_eq!(
            err,
            ParseError::PatternMismatch {
                pattern: "[0-9]+".into(),
                position: 0
            }
        );
        assert_eq!(err.to_string(), "failed to match pattern [0-9]+ at 0");
    }

    #[test]
    fn test_pattern_is_greedy() {
        let parser = pattern("a+").unwrap();
        let matched = parser.parse_str("aaab").unwrap();
        assert_eq!(matched.as_str(), "aaa");
    }

    #[test]
    fn test_alternation_inside_pattern_is_anchored() {
        // Without the group, `^x|y` would let `y` match anywhere
        let parser = pattern("x|y").unwrap();
        assert!(parser.parse_str("zy").is_err());
        assert_eq!(parser.parse_str("yz").unwrap().as_str(), "y");
    }

    #[test]
    fn test_pattern_from_mid_input() {
        let cursor = StrCursor::new("ab12cd").advance(2);
        let matched = pattern("[0-9]+").unwrap().parse(cursor).unwrap();
        assert_eq!(matched.as_str(), "12");
        assert_eq!(matched.span().start, 2);
        assert_eq!(matched.remainder().position(), 4);
    }

    #[test]
    fn test_exhausted_input() {
        let cursor = StrCursor::new("12").advance(2);
        let err = pattern("[0-9]+").unwrap().parse(cursor).unwrap_err();
        assert_eq!(err.position(), 2);

        let matched = pattern("[0-9]*").unwrap().parse(cursor).unwrap();
        assert!(matched.is_empty());
        assert!(matched.is_complete());
    }

    #[test]
    fn test_matches_empty() {
        assert!(Pattern::new("x*").unwrap().matches_empty());
        assert!(!Pattern::new("x+").unwrap().matches_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = pattern("[0-9").unwrap_err();
        assert!(matches!(
            err,
            GrammarError::InvalidPattern { ref pattern, .. } if pattern == "[0-9"
        ));
        assert!(err.to_string().starts_with("invalid pattern `[0-9`"));
    }

    #[test]
    fn test_unicode_pattern() {
        let parser = pattern(r"\p{Hiragana}+").unwrap();
        let matched = parser.parse_str("こんにちは世界").unwrap();
        assert_eq!(matched.as_str(), "こんにちは");
        assert_eq!(matched.remainder().remaining(), "世界");
    }
}
