use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::matched::Match;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact, case-sensitive string
#[derive(Debug, Clone)]
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl Parser for LiteralParser {
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        if cursor.remaining().starts_with(&*self.expected) {
            Ok(Match::leaf(cursor, cursor.advance_bytes(self.expected.len())))
        } else {
            // Clone is cheap here - just copies the reference for &'static str
            Err(ParseError::LiteralMismatch {
                expected: self.expected.clone(),
                position: cursor.position(),
            })
        }
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}
