use crate::complete::ensure_complete;
use crate::cursor::{IntoCursor, StrCursor};
use crate::error::{InvalidInputError, ParseError};
use crate::matched::Match;
use std::fmt;
use std::sync::Arc;

/// Outcome of running a parser: the match on success, or why it failed
pub type ParseResult<'code> = Result<Match<'code>, ParseError>;

/// Core parser trait for parser combinators
pub trait Parser {
    /// Attempt to parse from the given cursor position
    ///
    /// On success the returned match carries the cursor to continue from.
    /// Failures never consume input: the caller still owns `cursor`.
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code>;

    /// Parse from the start of `input`
    fn parse_str<'code>(&self, input: &'code str) -> ParseResult<'code>
    where
        Self: Sized,
    {
        self.parse(StrCursor::new(input))
    }

    /// Parse from raw text or an existing cursor
    fn parse_input<'code, I>(&self, input: I) -> Result<ParseResult<'code>, InvalidInputError>
    where
        Self: Sized,
        I: IntoCursor<'code>,
    {
        Ok(self.parse(input.into_cursor()?))
    }

    /// Parse `input` and require that nothing is left over
    fn parse_all<'code>(&self, input: &'code str) -> ParseResult<'code>
    where
        Self: Sized,
    {
        self.parse_str(input).and_then(ensure_complete)
    }
}

/// A shared, type-erased parser
///
/// Cheap to clone and safe to use from several threads at once, since
/// parsers hold no state between invocations.
#[derive(Clone)]
pub struct Matcher(Arc<dyn Parser + Send + Sync>);

impl Matcher {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
    {
        Matcher(Arc::new(parser))
    }
}

impl Parser for Matcher {
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        self.0.parse(cursor)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher(..)")
    }
}
