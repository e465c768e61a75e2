use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::item::Item;
use crate::matched::Match;
use crate::parser::{Matcher, ParseResult, Parser};
use log::debug;

/// Parser combinator that requires its inner parser to consume the whole input
///
/// This is useful for top-level parsers where trailing text is an error
/// rather than something for the caller to continue with.
#[derive(Debug, Clone)]
pub struct Complete<P> {
    parser: P,
}

impl<P> Complete<P> {
    pub fn new(parser: P) -> Self {
        Complete { parser }
    }
}

impl<P> Parser for Complete<P>
where
    P: Parser,
{
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        ensure_complete(self.parser.parse(cursor)?)
    }
}

pub(crate) fn ensure_complete(matched: Match<'_>) -> ParseResult<'_> {
    if matched.is_complete() {
        Ok(matched)
    } else {
        let position = matched.remainder().position();
        debug!(
            "rejecting match {:?}: {} bytes of trailing input at {}",
            matched.as_str(),
            matched.remainder().remaining().len(),
            position
        );
        Err(ParseError::TrailingInput { position })
    }
}

/// Convenience function to create a Complete parser
pub fn complete(item: impl Into<Item>) -> Complete<Matcher> {
    Complete::new(item.into().into_matcher())
}
