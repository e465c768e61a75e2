use crate::cursor::StrCursor;
use crate::item::Item;
use crate::parser::{Matcher, ParseResult, Parser};
use once_cell::sync::OnceCell;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion in grammars that refer to themselves.
///
/// The parser is built on first use and reused by every later parse.
pub struct Lazy<F> {
    factory: F,
    parser: OnceCell<Matcher>,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }
}

impl<F, T> Parser for Lazy<F>
where
    F: Fn() -> T,
    T: Into<Item>,
{
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        self.parser
            .get_or_init(|| (self.factory)().into().into_matcher())
            .parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, T>(factory: F) -> Lazy<F>
where
    F: Fn() -> T,
    T: Into<Item>,
{
    Lazy::new(factory)
}
