use crate::cursor::StrCursor;
use crate::item::Item;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that attaches a label to the match of its inner parser
///
/// The label makes the match addressable by name from the enclosing
/// sequence. It has no effect on what is matched: failures pass through
/// untouched and the consumed length is the inner parser's.
#[derive(Debug, Clone)]
pub struct Labeled<P> {
    label: Cow<'static, str>,
    parser: P,
}

impl<P> Labeled<P> {
    pub fn new(label: impl Into<Cow<'static, str>>, parser: P) -> Self {
        Labeled {
            label: label.into(),
            parser,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<P> Parser for Labeled<P>
where
    P: Parser,
{
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        self.parser
            .parse(cursor)
            .map(|matched| matched.with_label(self.label.clone()))
    }
}

/// Label any grammar item, including bare literals and patterns
pub fn label(name: impl Into<Cow<'static, str>>, item: impl Into<Item>) -> Item {
    Item::Labeled(name.into(), Box::new(item.into()))
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt: Parser + Sized {
    fn bind(self, label: impl Into<Cow<'static, str>>) -> Labeled<Self> {
        Labeled::new(label, self)
    }
}

/// Implement BindExt for all parsers
impl<P> BindExt for P where P: Parser {}
