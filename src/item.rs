use crate::alternation::Alternation;
use crate::bind::Labeled;
use crate::complete::Complete;
use crate::lazy::Lazy;
use crate::literal::LiteralParser;
use crate::optional::Optional;
use crate::parser::{Matcher, Parser};
use crate::pattern::{Pattern, PatternParser};
use crate::sequence::Sequence;
use std::borrow::Cow;

/// One element of a grammar, before it is turned into a parser
///
/// Combinators accept anything convertible into an `Item`, so a grammar can
/// mix bare strings, patterns, labeled sub-grammars and prebuilt parsers.
#[derive(Debug, Clone)]
pub enum Item {
    Literal(Cow<'static, str>),
    Pattern(Pattern),
    Matcher(Matcher),
    Labeled(Cow<'static, str>, Box<Item>),
}

impl Item {
    /// Normalize this item into a parser
    pub fn into_matcher(self) -> Matcher {
        match self {
            Item::Literal(text) => Matcher::new(LiteralParser::new(text)),
            Item::Pattern(pattern) => Matcher::new(PatternParser::new(pattern)),
            Item::Matcher(matcher) => matcher,
            Item::Labeled(label, inner) => Matcher::new(Labeled::new(label, inner.into_matcher())),
        }
    }
}

impl From<&'static str> for Item {
    fn from(text: &'static str) -> Self {
        Item::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Literal(Cow::Owned(text))
    }
}

impl From<Pattern> for Item {
    fn from(pattern: Pattern) -> Self {
        Item::Pattern(pattern)
    }
}

impl From<Matcher> for Item {
    fn from(matcher: Matcher) -> Self {
        Item::Matcher(matcher)
    }
}

macro_rules! parser_items {
    ($($parser:ty),* $(,)?) => {
        $(
            impl From<$parser> for Item {
                fn from(parser: $parser) -> Self {
                    Item::Matcher(Matcher::new(parser))
                }
            }
        )*
    };
}

parser_items!(LiteralParser, PatternParser, Sequence, Optional, Alternation);

impl<P> From<Labeled<P>> for Item
where
    P: Parser + Send + Sync + 'static,
{
    fn from(parser: Labeled<P>) -> Self {
        Item::Matcher(Matcher::new(parser))
    }
}

impl<P> From<Complete<P>> for Item
where
    P: Parser + Send + Sync + 'static,
{
    fn from(parser: Complete<P>) -> Self {
        Item::Matcher(Matcher::new(parser))
    }
}

impl<F, T> From<Lazy<F>> for Item
where
    F: Fn() -> T + Send + Sync + 'static,
    T: Into<Item>,
{
    fn from(parser: Lazy<F>) -> Self {
        Item::Matcher(Matcher::new(parser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::natnum;

    #[test]
    fn test_str_becomes_literal() {
        let item = Item::from("@");
        assert!(matches!(item, Item::Literal(ref text) if text == "@"));
        assert_eq!(item.into_matcher().parse_str("@x").unwrap().as_str(), "@");
    }

    #[test]
    fn test_pattern_item() {
        let item = Item::from(Pattern::new("[a-c]+").unwrap());
        let matched = item.into_matcher().parse_str("abcd").unwrap();
        assert_eq!(matched.as_str(), "abc");
    }

    #[test]
    fn test_labeled_item_keeps_label() {
        let item = Item::Labeled("n".into(), Box::new(natnum().into()));
        let matched = item.into_matcher().parse_str("42").unwrap();
        assert_eq!(matched.label(), Some("n"));
    }

    #[test]
    fn test_matcher_item_is_not_rewrapped() {
        let matcher = Matcher::new(natnum());
        let item = Item::from(matcher);
        assert!(matches!(item, Item::Matcher(_)));
    }
}
