use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::item::Item;
use crate::matched::Match;
use crate::parser::{Matcher, ParseResult, Parser};
use log::trace;

/// Parser combinator that runs its steps one after another, all or nothing
///
/// The match covers everything from the first step's start to the last
/// step's end. Each step that consumed something becomes a child, and
/// labeled children can be looked up by name. Steps that match the empty
/// string are dropped from the children, labels included, exactly like a
/// step that produced nothing.
///
/// The first failing step aborts the whole sequence:
/// ```
/// use parsibind::{ParseError, Parser, seq};
/// use parsibind::ascii::natnum;
///
/// let version = seq![natnum(), ".", natnum()];
/// assert_eq!(version.parse_str("1.2").unwrap().as_str(), "1.2");
///
/// let err = version.parse_str("1-2").unwrap_err();
/// assert!(matches!(err, ParseError::SequenceStep { index: 1, .. }));
/// ```
#[derive(Debug, Clone)]
pub struct Sequence {
    steps: Vec<Matcher>,
}

impl Sequence {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Sequence {
            steps: items
                .into_iter()
                .map(|item| item.into().into_matcher())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Parser for Sequence {
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        let start = cursor;
        let mut cursor = cursor;
        let mut children = Vec::new();

        for (index, step) in self.steps.iter().enumerate() {
            let child = step.parse(cursor).map_err(|source| {
                trace!(
                    "sequence from {} failed at step #{}: {}",
                    start.position(),
                    index,
                    source
                );
                ParseError::SequenceStep {
                    index,
                    source: Box::new(source),
                }
            })?;

            cursor = child.remainder();
            if !child.is_empty() {
                children.push(child);
            }
        }

        Ok(Match::node(start, cursor, children))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<I, T>(items: I) -> Sequence
where
    I: IntoIterator<Item = T>,
    T: Into<Item>,
{
    Sequence::new(items)
}

/// Build a [`Sequence`] from items of mixed types
///
/// Each argument may be anything convertible into an [`Item`]: a string
/// literal, a [`Pattern`](crate::Pattern), a labeled item or any parser.
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {{
        let items: ::std::vec::Vec<$crate::Item> = ::std::vec![$($crate::Item::from($item)),*];
        $crate::Sequence::new(items)
    }};
}
