use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::item::Item;
use crate::parser::{Matcher, ParseResult, Parser};

/// Placeholder for choosing between competing alternatives
///
/// Choice with backtracking is not implemented. An `Alternation` accepts its
/// alternatives so grammars can be written against the final API, but every
/// parse fails with [`ParseError::Unsupported`] without trying any of them.
#[derive(Debug, Clone)]
pub struct Alternation {
    alternatives: Vec<Matcher>,
}

impl Alternation {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Alternation {
            alternatives: items
                .into_iter()
                .map(|item| item.into().into_matcher())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Parser for Alternation {
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        Err(ParseError::Unsupported {
            combinator: "alternation",
            position: cursor.position(),
        })
    }
}

/// Convenience function to create an Alternation parser
pub fn alternation<I, T>(items: I) -> Alternation
where
    I: IntoIterator<Item = T>,
    T: Into<Item>,
{
    Alternation::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::optional;
    use crate::seq;

    #[test]
    fn test_alternation_is_unsupported() {
        let parser = alternation(["a", "b"]);
        assert_eq!(parser.len(), 2);

        for input in ["a", "b", "c", ""] {
            assert_eq!(
                parser.parse_str(input).unwrap_err(),
                ParseError::Unsupported {
                    combinator: "alternation",
                    position: 0
                }
            );
        }
    }

    #[test]
    fn test_alternation_in_sequence() {
        let parser = seq!["x", alternation(["a", "b"])];
        let err = parser.parse_str("xa").unwrap_err();
        assert!(matches!(err, ParseError::SequenceStep { index: 1, .. }));
        assert_eq!(err.position(), 1);
        assert_eq!(
            err.to_string(),
            "failed to parse seq #1: alternation is not supported (attempted at 1)"
        );
    }

    #[test]
    fn test_optional_alternation_is_empty() {
        let matched = optional(alternation(["a"])).parse_str("a").unwrap();
        assert!(matched.is_empty());
    }
}
