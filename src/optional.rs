use crate::cursor::StrCursor;
use crate::item::Item;
use crate::matched::Match;
use crate::parser::{Matcher, ParseResult, Parser};
use log::trace;

/// Parser combinator that tries its inner parser once and never fails
///
/// On success the inner match is passed through unchanged, label included.
/// On failure the result is an empty match at the cursor it was given, as
/// though nothing had been attempted.
#[derive(Debug, Clone)]
pub struct Optional {
    parser: Matcher,
}

impl Optional {
    pub fn new(item: impl Into<Item>) -> Self {
        Optional {
            parser: item.into().into_matcher(),
        }
    }
}

impl Parser for Optional {
    fn parse<'code>(&self, cursor: StrCursor<'code>) -> ParseResult<'code> {
        match self.parser.parse(cursor) {
            Ok(matched) => Ok(matched),
            Err(err) => {
                trace!("optional absorbed failure at {}: {}", cursor.position(), err);
                Ok(Match::empty(cursor))
            }
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional(item: impl Into<Item>) -> Optional {
    Optional::new(item)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized + Send + Sync + 'static {
    fn optional(self) -> Optional {
        Optional {
            parser: Matcher::new(self),
        }
    }
}

/// Implement OptionalExt for all shareable parsers
impl<P> OptionalExt for P where P: Parser + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::handle;
    use crate::bind::BindExt;
    use crate::literal::literal;
    use crate::seq;

    #[test]
    fn test_optional_succeeds() {
        let matched = optional("-").parse_str("-rc1").unwrap();
        assert_eq!(matched.as_str(), "-");
        assert_eq!(matched.remainder().position(), 1);
    }

    #[test]
    fn test_optional_absorbs_failure() {
        let cursor = StrCursor::new("x-y").advance(1);
        let matched = optional("@").parse(cursor).unwrap();
        assert!(matched.is_empty());
        assert!(matched.children().is_empty());
        assert_eq!(matched.remainder(), cursor);
    }

    #[test]
    fn test_optional_on_empty_input() {
        let matched = optional(handle()).parse_str("").unwrap();
        assert!(matched.is_empty());
        assert!(matched.is_complete());
    }

    #[test]
    fn test_optional_reverts_partial_sequence() {
        // The inner sequence gets as far as "@foo" before failing
        let parser = optional(seq!["@", handle(), "/"]);
        let matched = parser.parse_str("@foo@1.0.0").unwrap();
        assert!(matched.is_empty());
        assert_eq!(matched.remainder().position(), 0);
    }

    #[test]
    fn test_optional_keeps_inner_label() {
        let matched = optional(literal("a").bind("x")).parse_str("a").unwrap();
        assert_eq!(matched.label(), Some("x"));
    }

    #[test]
    fn test_optional_method_syntax() {
        let parser = literal("v").optional();
        assert_eq!(parser.parse_str("v1").unwrap().as_str(), "v");
        assert!(parser.parse_str("1").unwrap().is_empty());
    }
}
