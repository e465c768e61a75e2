//! # ParsiBind - String Parser Combinators with Named Bindings
//!
//! A small parser combinator library over UTF-8 text. Grammars are built from
//! literals and regular-expression tokens, composed with [`sequence`] and
//! [`optional`], and labeled so that the pieces of a successful parse can be
//! read back by name.
//!
//! ```
//! use parsibind::{BindExt, Parser, label, optional, seq};
//! use parsibind::ascii::{handle, natnum};
//!
//! let semver = seq![natnum().bind("major"), ".", natnum().bind("minor"), ".", natnum().bind("patch")];
//! let spec = seq![
//!     label("scope", optional(seq!["@", handle(), "/"])),
//!     handle().bind("name"),
//!     "@",
//!     semver.bind("semver"),
//! ];
//!
//! let parsed = spec.parse_all("@scope/tool@2.1.0").unwrap();
//! assert_eq!(parsed["scope"].as_str(), "@scope/");
//! assert_eq!(parsed["semver"]["minor"].as_str(), "1");
//! ```
//!
//! The library emphasizes:
//!
//! - **Failures as values**: parse errors come back in [`ParseResult`] and
//!   carry the byte offset where matching stopped
//! - **Value cursors**: a failed branch leaves the caller's cursor untouched
//! - **Shareable grammars**: a built grammar is immutable and can be reused
//!   from any thread

pub mod alternation;
pub mod ascii;
pub mod bind;
pub mod complete;
pub mod cursor;
pub mod error;
pub mod item;
pub mod lazy;
pub mod literal;
pub mod matched;
pub mod optional;
pub mod parser;
pub mod pattern;
pub mod position;
pub mod sequence;

pub use alternation::{Alternation, alternation};
pub use bind::{BindExt, Labeled, label};
pub use complete::{Complete, complete};
pub use cursor::{IntoCursor, StrCursor, make_cursor};
pub use error::{CodeLoc, GrammarError, InvalidInputError, ParseError};
pub use item::Item;
pub use lazy::{Lazy, lazy};
pub use literal::{LiteralParser, literal};
pub use matched::Match;
pub use optional::{Optional, OptionalExt, optional};
pub use parser::{Matcher, ParseResult, Parser};
pub use pattern::{Pattern, PatternParser, pattern};
pub use position::Span;
pub use sequence::{Sequence, sequence};
