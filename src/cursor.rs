use crate::error::InvalidInputError;
use crate::pattern::Pattern;

/// A position in some input text
///
/// A cursor is a plain value: advancing returns a new cursor and leaves the
/// old one valid, so a parser that fails simply hands back the cursor it was
/// given. Positions are byte offsets and always sit on a char boundary.
///
/// `position() + remaining().len() == source().len()` holds for every cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrCursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> StrCursor<'code> {
    /// Cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        StrCursor {
            source,
            position: 0,
        }
    }

    /// Cursor at an arbitrary position of `source`
    ///
    /// Fails if `position` is past the end or splits a UTF-8 sequence.
    pub fn at(source: &'code str, position: usize) -> Result<Self, InvalidInputError> {
        if !source.is_char_boundary(position) {
            return Err(InvalidInputError {
                position,
                len: source.len(),
            });
        }
        Ok(StrCursor { source, position })
    }

    /// The full input this cursor walks over
    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Input not yet consumed
    pub fn remaining(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Up to the next `n` characters, without advancing
    pub fn peek(&self, n: usize) -> &'code str {
        let rest = self.remaining();
        match rest.char_indices().nth(n) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Prefix of the remaining input matched by `pattern`, without advancing
    pub fn match_pattern(&self, pattern: &Pattern) -> Option<&'code str> {
        pattern.find_prefix(self.remaining())
    }

    /// Cursor `n` characters further on, the same unit [`peek`](Self::peek) counts
    ///
    /// Over-long requests stop at the end of input.
    pub fn advance(self, n: usize) -> Self {
        let rest = self.remaining();
        let skipped = match rest.char_indices().nth(n) {
            Some((end, _)) => end,
            None => rest.len(),
        };
        self.advance_bytes(skipped)
    }

    /// Cursor past `len` bytes of text a matcher has just consumed
    pub(crate) fn advance_bytes(self, len: usize) -> Self {
        let position = (self.position + len).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(position));
        StrCursor {
            source: self.source,
            position,
        }
    }

    /// Whether the whole input has been consumed
    pub fn is_complete(&self) -> bool {
        self.position == self.source.len()
    }

    /// Text between `start` and this cursor
    pub fn consumed_since(&self, start: StrCursor<'code>) -> &'code str {
        &self.source[start.position..self.position]
    }
}

/// Anything a parser can be run on: raw text or an existing cursor
pub trait IntoCursor<'code> {
    fn into_cursor(self) -> Result<StrCursor<'code>, InvalidInputError>;
}

impl<'code> IntoCursor<'code> for &'code str {
    fn into_cursor(self) -> Result<StrCursor<'code>, InvalidInputError> {
        Ok(StrCursor::new(self))
    }
}

impl<'code> IntoCursor<'code> for &'code String {
    fn into_cursor(self) -> Result<StrCursor<'code>, InvalidInputError> {
        Ok(StrCursor::new(self.as_str()))
    }
}

/// Already a cursor, passed through unchanged
impl<'code> IntoCursor<'code> for StrCursor<'code> {
    fn into_cursor(self) -> Result<StrCursor<'code>, InvalidInputError> {
        Ok(self)
    }
}

impl<'code> IntoCursor<'code> for (&'code str, usize) {
    fn into_cursor(self) -> Result<StrCursor<'code>, InvalidInputError> {
        StrCursor::at(self.0, self.1)
    }
}

/// Convenience function to obtain a cursor from any [`IntoCursor`] input
///
/// Empty text is accepted and yields a cursor that is already complete, so
/// that parsers such as [`optional`](crate::optional) can run on it. The only
/// rejected input is a position past the end or inside a UTF-8 sequence.
pub fn make_cursor<'code>(
    input: impl IntoCursor<'code>,
) -> Result<StrCursor<'code>, InvalidInputError> {
    input.into_cursor()
}
