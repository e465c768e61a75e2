use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// Raised when a cursor cannot be placed on the given input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot place a cursor at {position} in input of length {len}")]
pub struct InvalidInputError {
    pub position: usize,
    pub len: usize,
}

/// Errors raised while building a grammar, before any input is seen
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Why a parser rejected its input
///
/// Parse failures are ordinary values: every combinator returns them through
/// [`ParseResult`](crate::ParseResult) and only [`optional`](crate::optional)
/// ever swallows one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("failed to match literal {expected} at {position}")]
    LiteralMismatch {
        expected: Cow<'static, str>,
        position: usize,
    },
    #[error("failed to match pattern {pattern} at {position}")]
    PatternMismatch { pattern: Arc<str>, position: usize },
    /// Wrapped error from the first failing step of a sequence
    #[error("failed to parse seq #{index}: {source}")]
    SequenceStep {
        index: usize,
        source: Box<ParseError>,
    },
    #[error("unexpected trailing input at {position}")]
    TrailingInput { position: usize },
    #[error("{combinator} is not supported (attempted at {position})")]
    Unsupported {
        combinator: &'static str,
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset where this error occurred
    pub fn position(&self) -> usize {
        match self {
            ParseError::LiteralMismatch { position, .. } => *position,
            ParseError::PatternMismatch { position, .. } => *position,
            ParseError::SequenceStep { source, .. } => source.position(),
            ParseError::TrailingInput { position } => *position,
            ParseError::Unsupported { position, .. } => *position,
        }
    }

    /// Innermost error, skipping over sequence wrappers
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::SequenceStep { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Render this error against the input it was produced from, with the
    /// failing line marked and up to two lines of context on either side
    pub fn report(&self, source: &str) -> String {
        let loc = CodeLoc::new(source, self.position());
        let pos = loc.readable_position();
        let mut out = format!(
            "Syntax error at line {}, byte offset {}: {}\n\n",
            pos.line, pos.byte_offset, self
        );
        for line in loc.context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A location in some input text
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Byte offset in `code`, clamped to its length
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self {
            code,
            loc: loc.min(code.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Byte offset rather than column: columns depend on tab width and on how
    /// the terminal renders wide or combining characters.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.code.bytes().enumerate() {
            if i >= self.loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the error line, with a pointer under it
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // split('\n') yields a final empty piece for a trailing newline, which is
        // exactly the line an error at end of input points into
        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first || current_line > last {
                continue;
            }
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                // Pad by characters so earlier multibyte text doesn't shift the pointer
                let column = content
                    .get(..pos.byte_offset)
                    .map_or(pos.byte_offset, |before| before.chars().count());
                let pointer_offset = prefix.len() + column;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}
