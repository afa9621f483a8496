//! Error types for filter and order compilation

use thiserror::Error;

/// Errors that can occur while compiling a filter or order expression.
///
/// All three kinds are terminal: compilation stops at the first problem and
/// no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input text that matches no token rule
    #[error("Lexical error at position {position}: {message} ('{text}')")]
    Lexical {
        /// The offending text
        text: String,
        /// Description of what went wrong
        message: String,
        /// Byte offset in the canonical input
        position: usize,
    },

    /// Token stream that does not match the grammar
    #[error("Syntax error at position {position}: expected {expected}, found {found}")]
    Syntax {
        /// The construct the parser was looking for
        expected: String,
        /// The token actually found
        found: String,
        /// Byte offset in the canonical input
        position: usize,
    },

    /// Order expression part that is not of the `(A|D)<property>` shape
    #[error("Order parsing error: {message}: '{segment}'")]
    OrderParsing {
        /// The offending dash-delimited part
        segment: String,
        /// Description of what went wrong
        message: String,
    },
}

impl ParseError {
    pub(crate) fn lexical(text: impl Into<String>, message: impl Into<String>, position: usize) -> Self {
        ParseError::Lexical {
            text: text.into(),
            message: message.into(),
            position,
        }
    }

    pub(crate) fn syntax(expected: impl Into<String>, found: impl Into<String>, position: usize) -> Self {
        ParseError::Syntax {
            expected: expected.into(),
            found: found.into(),
            position,
        }
    }

    pub(crate) fn order(segment: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::OrderParsing {
            segment: segment.into(),
            message: message.into(),
        }
    }

    /// Position of the error in the canonical filter text, if it has one.
    ///
    /// Order errors carry the offending segment instead of an offset.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lexical { position, .. } | ParseError::Syntax { position, .. } => {
                Some(*position)
            }
            ParseError::OrderParsing { .. } => None,
        }
    }

    /// Whether this error was raised by the lexer
    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lexical { .. })
    }

    /// Whether this error was raised by the filter parser
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    /// Whether this error was raised by the order parser
    pub fn is_order(&self) -> bool {
        matches!(self, ParseError::OrderParsing { .. })
    }
}

/// Result type for compilation operations
pub type Result<T> = std::result::Result<T, ParseError>;
