//! Error types for the pattern crate.

use thiserror::Error;

/// Syntax errors raised while compiling a pattern.
///
/// Every variant carries the character index where the problem was found.
/// Rendering never produces an error; all of these surface from
/// [`compile`](crate::compile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `{` was found while already inside a placeholder.
    #[error("nested opening brace at {position}")]
    NestedOpeningBrace { position: usize },

    /// A `}` was found outside of any placeholder.
    #[error("unmatched closing brace at {position}")]
    UnmatchedClosingBrace { position: usize },

    /// The input ended while a placeholder was still open.
    ///
    /// The position is the length of the input, in characters.
    #[error("unclosed opening brace at {position}")]
    UnclosedOpeningBrace { position: usize },
}

/// The kind of a [`PatternError`], without its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NestedOpeningBrace,
    UnmatchedClosingBrace,
    UnclosedOpeningBrace,
}

impl PatternError {
    /// Character index at which the error was detected.
    pub fn position(&self) -> usize {
        match *self {
            PatternError::NestedOpeningBrace { position }
            | PatternError::UnmatchedClosingBrace { position }
            | PatternError::UnclosedOpeningBrace { position } => position,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatternError::NestedOpeningBrace { .. } => ErrorKind::NestedOpeningBrace,
            PatternError::UnmatchedClosingBrace { .. } => ErrorKind::UnmatchedClosingBrace,
            PatternError::UnclosedOpeningBrace { .. } => ErrorKind::UnclosedOpeningBrace,
        }
    }
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
