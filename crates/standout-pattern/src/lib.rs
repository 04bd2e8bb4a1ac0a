//! Pattern - Compiled `{placeholder}` strings for fast repeated interpolation.
//!
//! A pattern is literal text interleaved with `{identifier}` placeholders.
//! It is parsed once into a [`Pattern`] and can then be rendered any number
//! of times against different substitution tables, without re-parsing:
//!
//! - Compile once with [`compile`], render many times with [`Pattern::render`]
//! - Any map-like type works as a table through the [`Table`] trait
//! - Missing identifiers never fail a render; see [`MissingKey`]
//! - Malformed braces are reported at compile time with their position
//!
//! # Quick Start
//!
//! ```rust
//! use standout_pattern::compile;
//! use std::collections::HashMap;
//!
//! let pattern = compile("Hello, {name}! You have {count} new messages.").unwrap();
//!
//! let mut table = HashMap::new();
//! table.insert("name", "Ada".to_string());
//! table.insert("count", 3.to_string());
//!
//! assert_eq!(pattern.render(&table), "Hello, Ada! You have 3 new messages.");
//!
//! // Missing identifiers render as nothing.
//! table.remove("count");
//! assert_eq!(pattern.render(&table), "Hello, Ada! You have  new messages.");
//! ```
//!
//! # Syntax
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `text` | Literal text, rendered verbatim |
//! | `{name}` | Substitution, replaced by the table's value for `name` |
//! | `{}` | Empty placeholder, renders nothing |
//!
//! Everything between braces is the identifier, whitespace included. There
//! is no escaping, nesting, default value, or format specifier.
//!
//! # Errors
//!
//! ```rust
//! use standout_pattern::{compile, PatternError};
//!
//! assert_eq!(
//!     compile("{a{b}}").unwrap_err(),
//!     PatternError::NestedOpeningBrace { position: 2 }
//! );
//! assert_eq!(
//!     compile("text }").unwrap_err(),
//!     PatternError::UnmatchedClosingBrace { position: 5 }
//! );
//! assert_eq!(
//!     compile("text {x").unwrap_err(),
//!     PatternError::UnclosedOpeningBrace { position: 7 }
//! );
//! ```
//!
//! Positions are character indices into the source.

mod builder;
mod error;
mod pattern;
mod scanner;
mod symbol;
mod table;

// Re-export public API
pub use error::{ErrorKind, PatternError, Result};
pub use pattern::{MissingKey, Pattern};
pub use symbol::Symbol;
pub use table::{from_fn, FnTable, Table};

/// Compiles `source` into a reusable [`Pattern`].
///
/// Shorthand for [`Pattern::compile`].
pub fn compile(source: &str) -> Result<Pattern> {
    Pattern::compile(source)
}
