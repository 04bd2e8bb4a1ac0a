//! Renderable units of a compiled pattern.
//!
//! A [`Symbol`] is either fixed text or the name of a value to look up at
//! render time.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// One renderable unit of a [`Pattern`](crate::Pattern).
///
/// Symbols produced by the compiler never carry empty text.
///
/// # Example
///
/// ```
/// use standout_pattern::Symbol;
/// use std::collections::HashMap;
///
/// let mut table = HashMap::new();
/// table.insert("name", "World");
///
/// let literal = Symbol::Literal("Hello".into());
/// let substitution = Symbol::Substitution("name".into());
///
/// assert_eq!(literal.resolve(&table).as_deref(), Some("Hello"));
/// assert_eq!(substitution.resolve(&table).as_deref(), Some("World"));
/// assert_eq!(Symbol::Substitution("other".into()).resolve(&table), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Fixed text, rendered as-is.
    Literal(String),
    /// Placeholder identifier, resolved against the table.
    Substitution(String),
}

impl Symbol {
    /// Resolves this symbol against `table`.
    ///
    /// Literals ignore the table entirely. Substitutions return `None` when
    /// the table has no value for their identifier; the caller decides how
    /// an absent value renders.
    pub fn resolve<'a, T>(&'a self, table: &'a T) -> Option<Cow<'a, str>>
    where
        T: Table + ?Sized,
    {
        match self {
            Symbol::Literal(text) => Some(Cow::Borrowed(text.as_str())),
            Symbol::Substitution(identifier) => table.lookup(identifier),
        }
    }

    /// The literal text or the placeholder identifier.
    pub fn text(&self) -> &str {
        match self {
            Symbol::Literal(text) | Symbol::Substitution(text) => text,
        }
    }

    /// Returns `true` if this is a `Literal`.
    pub fn is_literal(&self) -> bool {
        matches!(self, Symbol::Literal(_))
    }

    /// Returns `true` if this is a `Substitution`.
    pub fn is_substitution(&self) -> bool {
        matches!(self, Symbol::Substitution(_))
    }
}

/// Writes the symbol back in pattern syntax.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(text) => f.write_str(text),
            Symbol::Substitution(identifier) => write!(f, "{{{}}}", identifier),
        }
    }
}
