//! Compiled patterns and rendering.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::build_symbols;
use crate::error::{PatternError, Result};
use crate::scanner::scan;
use crate::symbol::Symbol;
use crate::table::Table;

/// How a substitution renders when the table has no value for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKey {
    /// Render nothing.
    #[default]
    Empty,

    /// Re-emit the placeholder as `{identifier}`.
    /// Used to spot unresolved identifiers in the output.
    Keep,
}

/// A pre-parsed pattern, ready to be rendered any number of times.
///
/// Patterns are immutable once compiled and are `Send + Sync`, so a single
/// pattern can be shared and rendered concurrently.
///
/// # Example
///
/// ```rust
/// use standout_pattern::Pattern;
/// use std::collections::HashMap;
///
/// let pattern = Pattern::compile("Hello, {name}!").unwrap();
///
/// let mut table = HashMap::new();
/// table.insert("name", "World");
/// assert_eq!(pattern.render(&table), "Hello, World!");
///
/// table.insert("name", "Rust");
/// assert_eq!(pattern.render(&table), "Hello, Rust!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: Vec<Symbol>,
}

impl Pattern {
    /// Compiles `source` into a pattern.
    ///
    /// Fails with the first brace syntax error found; see [`PatternError`].
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn compile(source: &str) -> Result<Self> {
        let tagged = scan(source).inspect_err(|err| {
            tracing::debug!(%err, "pattern rejected");
        })?;
        let symbols = build_symbols(&tagged);
        tracing::debug!(symbols = symbols.len(), "pattern compiled");
        Ok(Self { symbols })
    }

    /// Renders the pattern against `table`.
    ///
    /// Identifiers missing from the table render as the empty string.
    pub fn render<T>(&self, table: &T) -> String
    where
        T: Table + ?Sized,
    {
        self.render_with(table, MissingKey::default())
    }

    /// Renders the pattern against `table`, handling absent identifiers
    /// according to `missing`.
    pub fn render_with<T>(&self, table: &T, missing: MissingKey) -> String
    where
        T: Table + ?Sized,
    {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_to(&mut output, table, missing);
        output
    }

    /// Renders the pattern into `out`.
    ///
    /// The only possible error is one reported by the writer itself.
    pub fn render_to<W, T>(&self, out: &mut W, table: &T, missing: MissingKey) -> fmt::Result
    where
        W: Write + ?Sized,
        T: Table + ?Sized,
    {
        for symbol in &self.symbols {
            match symbol.resolve(table) {
                Some(value) => out.write_str(&value)?,
                None => {
                    tracing::trace!(identifier = symbol.text(), "no value in table");
                    if missing == MissingKey::Keep {
                        write!(out, "{}", symbol)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// The compiled symbols, in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Consumes the pattern, returning its symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the pattern has no symbols and always renders `""`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Identifiers of all substitutions, in order of appearance.
    ///
    /// Repeated identifiers are yielded each time they occur.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.symbols
            .iter()
            .filter(|symbol| symbol.is_substitution())
            .map(Symbol::text)
    }
}

/// Writes the canonical source of the pattern.
///
/// Compiling the output again yields a pattern that renders identically.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols
            .iter()
            .try_for_each(|symbol| write!(f, "{}", symbol))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let source = String::deserialize(deserializer)?;
        Self::compile(&source).map_err(serde::de::Error::custom)
    }
}
