//! Substitution tables.
//!
//! This module provides the [`Table`] trait consulted by substitutions at
//! render time, along with implementations for the usual map types.

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

/// A read-only mapping from placeholder identifiers to values.
///
/// Implemented for `HashMap` and `BTreeMap` keyed by anything that borrows
/// as `str` with any [`Display`] value, for slices, arrays and vectors of
/// `(key, value)` pairs, for `serde_json` objects, and for closures through
/// [`from_fn`].
///
/// # Manual Implementation
///
/// ```
/// use standout_pattern::{compile, Table};
/// use std::borrow::Cow;
///
/// struct Env;
///
/// impl Table for Env {
///     fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
///         match identifier {
///             "user" => Some(Cow::Borrowed("root")),
///             _ => None,
///         }
///     }
/// }
///
/// let pattern = compile("{user}@{host}").unwrap();
/// assert_eq!(pattern.render(&Env), "root@");
/// ```
pub trait Table {
    /// Returns the value for `identifier`, or `None` if the table has none.
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>>;
}

impl<T> Table for &T
where
    T: Table + ?Sized,
{
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(identifier)
    }
}

impl<K, V, S> Table for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: Display,
    S: BuildHasher,
{
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.get(identifier).map(|value| Cow::Owned(value.to_string()))
    }
}

impl<K, V> Table for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.get(identifier).map(|value| Cow::Owned(value.to_string()))
    }
}

/// Pairs are searched in order; the first matching key wins.
impl<K, V> Table for [(K, V)]
where
    K: AsRef<str>,
    V: Display,
{
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(key, _)| key.as_ref() == identifier)
            .map(|(_, value)| Cow::Owned(value.to_string()))
    }
}

impl<K, V, const N: usize> Table for [(K, V); N]
where
    K: AsRef<str>,
    V: Display,
{
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(identifier)
    }
}

impl<K, V> Table for Vec<(K, V)>
where
    K: AsRef<str>,
    V: Display,
{
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(identifier)
    }
}

/// Looks identifiers up in a JSON object.
///
/// Strings render verbatim, numbers and booleans through their JSON text,
/// `null` as the empty string, arrays and objects as compact JSON. Values
/// that are not objects have no entries.
impl Table for serde_json::Value {
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.as_object()?.lookup(identifier)
    }
}

impl Table for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        self.get(identifier).map(format_json)
    }
}

fn format_json(value: &serde_json::Value) -> Cow<'_, str> {
    match value {
        serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
        serde_json::Value::Null => Cow::Borrowed(""),
        serde_json::Value::Number(n) => Cow::Owned(n.to_string()),
        serde_json::Value::Bool(b) => Cow::Owned(b.to_string()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Cow::Owned(value.to_string())
        }
    }
}

/// A [`Table`] backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnTable<F>(F);

/// Creates a [`Table`] that calls `f` for every lookup.
///
/// ```
/// use standout_pattern::{compile, from_fn};
///
/// let pattern = compile("{a}-{b}").unwrap();
/// let upper = from_fn(|id: &str| Some(id.to_uppercase()));
/// assert_eq!(pattern.render(&upper), "A-B");
/// ```
pub fn from_fn<F>(f: F) -> FnTable<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnTable(f)
}

impl<F> Table for FnTable<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, identifier: &str) -> Option<Cow<'_, str>> {
        (self.0)(identifier).map(Cow::Owned)
    }
}
