//! Raw and resolved configuration values.

use std::collections::BTreeMap;

/// A provider's contribution: item key → raw string value.
pub type RawValues = BTreeMap<String, String>;

/// The merged result of a resolve cycle.
///
/// Read-only once built. [`ResolvedValues::get`] maps absent keys to the
/// empty string, matching what consumers and validation rules see;
/// [`ResolvedValues::lookup`] keeps the distinction between "resolved to
/// empty" and "never resolved".
///
/// # Examples
///
/// ```
/// use tierconf::{RawValues, ResolvedValues};
///
/// let mut raw = RawValues::new();
/// raw.insert("SET_EMPTY".to_string(), String::new());
/// let values = ResolvedValues::from(raw);
///
/// assert_eq!(values.get("SET_EMPTY"), "");
/// assert_eq!(values.get("MISSING"), "");
/// assert_eq!(values.lookup("SET_EMPTY"), Some(""));
/// assert_eq!(values.lookup("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedValues {
    values: RawValues,
}

impl ResolvedValues {
    /// An empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value for `key`, or `""` if nothing resolved it.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or("")
    }

    /// The value for `key`, or `None` if nothing resolved it.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether some provider resolved `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of resolved keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolved pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The underlying mapping.
    #[must_use]
    pub fn as_map(&self) -> &RawValues {
        &self.values
    }

    /// Consume and return the underlying mapping.
    #[must_use]
    pub fn into_inner(self) -> RawValues {
        self.values
    }

    /// Overwrite entries with `other`'s (last writer wins).
    pub(crate) fn overlay(&mut self, other: RawValues) {
        self.values.extend(other);
    }
}

impl From<RawValues> for ResolvedValues {
    fn from(values: RawValues) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResolvedValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
