//! The immutable set of configuration items a consumer declares.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::item::ConfigItem;

/// A validated, immutable collection of configuration items.
///
/// Construction guarantees that every key is non-empty and unique.
///
/// # Examples
///
/// ```
/// use tierconf::{Item, ItemRegistry};
///
/// let registry = ItemRegistry::new(vec![Item::new("A"), Item::new("B")]).unwrap();
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get("A").is_some());
///
/// assert!(ItemRegistry::new(vec![Item::new("A"), Item::new("A")]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ItemRegistry<I> {
    items: Vec<I>,
}

impl<I: ConfigItem> ItemRegistry<I> {
    /// Build a registry from `items`, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidItem`] if a key is empty (or only whitespace)
    /// or appears more than once.
    pub fn new(items: Vec<I>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            let key = item.key();
            if key.trim().is_empty() {
                return Err(Error::InvalidItem {
                    key: key.to_string(),
                    reason: "key cannot be empty or only whitespace".into(),
                });
            }
            if !seen.insert(key) {
                return Err(Error::InvalidItem {
                    key: key.to_string(),
                    reason: "duplicate key".into(),
                });
            }
        }
        Ok(Self { items })
    }

    /// The item declared under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&I> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(ConfigItem::key)
    }
}

impl<I> ItemRegistry<I> {
    /// The items in declaration order.
    #[must_use]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry declares no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the registry, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<I> {
        self.items
    }
}

impl<'a, I> IntoIterator for &'a ItemRegistry<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
