//! Provider for declared default values.

use crate::error::Result;
use crate::item::ConfigItem;
use crate::provider::Provider;
use crate::values::RawValues;

/// Emits each item's declared default.
///
/// Items without a default contribute nothing. Usually placed first in a
/// chain so every other source can override it.
///
/// # Examples
///
/// ```
/// use tierconf::provider::{DefaultValuesProvider, Provider};
/// use tierconf::Item;
///
/// let items = vec![Item::new("A").with_default("1"), Item::new("B")];
/// let values = DefaultValuesProvider.provide(&items).unwrap();
///
/// assert_eq!(values.get("A").map(String::as_str), Some("1"));
/// assert!(!values.contains_key("B"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValuesProvider;

impl<I: ConfigItem> Provider<I> for DefaultValuesProvider {
    fn name(&self) -> &str {
        "defaults"
    }

    fn provide(&self, items: &[I]) -> Result<RawValues> {
        Ok(items
            .iter()
            .filter_map(|item| {
                item.default_value()
                    .map(|value| (item.key().to_string(), value.to_string()))
            })
            .collect())
    }
}
