//! Configuration value providers.
//!
//! A provider receives the full item list and returns raw values for the
//! items it can resolve. It never fails because of an unrelated item: an
//! item without the facet a provider reads is simply skipped.
//!
//! Closures with the signature `Fn(&[I]) -> Result<RawValues>` are
//! providers too, so one-off sources need no dedicated type:
//!
//! ```
//! use tierconf::provider::Provider;
//! use tierconf::{Item, RawValues, Result};
//!
//! let fixed = |items: &[Item]| -> Result<RawValues> {
//!     Ok(items
//!         .iter()
//!         .map(|item| (item.key.clone(), "fixed".to_string()))
//!         .collect())
//! };
//!
//! let values = fixed.provide(&[Item::new("A")]).unwrap();
//! assert_eq!(values["A"], "fixed");
//! ```

pub mod defaults;
pub mod environment;
pub mod file;

pub use defaults::DefaultValuesProvider;
pub use environment::EnvironmentProvider;
pub use file::YamlFileProvider;

use crate::error::Result;
use crate::item::ConfigItem;
use crate::values::RawValues;

/// A source of raw configuration values.
pub trait Provider<I> {
    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "custom"
    }

    /// Resolve values for the subset of `items` this source knows about.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source exists but cannot be read
    /// or interpreted. Absence of the source itself is not an error.
    fn provide(&self, items: &[I]) -> Result<RawValues>;
}

impl<I, F> Provider<I> for F
where
    I: ConfigItem,
    F: Fn(&[I]) -> Result<RawValues>,
{
    fn provide(&self, items: &[I]) -> Result<RawValues> {
        self(items)
    }
}
