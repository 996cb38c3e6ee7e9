//! Ordered merge of provider outputs.
//!
//! Providers run in the order given. Every pair a provider returns is
//! written into the accumulating mapping, so for any key the value of the
//! last provider that emitted it wins. A chain of defaults, then file, then
//! environment therefore lets the environment override the file, which
//! overrides the defaults.
//!
//! The first provider error ends resolution and is returned unchanged;
//! values gathered from earlier providers are discarded.

use std::fmt;

use crate::error::Result;
use crate::item::ConfigItem;
use crate::provider::Provider;
use crate::values::ResolvedValues;

/// Merge the outputs of `providers` for `items`, last writer wins.
///
/// `None` entries are skipped.
///
/// # Errors
///
/// Returns the first provider error encountered. Later providers are not
/// run.
///
/// # Examples
///
/// ```
/// use tierconf::provider::{DefaultValuesProvider, Provider};
/// use tierconf::{resolve, Item, RawValues, Result};
///
/// let items = vec![Item::new("A").with_default("default")];
/// let override_a = |_: &[Item]| -> Result<RawValues> {
///     Ok(RawValues::from([("A".to_string(), "override".to_string())]))
/// };
///
/// let values = resolve(&items, &[Some(&DefaultValuesProvider as &dyn Provider<Item>), None, Some(&override_a)]).unwrap();
/// assert_eq!(values.get("A"), "override");
/// ```
pub fn resolve<I: ConfigItem>(
    items: &[I],
    providers: &[Option<&dyn Provider<I>>],
) -> Result<ResolvedValues> {
    let mut values = ResolvedValues::new();

    for (position, provider) in providers.iter().enumerate() {
        let Some(provider) = provider else {
            log::trace!("provider #{position} is absent, skipping");
            continue;
        };

        let contributed = provider.provide(items).map_err(|e| {
            log::debug!("provider #{position} ({}) failed: {e}", provider.name());
            e
        })?;

        log::debug!(
            "provider #{position} ({}) contributed {} value(s)",
            provider.name(),
            contributed.len()
        );
        values.overlay(contributed);
    }

    Ok(values)
}

/// An ordered list of providers, lowest priority first.
///
/// Slots may be absent, which makes optional sources easy to wire in
/// without changing the chain's shape.
///
/// # Examples
///
/// ```
/// use tierconf::provider::{DefaultValuesProvider, EnvironmentProvider, YamlFileProvider};
/// use tierconf::{Item, ProviderChain};
///
/// let config_path: Option<&str> = None;
/// let chain = ProviderChain::new()
///     .then(DefaultValuesProvider)
///     .then_optional(config_path.map(YamlFileProvider::new))
///     .then(EnvironmentProvider);
/// assert_eq!(chain.len(), 3);
///
/// let items = vec![Item::new("A").with_default("1")];
/// let values = chain.resolve(&items).unwrap();
/// assert_eq!(values.get("A"), "1");
/// ```
pub struct ProviderChain<'a, I> {
    providers: Vec<Option<Box<dyn Provider<I> + 'a>>>,
}

impl<'a, I: ConfigItem> ProviderChain<'a, I> {
    /// An empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider; it overrides every provider before it.
    #[must_use]
    pub fn then<P: Provider<I> + 'a>(mut self, provider: P) -> Self {
        self.providers.push(Some(Box::new(provider)));
        self
    }

    /// Append a provider slot that may be absent.
    #[must_use]
    pub fn then_optional<P: Provider<I> + 'a>(mut self, provider: Option<P>) -> Self {
        self.providers
            .push(provider.map(|p| Box::new(p) as Box<dyn Provider<I> + 'a>));
        self
    }

    /// Append an absent slot.
    #[must_use]
    pub fn absent(mut self) -> Self {
        self.providers.push(None);
        self
    }

    /// Number of slots, absent ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolve `items` through every provider in order.
    ///
    /// # Errors
    ///
    /// Returns the first provider error encountered.
    pub fn resolve(&self, items: &[I]) -> Result<ResolvedValues> {
        let providers: Vec<Option<&dyn Provider<I>>> = self
            .providers
            .iter()
            .map(|slot| slot.as_deref().map(|p| p as &dyn Provider<I>))
            .collect();
        resolve(items, &providers)
    }
}

impl<I: ConfigItem> Default for ProviderChain<'_, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for ProviderChain<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.providers
                    .iter()
                    .map(|slot| slot.as_ref().map_or("<absent>", |p| p.name())),
            )
            .finish()
    }
}
