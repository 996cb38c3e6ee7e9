//! Loading configuration into a consumer's own structure.
//!
//! The consumer implements [`Configuration`]: it declares its items and
//! pulls values by key when asked. [`ConfigLoader`] drives the resolve
//! cycle in between.

use crate::error::{Error, ObtainError, Result, ValidationErrors};
use crate::item::ConfigItem;
use crate::resolver::ProviderChain;
use crate::validator;
use crate::values::ResolvedValues;

/// A host application's typed configuration.
///
/// # Examples
///
/// ```
/// use tierconf::{rules, ConfigLoader, Configuration, Item, ObtainError, ProviderChain};
/// use tierconf::provider::DefaultValuesProvider;
///
/// #[derive(Default)]
/// struct AppConfig {
///     port: u64,
/// }
///
/// impl Configuration for AppConfig {
///     type Item = Item;
///
///     fn config_items(&self) -> Vec<Item> {
///         vec![Item::new("PORT").with_default("8080").with_rule(rules::is_uint())]
///     }
///
///     fn obtain_values(&mut self, get: &dyn Fn(&str) -> String) -> Result<(), ObtainError> {
///         self.port = rules::parse_uint(&get("PORT"))?;
///         Ok(())
///     }
/// }
///
/// let mut config = AppConfig::default();
/// let chain = ProviderChain::new().then(DefaultValuesProvider);
/// ConfigLoader::new().load_config(&mut config, &chain).unwrap();
/// assert_eq!(config.port, 8080);
/// ```
pub trait Configuration {
    /// The item descriptor type.
    type Item: ConfigItem;

    /// The items this configuration reads.
    fn config_items(&self) -> Vec<Self::Item>;

    /// Populate fields using `get`, which returns `""` for unresolved keys.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be converted.
    fn obtain_values(&mut self, get: &dyn Fn(&str) -> String) -> std::result::Result<(), ObtainError>;
}

/// Accumulates resolved values across one or more resolve cycles.
///
/// Each successful [`ConfigLoader::load_values`] call overlays its result on
/// what is already held, so a later call overrides an earlier one for the
/// same key. A failed call leaves the held values untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    values: ResolvedValues,
}

impl ConfigLoader {
    /// A loader holding no values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The held value for `key`, or `""`.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key)
    }

    /// All held values.
    #[must_use]
    pub fn values(&self) -> &ResolvedValues {
        &self.values
    }

    /// Resolve `items` through `chain` and hold the result.
    ///
    /// # Errors
    ///
    /// Returns the first provider error; held values are unchanged.
    pub fn load_values<I: ConfigItem>(
        &mut self,
        items: &[I],
        chain: &ProviderChain<'_, I>,
    ) -> Result<()> {
        let resolved = chain.resolve(items)?;
        self.values.overlay(resolved.into_inner());
        Ok(())
    }

    /// Resolve `config`'s items, then let it obtain its values.
    ///
    /// # Errors
    ///
    /// Returns the first provider error, or [`Error::Obtain`] if the
    /// consumer fails.
    pub fn load_config<C: Configuration>(
        &mut self,
        config: &mut C,
        chain: &ProviderChain<'_, C::Item>,
    ) -> Result<()> {
        let items = config.config_items();
        self.load_values(&items, chain)?;
        self.obtain(config)
    }

    /// Resolve, validate, and only then let `config` obtain its values.
    ///
    /// # Errors
    ///
    /// Returns the first provider error, [`Error::Validation`] listing every
    /// failing key, or [`Error::Obtain`].
    pub fn load_config_validated<C: Configuration>(
        &mut self,
        config: &mut C,
        chain: &ProviderChain<'_, C::Item>,
    ) -> Result<()> {
        let items = config.config_items();
        self.load_values(&items, chain)?;
        self.validate(&items)?;
        self.obtain(config)
    }

    /// Validate `items` against the held values.
    ///
    /// Call after the relevant values have been loaded.
    ///
    /// # Errors
    ///
    /// Returns every failing key at once.
    pub fn validate<I: ConfigItem>(&self, items: &[I]) -> std::result::Result<(), ValidationErrors> {
        validator::validate(items, &self.values)
    }

    fn obtain<C: Configuration>(&self, config: &mut C) -> Result<()> {
        let get = |key: &str| self.values.get(key).to_string();
        config
            .obtain_values(&get)
            .map_err(|source| Error::Obtain { source })
    }
}
