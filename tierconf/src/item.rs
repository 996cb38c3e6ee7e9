//! Configuration item descriptors.
//!
//! An item is a named configuration slot. Every facet other than the key is
//! optional, and each provider reads only the facet it cares about: the
//! defaults provider reads [`ConfigItem::default_value`], the file provider
//! reads [`ConfigItem::config_file_key`] and so on. An absent facet means
//! "not resolvable from that source", never an error.

use std::fmt;
use std::sync::Arc;

/// A validation rule applied to an item's resolved value.
///
/// Rules receive the resolved string (empty if nothing resolved it) and
/// return a failure reason on rejection. Cloning is cheap.
///
/// # Examples
///
/// ```
/// use tierconf::Rule;
///
/// let rule = Rule::new(|value| {
///     if value.is_empty() {
///         Err("must not be empty".to_string())
///     } else {
///         Ok(())
///     }
/// });
///
/// assert!(rule.check("x").is_ok());
/// assert_eq!(rule.check("").unwrap_err(), "must not be empty");
/// ```
#[derive(Clone)]
pub struct Rule(Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>);

impl Rule {
    /// Wrap a checking function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Apply the rule to `value`.
    ///
    /// # Errors
    ///
    /// Returns the rule's failure reason if `value` is rejected.
    pub fn check(&self, value: &str) -> Result<(), String> {
        (self.0)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rule(..)")
    }
}

/// Capabilities a configuration item descriptor may expose.
///
/// Only [`ConfigItem::key`] is required. Host applications with their own
/// descriptor shape implement this trait and override the facets they
/// support; [`Item`] implements all of them.
pub trait ConfigItem {
    /// Unique identifier of the item.
    fn key(&self) -> &str;

    /// Value used by the defaults provider.
    fn default_value(&self) -> Option<&str> {
        None
    }

    /// Key looked up in configuration files.
    fn config_file_key(&self) -> Option<&str> {
        None
    }

    /// Environment variable name.
    fn environment_key(&self) -> Option<&str> {
        None
    }

    /// Rule the resolved value must satisfy.
    fn rule(&self) -> Option<&Rule> {
        None
    }
}

/// The standard configuration item descriptor.
///
/// # Examples
///
/// ```
/// use tierconf::{ConfigItem, Item};
///
/// let item = Item::new("LISTEN_PORT")
///     .with_description("TCP port to listen on")
///     .with_default("8080")
///     .with_file_key("listen_port")
///     .with_env_key("APP_LISTEN_PORT");
///
/// assert_eq!(item.key(), "LISTEN_PORT");
/// assert_eq!(item.default_value(), Some("8080"));
/// assert!(item.rule().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// Unique identifier.
    pub key: String,

    /// Human-readable description.
    pub description: String,

    /// Default value.
    pub default_value: Option<String>,

    /// Key in configuration files.
    pub config_file_key: Option<String>,

    /// Environment variable name.
    pub environment_key: Option<String>,

    /// Validation rule.
    pub rule: Option<Rule>,
}

impl Item {
    /// Create an item with only a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the configuration file key.
    #[must_use]
    pub fn with_file_key(mut self, key: impl Into<String>) -> Self {
        self.config_file_key = Some(key.into());
        self
    }

    /// Set the environment variable name.
    #[must_use]
    pub fn with_env_key(mut self, key: impl Into<String>) -> Self {
        self.environment_key = Some(key.into());
        self
    }

    /// Set the validation rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }
}

impl ConfigItem for Item {
    fn key(&self) -> &str {
        &self.key
    }

    fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    fn config_file_key(&self) -> Option<&str> {
        self.config_file_key.as_deref()
    }

    fn environment_key(&self) -> Option<&str> {
        self.environment_key.as_deref()
    }

    fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }
}

impl<T: ConfigItem + ?Sized> ConfigItem for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn default_value(&self) -> Option<&str> {
        (**self).default_value()
    }

    fn config_file_key(&self) -> Option<&str> {
        (**self).config_file_key()
    }

    fn environment_key(&self) -> Option<&str> {
        (**self).environment_key()
    }

    fn rule(&self) -> Option<&Rule> {
        (**self).rule()
    }
}
