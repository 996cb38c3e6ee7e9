#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tierconf
//!
//! Layered configuration resolution and validation.
//!
//! A consumer declares a fixed set of items. Values for those items are
//! gathered from an ordered chain of providers (defaults, files, the
//! environment, or anything implementing [`provider::Provider`]), merged
//! so that later providers override earlier ones, and then checked against
//! per-item rules, reporting every failing item at once.
//!
//! ## Core Types
//!
//! - [`Item`] and [`ConfigItem`]: Item descriptors and their capabilities
//! - [`ItemRegistry`]: A validated set of items with unique keys
//! - [`ProviderChain`] and [`resolve`]: The ordered merge
//! - [`validate`] and [`ValidationErrors`]: Exhaustive validation
//! - [`ConfigLoader`] and [`Configuration`]: Loading into a typed structure
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tierconf::provider::{DefaultValuesProvider, EnvironmentProvider, YamlFileProvider};
//! use tierconf::{rules, validate, Item, ItemRegistry, ProviderChain};
//!
//! let registry = ItemRegistry::new(vec![
//!     Item::new("PORT")
//!         .with_default("8080")
//!         .with_file_key("port")
//!         .with_env_key("TIERCONF_DOC_PORT")
//!         .with_rule(rules::uint_range(1, 65535)),
//! ])
//! .unwrap();
//!
//! let chain = ProviderChain::new()
//!     .then(DefaultValuesProvider)
//!     .then(YamlFileProvider::new("/nonexistent/config.yaml"))
//!     .then(EnvironmentProvider);
//!
//! let values = chain.resolve(registry.items()).unwrap();
//! validate(registry.items(), &values).unwrap();
//! assert_eq!(values.get("PORT"), "8080");
//! ```

pub mod error;
pub mod item;
pub mod loader;
pub mod logging;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod rules;
pub mod validator;
pub mod values;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, FailureLine, ObtainError, Result, ValidationErrors};
pub use item::{ConfigItem, Item, Rule};
pub use loader::{ConfigLoader, Configuration};
pub use logging::{init_logger, LogLevel, Logger};
pub use registry::ItemRegistry;
pub use resolver::{resolve, ProviderChain};
pub use validator::validate;
pub use values::{RawValues, ResolvedValues};
