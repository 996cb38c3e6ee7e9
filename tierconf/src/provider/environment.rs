//! Environment variable provider.
//!
//! Each item may name exactly one environment variable. No prefix or
//! namespacing is applied; choosing names is up to the consumer.

use std::env;

use crate::error::Result;
use crate::item::ConfigItem;
use crate::provider::Provider;
use crate::values::RawValues;

/// Reads each item's environment variable from the process environment.
///
/// A variable set to the empty string contributes `""`; an unset variable
/// contributes nothing. Never fails. Values that are not valid Unicode are
/// converted lossily.
///
/// # Examples
///
/// ```no_run
/// use tierconf::provider::{EnvironmentProvider, Provider};
/// use tierconf::Item;
///
/// let items = vec![Item::new("HOME_DIR").with_env_key("HOME")];
/// let values = EnvironmentProvider.provide(&items).unwrap();
/// println!("{:?}", values.get("HOME_DIR"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentProvider;

impl<I: ConfigItem> Provider<I> for EnvironmentProvider {
    fn name(&self) -> &str {
        "environment"
    }

    fn provide(&self, items: &[I]) -> Result<RawValues> {
        let mut values = RawValues::new();
        for item in items {
            let Some(var) = item.environment_key() else {
                continue;
            };
            if let Some(value) = env::var_os(var) {
                log::trace!("environment variable {var} resolves {}", item.key());
                values.insert(item.key().to_string(), value.to_string_lossy().into_owned());
            }
        }
        Ok(values)
    }
}
