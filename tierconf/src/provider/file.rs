//! Flat YAML configuration file provider.
//!
//! The file is a single-level YAML mapping of keys to scalar values:
//!
//! ```yaml
//! listen_port: 8080
//! log_level: debug
//! ```
//!
//! A missing file is a normal state and contributes nothing. In strict mode
//! (the default) a key that no item declares as its file key fails the
//! whole load, so typos do not go unnoticed.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::item::ConfigItem;
use crate::provider::Provider;
use crate::values::RawValues;

/// Reads values from a flat YAML file.
///
/// An existing file that is empty or holds only whitespace reads as an empty
/// mapping rather than a parse error.
///
/// # Examples
///
/// ```no_run
/// use tierconf::provider::{Provider, YamlFileProvider};
/// use tierconf::Item;
///
/// let items = vec![Item::new("PORT").with_file_key("port")];
/// let values = YamlFileProvider::new("config.yaml").provide(&items).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileProvider {
    path: PathBuf,
    strict: bool,
}

impl YamlFileProvider {
    /// Provider for the file at `path`, in strict mode.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: true,
        }
    }

    /// Ignore keys that no item declares instead of failing.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// The configured file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether unrecognized keys are rejected.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Read the file, or `None` if it does not exist.
    ///
    /// The handle is dropped before returning on every path.
    fn read_contents(&self) -> Result<Option<String>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::ProviderIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| Error::ProviderIo {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(contents))
    }

    /// Parse `contents` into a flat key → string mapping.
    ///
    /// Scalars keep their source text, so `1.20` stays `1.20`. Scalar keys
    /// such as `1` are read as strings. A null value becomes `""`.
    fn parse(&self, contents: &str) -> Result<RawValues> {
        if contents.trim().is_empty() {
            return Ok(RawValues::new());
        }

        let document: Option<BTreeMap<String, Option<String>>> =
            serde_yaml::from_str(contents).map_err(|e| self.parse_error(e.to_string()))?;

        Ok(document
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.unwrap_or_default()))
            .collect())
    }

    fn parse_error(&self, reason: String) -> Error {
        Error::ProviderParse {
            path: self.path.clone(),
            reason,
        }
    }
}

impl<I: ConfigItem> Provider<I> for YamlFileProvider {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn provide(&self, items: &[I]) -> Result<RawValues> {
        let Some(contents) = self.read_contents()? else {
            log::debug!(
                "configuration file {} not found, skipping",
                self.path.display()
            );
            return Ok(RawValues::new());
        };

        let all_values = self.parse(&contents)?;

        if self.strict {
            let known: HashSet<&str> = items.iter().filter_map(ConfigItem::config_file_key).collect();
            let mut unknown: Vec<&str> = all_values
                .keys()
                .map(String::as_str)
                .filter(|key| !known.contains(key))
                .collect();
            if !unknown.is_empty() {
                unknown.sort_unstable();
                return Err(self.parse_error(format!(
                    "unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let mut values = RawValues::new();
        for item in items {
            let Some(file_key) = item.config_file_key() else {
                continue;
            };
            if let Some(value) = all_values.get(file_key) {
                values.insert(item.key().to_string(), value.clone());
            }
        }
        Ok(values)
    }
}
