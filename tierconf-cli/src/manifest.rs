//! Item manifest files.
//!
//! A manifest declares the configuration items the CLI resolves:
//!
//! ```yaml
//! items:
//!   - key: PORT
//!     description: TCP port to listen on
//!     default: 8080
//!     file_key: port
//!     env_key: APP_PORT
//!     rule: uint-range:1..65535
//! ```
//!
//! Rule strings: `bool`, `optional-bool`, `uint`, `uint-range:MIN..MAX`,
//! `pattern:REGEX`, `non-empty`, `one-of:a|b|c`.

use crate::error::CliError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tierconf::{rules, Item, ItemRegistry, Rule};

/// A parsed manifest file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Declared items, in order.
    pub items: Vec<ItemSpec>,
}

/// One item declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    /// Unique item key.
    pub key: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Default value, kept as written so `default: 1.20` stays `1.20`.
    #[serde(default)]
    pub default: Option<String>,

    /// Key in the configuration file.
    pub file_key: Option<String>,

    /// Environment variable name.
    pub env_key: Option<String>,

    /// Validation rule.
    pub rule: Option<RuleSpec>,
}

/// A named validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    /// Boolean.
    Bool,
    /// Empty or boolean.
    OptionalBool,
    /// Unsigned integer.
    Uint,
    /// Unsigned integer within inclusive bounds.
    UintRange {
        /// Lower bound.
        min: u64,
        /// Upper bound.
        max: u64,
    },
    /// Unanchored regular expression.
    Pattern(String),
    /// Non-empty string.
    NonEmpty,
    /// One of a fixed set.
    OneOf(Vec<String>),
}

impl RuleSpec {
    /// Build the rule this spec names.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile.
    pub fn to_rule(&self) -> Result<Rule, CliError> {
        Ok(match self {
            Self::Bool => rules::is_bool(),
            Self::OptionalBool => rules::is_optional_bool(),
            Self::Uint => rules::is_uint(),
            Self::UintRange { min, max } => rules::uint_range(*min, *max),
            Self::Pattern(p) => rules::pattern(p)
                .map_err(|e| CliError::Manifest(format!("invalid pattern '{p}': {e}")))?,
            Self::NonEmpty => rules::non_empty(),
            Self::OneOf(values) => rules::one_of(values.iter().cloned()),
        })
    }
}

impl FromStr for RuleSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name, arg) {
            ("bool", None) => Ok(Self::Bool),
            ("optional-bool", None) => Ok(Self::OptionalBool),
            ("uint", None) => Ok(Self::Uint),
            ("non-empty", None) => Ok(Self::NonEmpty),
            ("uint-range", Some(range)) => {
                let (min, max) = range
                    .split_once("..")
                    .ok_or_else(|| format!("invalid range '{range}': expected MIN..MAX"))?;
                let min = rules::parse_uint(min.trim())?;
                let max = rules::parse_uint(max.trim())?;
                if max < min {
                    return Err(format!("invalid range '{range}': max must be >= min"));
                }
                Ok(Self::UintRange { min, max })
            }
            ("pattern", Some(pattern)) => {
                rules::pattern(pattern)
                    .map_err(|e| format!("invalid pattern '{pattern}': {e}"))?;
                Ok(Self::Pattern(pattern.to_string()))
            }
            ("one-of", Some(values)) => {
                let values: Vec<String> = values.split('|').map(str::to_string).collect();
                Ok(Self::OneOf(values))
            }
            _ => Err(format!("unknown rule '{s}'")),
        }
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::OptionalBool => write!(f, "optional-bool"),
            Self::Uint => write!(f, "uint"),
            Self::UintRange { min, max } => write!(f, "uint-range:{min}..{max}"),
            Self::Pattern(p) => write!(f, "pattern:{p}"),
            Self::NonEmpty => write!(f, "non-empty"),
            Self::OneOf(values) => write!(f, "one-of:{}", values.join("|")),
        }
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl ItemSpec {
    /// Convert into a library item.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule cannot be built.
    pub fn to_item(&self) -> Result<Item, CliError> {
        let mut item = Item::new(&self.key).with_description(&self.description);
        item.default_value.clone_from(&self.default);
        item.config_file_key.clone_from(&self.file_key);
        item.environment_key.clone_from(&self.env_key);
        if let Some(rule) = &self.rule {
            item.rule = Some(rule.to_rule()?);
        }
        Ok(item)
    }
}

impl Manifest {
    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or invalid.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Manifest not found: {}",
                path.display()
            )));
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents)
            .map_err(|e| CliError::Manifest(format!("{}: {e}", path.display())))
    }

    /// Build a registry of library items.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid rules or empty/duplicate keys.
    pub fn to_registry(&self) -> Result<ItemRegistry<Item>, CliError> {
        let items = self
            .items
            .iter()
            .map(ItemSpec::to_item)
            .collect::<Result<Vec<_>, _>>()?;
        ItemRegistry::new(items).map_err(|e| CliError::Manifest(e.to_string()))
    }
}
