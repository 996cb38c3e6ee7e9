//! Error types for the tierconf library.
//!
//! This module provides the error hierarchy for resolving and validating
//! configuration, using `thiserror` for ergonomic error handling.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tierconf error.
///
/// # Examples
///
/// ```
/// use tierconf::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("value".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by a consumer while materializing resolved values.
pub type ObtainError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for the tierconf library.
///
/// Provider and consumer errors abort a resolve cycle immediately.
/// Validation errors are collected for every item before being reported.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration item was rejected when building a registry.
    #[error("invalid configuration item '{key}': {reason}")]
    InvalidItem {
        /// The offending item key.
        key: String,
        /// The reason the item is invalid.
        reason: String,
    },

    /// A configuration source exists but could not be read.
    #[error("failed to open configuration file {}: {source}", path.display())]
    ProviderIo {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration source could not be interpreted as a flat mapping.
    #[error("failed to parse configuration file {}: {reason}", path.display())]
    ProviderParse {
        /// The path that failed to parse.
        path: PathBuf,
        /// A description of the parse failure.
        reason: String,
    },

    /// A provider failed for a reason of its own.
    #[error("{message}")]
    Provider {
        /// The provider's failure message, surfaced verbatim.
        message: String,
    },

    /// The consumer failed to obtain its values from the resolved mapping.
    #[error("{source}")]
    Obtain {
        /// The consumer's error.
        #[source]
        source: ObtainError,
    },

    /// One or more items failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl Error {
    /// Create a provider error carrying `message` verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierconf::Error;
    ///
    /// let err = Error::provider("some load error");
    /// assert_eq!(err.to_string(), "some load error");
    /// ```
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Check if error is an aggregate validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Per-key validation failures, if this is a validation error.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Aggregate of every validation failure found in one pass.
///
/// Display yields the summary line; [`ValidationErrors::failures`] carries
/// the detail for each failing key.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use tierconf::ValidationErrors;
///
/// let mut failures = BTreeMap::new();
/// failures.insert("PORT".to_string(), "value x is not a valid unsigned integer".to_string());
/// let errors = ValidationErrors::new(failures);
///
/// assert_eq!(errors.to_string(), "1 configuration key(s) failed validation");
/// assert!(errors.get("PORT").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} configuration key(s) failed validation", .failures.len())]
pub struct ValidationErrors {
    failures: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Wrap a key→reason mapping.
    #[must_use]
    pub fn new(failures: BTreeMap<String, String>) -> Self {
        Self { failures }
    }

    /// Failure reasons by item key.
    #[must_use]
    pub fn failures(&self) -> &BTreeMap<String, String> {
        &self.failures
    }

    /// The failure reason for `key`, if it failed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.failures.get(key).map(String::as_str)
    }

    /// Number of failing keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether no key failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Keys that failed, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.failures.keys().map(String::as_str)
    }

    /// One human-readable line per failing key.
    pub fn report(&self) -> impl Iterator<Item = FailureLine<'_>> {
        self.failures
            .iter()
            .map(|(key, reason)| FailureLine { key, reason })
    }

    /// Consume and return the key→reason mapping.
    #[must_use]
    pub fn into_failures(self) -> BTreeMap<String, String> {
        self.failures
    }
}

/// A single formatted validation failure.
#[derive(Debug, Clone, Copy)]
pub struct FailureLine<'a> {
    /// The failing item key.
    pub key: &'a str,
    /// Why it failed.
    pub reason: &'a str,
}

impl fmt::Display for FailureLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to validate configuration value of {}: {}",
            self.key, self.reason
        )
    }
}
