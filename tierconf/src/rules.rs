//! Reusable validation rules and value parsers.
//!
//! The parsers are meant to be shared between an item's rule and the
//! consumer's obtain step, so both agree on what a valid value is.
//!
//! ```
//! use tierconf::{rules, Item};
//!
//! let port = Item::new("PORT")
//!     .with_default("8080")
//!     .with_rule(rules::uint_range(1, 65535));
//! assert!(port.rule.as_ref().unwrap().check("8080").is_ok());
//! assert!(port.rule.as_ref().unwrap().check("0").is_err());
//! ```

use regex::Regex;

use crate::item::Rule;

/// Parse a boolean.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`,
/// `FALSE`, `false`, `False`.
///
/// # Errors
///
/// Returns a reason if `value` is not one of the accepted spellings.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("value {value} is not a valid boolean")),
    }
}

/// Parse a boolean that may be left unset.
///
/// The empty string yields `None`.
///
/// # Errors
///
/// Returns a reason if `value` is non-empty and not a valid boolean.
pub fn parse_optional_bool(value: &str) -> Result<Option<bool>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_bool(value)
        .map(Some)
        .map_err(|_| format!("value {value} is not a valid optional boolean"))
}

/// Parse an unsigned integer.
///
/// # Errors
///
/// Returns a reason if `value` is not an integer or is negative.
pub fn parse_uint(value: &str) -> Result<u64, String> {
    let parsed: i128 = value
        .parse()
        .map_err(|e| format!("value {value} is not a valid integer: {e}"))?;
    u64::try_from(parsed).map_err(|_| format!("value {value} is not a valid unsigned integer"))
}

/// Value must be a boolean.
#[must_use]
pub fn is_bool() -> Rule {
    Rule::new(|value| parse_bool(value).map(drop))
}

/// Value must be empty or a boolean.
#[must_use]
pub fn is_optional_bool() -> Rule {
    Rule::new(|value| parse_optional_bool(value).map(drop))
}

/// Value must be an unsigned integer.
#[must_use]
pub fn is_uint() -> Rule {
    Rule::new(|value| parse_uint(value).map(drop))
}

/// Value must be an unsigned integer in `[min, max]`.
#[must_use]
pub fn uint_range(min: u64, max: u64) -> Rule {
    Rule::new(move |value| {
        let parsed = parse_uint(value)?;
        if parsed < min || parsed > max {
            return Err(format!("value {value} is out of range [{min},...,{max}]"));
        }
        Ok(())
    })
}

/// Value must match `pattern` somewhere (unanchored).
///
/// # Errors
///
/// Returns the regex compile error if `pattern` is invalid.
pub fn pattern(pattern: &str) -> Result<Rule, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(Rule::new(move |value| {
        if regex.is_match(value) {
            Ok(())
        } else {
            Err(format!("does not match pattern {}", regex.as_str()))
        }
    }))
}

/// Value must equal `expected` exactly.
#[must_use]
pub fn equals(expected: impl Into<String>) -> Rule {
    let expected = expected.into();
    Rule::new(move |value| {
        if value == expected {
            Ok(())
        } else {
            Err(format!("value must be {expected}"))
        }
    })
}

/// Value must not be empty.
#[must_use]
pub fn non_empty() -> Rule {
    Rule::new(|value| {
        if value.is_empty() {
            Err("value must not be empty".to_string())
        } else {
            Ok(())
        }
    })
}

/// Value must be one of `allowed`.
#[must_use]
pub fn one_of<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> Rule {
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    Rule::new(move |value| {
        if allowed.iter().any(|a| a == value) {
            Ok(())
        } else {
            Err(format!(
                "value {value} is not one of [{}]",
                allowed.join(", ")
            ))
        }
    })
}
