//! Validation of resolved values against per-item rules.
//!
//! Validation depends only on the final mapping, not on how it was
//! resolved, so a hand-built [`ResolvedValues`] validates the same way.

use std::collections::BTreeMap;

use crate::error::ValidationErrors;
use crate::item::ConfigItem;
use crate::values::ResolvedValues;

/// Check every item that declares a rule against its resolved value.
///
/// Absent values are checked as the empty string. Items without a rule are
/// always valid. All failures are collected; nothing short-circuits.
///
/// # Errors
///
/// Returns [`ValidationErrors`] with one entry per failing key when at
/// least one rule rejects its value.
///
/// # Examples
///
/// ```
/// use tierconf::{rules, validate, Item, ResolvedValues};
///
/// let items = vec![
///     Item::new("PORT").with_rule(rules::is_uint()),
///     Item::new("DEBUG").with_rule(rules::is_bool()),
/// ];
/// let values: ResolvedValues = [("PORT", "abc")].into_iter().collect();
///
/// let errors = validate(&items, &values).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.to_string(), "2 configuration key(s) failed validation");
/// ```
pub fn validate<I: ConfigItem>(
    items: &[I],
    values: &ResolvedValues,
) -> Result<(), ValidationErrors> {
    let mut failures = BTreeMap::new();

    for item in items {
        let Some(rule) = item.rule() else {
            continue;
        };
        if let Err(reason) = rule.check(values.get(item.key())) {
            log::trace!("{} failed validation: {reason}", item.key());
            failures.insert(item.key().to_string(), reason);
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        log::debug!("{} configuration key(s) failed validation", failures.len());
        Err(ValidationErrors::new(failures))
    }
}
