//! Property-based tests for resolution and validation.

use crate::item::{Item, Rule};
use crate::provider::Provider;
use crate::resolver::resolve;
use crate::validator::validate;
use crate::values::{RawValues, ResolvedValues};
use crate::Result;
use proptest::prelude::*;

// Small key space so providers collide often
fn raw_values_strategy() -> impl Strategy<Value = RawValues> {
    prop::collection::btree_map("[A-E]", "[a-z0-9]{0,6}", 0..5)
}

fn chain_strategy() -> impl Strategy<Value = Vec<Option<RawValues>>> {
    prop::collection::vec(prop::option::weighted(0.8, raw_values_strategy()), 0..6)
}

fn fixed_provider(values: RawValues) -> impl Fn(&[Item]) -> Result<RawValues> {
    move |_| Ok(values.clone())
}

fn run_chain(chain: &[Option<RawValues>]) -> ResolvedValues {
    let providers: Vec<Option<Box<dyn Provider<Item>>>> = chain
        .iter()
        .map(|slot| {
            slot.clone()
                .map(|values| Box::new(fixed_provider(values)) as Box<dyn Provider<Item>>)
        })
        .collect();
    let refs: Vec<Option<&dyn Provider<Item>>> =
        providers.iter().map(|p| p.as_deref()).collect();
    resolve::<Item>(&[], &refs).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // The value for each key comes from the last provider that emitted it
    #[test]
    fn last_writer_wins(chain in chain_strategy()) {
        let resolved = run_chain(&chain);

        let mut expected = RawValues::new();
        for values in chain.iter().flatten() {
            for (key, value) in values {
                expected.insert(key.clone(), value.clone());
            }
        }
        prop_assert_eq!(resolved.as_map(), &expected);

        for (key, value) in resolved.iter() {
            let last = chain
                .iter()
                .flatten()
                .rev()
                .find_map(|values| values.get(key))
                .unwrap();
            prop_assert_eq!(value, last.as_str());
        }
    }

    // Removing absent slots never changes the result
    #[test]
    fn absent_providers_are_neutral(chain in chain_strategy()) {
        let without_absent: Vec<Option<RawValues>> =
            chain.iter().filter(|slot| slot.is_some()).cloned().collect();
        prop_assert_eq!(run_chain(&chain), run_chain(&without_absent));
    }

    // A failing provider anywhere yields an error, never a partial mapping
    #[test]
    fn any_failure_fails_whole_chain(
        chain in chain_strategy(),
        position in any::<prop::sample::Index>(),
    ) {
        let failing = |_: &[Item]| -> Result<RawValues> { Err(crate::Error::provider("boom")) };
        let mut providers: Vec<Option<Box<dyn Provider<Item>>>> = chain
            .iter()
            .map(|slot| {
                slot.clone()
                    .map(|values| Box::new(fixed_provider(values)) as Box<dyn Provider<Item>>)
            })
            .collect();
        let at = position.index(providers.len() + 1);
        providers.insert(at, Some(Box::new(failing) as Box<dyn Provider<Item>>));

        let refs: Vec<Option<&dyn Provider<Item>>> =
            providers.iter().map(|p| p.as_deref()).collect();
        let result = resolve::<Item>(&[], &refs);
        prop_assert!(result.is_err());
    }

    // Validation reports exactly the items whose rule fails
    #[test]
    fn validation_is_exhaustive(failing in prop::collection::vec(any::<bool>(), 0..12)) {
        let items: Vec<Item> = failing
            .iter()
            .enumerate()
            .map(|(i, fails)| {
                let fails = *fails;
                Item::new(format!("KEY{i}")).with_rule(Rule::new(move |_| {
                    if fails { Err("rejected".to_string()) } else { Ok(()) }
                }))
            })
            .collect();

        let expected = failing.iter().filter(|f| **f).count();
        match validate(&items, &ResolvedValues::new()) {
            Ok(()) => prop_assert_eq!(expected, 0),
            Err(errors) => {
                prop_assert_eq!(errors.len(), expected);
                for (i, fails) in failing.iter().enumerate() {
                    prop_assert_eq!(errors.get(&format!("KEY{i}")).is_some(), *fails);
                }
            }
        }
    }

    // Items without rules always validate
    #[test]
    fn validation_without_rules_is_noop(
        keys in prop::collection::btree_set("[A-Z]{1,8}", 0..10),
        values in raw_values_strategy(),
    ) {
        let items: Vec<Item> = keys.into_iter().map(Item::new).collect();
        prop_assert!(validate(&items, &ResolvedValues::from(values)).is_ok());
    }
}
