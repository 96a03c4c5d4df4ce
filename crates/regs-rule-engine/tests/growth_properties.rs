//! Property tests for rule store growth and ordering

use proptest::prelude::*;
use regs_rule_engine::{Rule, RuleMatcher, RuleStore, StoreConfig};

fn rule_strategy() -> impl Strategy<Value = Rule> {
    ("[a-z]{1,8}", "[a-zA-Z ]{0,12}").prop_map(|(pattern, name)| Rule::new(pattern, name))
}

#[test]
fn test_ten_thousand_sequential_adds() {
    let mut store = RuleStore::new();
    for i in 0..10_000 {
        store.add(Rule::new(format!("p{}", i), i.to_string()));
        assert!(store.len() < store.capacity());
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 10_000);
    for (i, rule) in snapshot.iter().enumerate() {
        assert_eq!(rule.name(), i.to_string());
        assert_eq!(rule.pattern(), format!("p{}", i));
    }
}

proptest! {
    #[test]
    fn sequential_adds_preserve_order(rules in prop::collection::vec(rule_strategy(), 0..300)) {
        let mut store = RuleStore::new();
        for rule in &rules {
            store.add(rule.clone());
        }

        prop_assert_eq!(store.len(), rules.len());
        prop_assert!(store.len() <= store.capacity());
        prop_assert_eq!(store.snapshot(), rules);
    }

    #[test]
    fn batch_add_appends_to_snapshot(
        before in prop::collection::vec(rule_strategy(), 0..50),
        batch in prop::collection::vec(rule_strategy(), 0..50),
    ) {
        let mut store = RuleStore::new();
        store.add_many(before.clone());
        let prior = store.snapshot();
        store.add_many(batch.clone());

        let mut expected = prior;
        expected.extend(batch);
        prop_assert_eq!(store.snapshot(), expected);
    }

    #[test]
    fn batch_and_single_adds_agree(rules in prop::collection::vec(rule_strategy(), 0..100)) {
        let mut single = RuleStore::new();
        for rule in &rules {
            single.add(rule.clone());
        }
        let mut batch = RuleStore::new();
        batch.add_many(rules);

        prop_assert_eq!(single.snapshot(), batch.snapshot());
    }

    #[test]
    fn growth_factor_never_loses_rules(
        factor in 1.01f64..8.0,
        count in 0usize..500,
    ) {
        let config = StoreConfig { growth_factor: factor, ..Default::default() };
        let mut store = RuleStore::with_config(config).unwrap();
        for i in 0..count {
            store.add(Rule::new("x", i.to_string()));
            prop_assert!(store.len() <= store.capacity());
        }

        let names: Vec<String> = store.iter().map(|r| r.name().to_string()).collect();
        let expected: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn clear_always_empties(rules in prop::collection::vec(rule_strategy(), 0..100)) {
        let mut store = RuleStore::new();
        store.add_many(rules);
        store.clear();

        prop_assert!(store.is_empty());
        prop_assert!(store.snapshot().is_empty());
        prop_assert_eq!(store.capacity(), 0);
    }

    #[test]
    fn empty_store_never_matches(text in ".*") {
        let store = RuleStore::new();
        prop_assert!(!store.matches_any(&text).unwrap());
    }

    #[test]
    fn literal_alternation_agrees_with_first_match(
        rules in prop::collection::vec(rule_strategy(), 0..20),
        text in "[a-z ]{0,30}",
    ) {
        let mut store = RuleStore::new();
        store.add_many(rules.clone());
        let matcher = RuleMatcher::new();

        let expected = rules.iter().find(|r| text.contains(r.pattern()));
        let found = matcher.first_match(&store, &text).unwrap();

        prop_assert_eq!(matcher.matches_any(&store, &text).unwrap(), expected.is_some());
        prop_assert_eq!(found.as_ref(), expected);
    }
}
