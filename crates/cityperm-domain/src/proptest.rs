//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - exclusion precedence and default-deny
//! - evaluation determinism
//! - aggregation order

use crate::aggregate::aggregate;
use crate::engine::evaluate;
use crate::model::{Distributor, Location};
use crate::rule::{ExactRule, PermissionRule, PrefixRule, scope_covers};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// A single hierarchy segment (`KARNATAKA`, `IN`, ...).
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{2,8}").unwrap()
}

/// A most-specific-first code with one to three levels.
fn arb_code() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..=3).prop_map(|segs| segs.join("-"))
}

/// An ordered scope list, as written in a rule.
fn arb_scope_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_code(), 0..4)
}

fn arb_location() -> impl Strategy<Value = Location> {
    arb_code().prop_map(|code| Location {
        code: code.clone(),
        city_name: code.to_lowercase(),
        ..Location::default()
    })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec(arb_location(), 0..12)
}

fn arb_distributors() -> impl Strategy<Value = Vec<Distributor>> {
    prop::collection::vec((arb_scope_list(), arb_scope_list()), 0..8).prop_map(|rules| {
        rules
            .into_iter()
            .enumerate()
            .map(|(i, (include, exclude))| {
                Distributor::new(format!("D{i}"), PrefixRule::new(include, exclude))
            })
            .collect()
    })
}

// ============================================================================
// Rule properties
// ============================================================================

proptest! {
    #[test]
    fn excluded_codes_are_always_denied(
        include in arb_scope_list(),
        exclude in arb_scope_list(),
        code in arb_code(),
    ) {
        let rule = PrefixRule::new(include, exclude.clone());
        if exclude.iter().any(|e| scope_covers(e, &code)) {
            prop_assert!(!rule.permit(&code));
        }
    }

    #[test]
    fn excluding_the_code_itself_beats_any_include(
        include in arb_scope_list(),
        code in arb_code(),
    ) {
        let mut include = include;
        include.push(code.clone());
        let rule = PrefixRule::new(include, [code.clone()]);
        prop_assert!(!rule.permit(&code));
    }

    #[test]
    fn empty_include_denies_everything(exclude in arb_scope_list(), code in arb_code()) {
        let rule = PrefixRule::new(Vec::<String>::new(), exclude);
        prop_assert!(!rule.permit(&code));
    }

    #[test]
    fn unmatched_codes_default_deny(
        include in arb_scope_list(),
        exclude in arb_scope_list(),
        code in arb_code(),
    ) {
        let touched = include
            .iter()
            .chain(&exclude)
            .any(|e| scope_covers(e, &code));
        prop_assume!(!touched);
        let rule = PrefixRule::new(include, exclude);
        prop_assert!(!rule.permit(&code));
    }

    #[test]
    fn every_ancestor_scope_covers_its_code(segs in prop::collection::vec(arb_segment(), 1..=4)) {
        let code = segs.join("-");
        for start in 0..segs.len() {
            let ancestor = segs[start..].join("-");
            prop_assert!(scope_covers(&ancestor, &code), "{ancestor} should cover {code}");
        }
    }

    #[test]
    fn exact_rule_permits_only_listed_codes(
        include in arb_scope_list(),
        code in arb_code(),
    ) {
        let listed = include.contains(&code);
        let rule = ExactRule::new(include, Vec::<String>::new());
        prop_assert_eq!(rule.permit(&code), listed);
    }
}

// ============================================================================
// Evaluation and aggregation properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn evaluation_is_idempotent(
        include in arb_scope_list(),
        exclude in arb_scope_list(),
        catalog in arb_catalog(),
    ) {
        let d = Distributor::new("D", PrefixRule::new(include, exclude));
        prop_assert_eq!(evaluate(&d, &catalog), evaluate(&d, &catalog));
    }

    #[test]
    fn report_order_equals_submission_order(
        distributors in arb_distributors(),
        catalog in arb_catalog(),
    ) {
        let report = aggregate(&distributors, &catalog);

        let expected: Vec<&str> = distributors.iter().map(|d| d.name.as_str()).collect();
        prop_assert_eq!(report.distributor_names(), expected);
        for (block, d) in report.blocks.iter().zip(&distributors) {
            prop_assert_eq!(block.results.len(), catalog.len());
            prop_assert_eq!(&block.results, &evaluate(d, &catalog));
        }
    }
}
