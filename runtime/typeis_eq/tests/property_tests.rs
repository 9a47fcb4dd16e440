//! Property-based tests for the equality engine.
//!
//! Generated values are nested arrays and plain objects over primitive
//! leaves. The properties checked:
//! 1. Reflexivity for primitives (NaN excluded, it is never `===` itself)
//! 2. A value equals a clone of itself, and an array rebuilt around the
//!    same elements
//! 3. Values with different type tags are never equal
//! 4. The corrected policy is symmetric

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use typeis_eq::{equal, EqPolicy, Equality};
use typeis_value::{classify, Value};

// -- Value Generation Strategies --

fn number_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1000i32..1000).prop_map(f64::from),
        prop::num::f64::NORMAL | prop::num::f64::ZERO | prop::num::f64::INFINITE,
    ]
}

/// Primitive leaves; `Undefined` and NaN are left out because an object
/// member holding either never passes the object rule against itself.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        number_strategy().prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

fn primitive_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![Just(Value::Undefined), leaf_strategy()]
}

/// Nested arrays and plain objects. Member names avoid `length`, which the
/// nested-array rule reads off the containing object.
fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(("[a-d]", inner), 0..4).prop_map(Value::object_from),
        ]
    })
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn primitives_are_reflexive(v in primitive_strategy()) {
        prop_assert!(equal(&v, &v));
    }

    #[test]
    fn value_equals_its_clone(v in value_strategy()) {
        prop_assert!(equal(&v, &v.clone()));
    }

    #[test]
    fn rebuilt_array_equals_original(items in prop::collection::vec(value_strategy(), 0..6)) {
        let a = Value::array(items.clone());
        let b = Value::array(items);
        prop_assert!(equal(&a, &b));
    }

    #[test]
    fn longer_array_is_not_equal(
        items in prop::collection::vec(value_strategy(), 0..6),
        extra in value_strategy(),
    ) {
        let mut longer = items.clone();
        longer.push(extra);
        prop_assert!(!equal(&Value::array(items.clone()), &Value::array(longer.clone())));
        prop_assert!(!equal(&Value::array(longer), &Value::array(items)));
    }

    #[test]
    fn tag_mismatch_is_never_equal(a in value_strategy(), b in value_strategy()) {
        prop_assume!(classify(&a) != classify(&b));
        prop_assert!(!equal(&a, &b));
        prop_assert!(!equal(&b, &a));
    }

    #[test]
    fn corrected_policy_is_symmetric(a in value_strategy(), b in value_strategy()) {
        let engine = Equality::new(EqPolicy::corrected());
        prop_assert_eq!(engine.equal(&a, &b), engine.equal(&b, &a));
    }

    #[test]
    fn corrected_policy_accepts_clones(v in value_strategy()) {
        let engine = Equality::new(EqPolicy::corrected());
        prop_assert!(engine.equal(&v, &v.clone()));
    }
}
