//! Name-based dispatch through `check`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use typeis::{check, CheckError, EqPolicy, PredicateName, Value};

fn args_of(arity: usize, value: &Value) -> Vec<Value> {
    vec![value.clone(); arity]
}

#[test]
fn canonical_names_and_aliases() {
    assert_eq!(check("positiveInt", &[Value::from(3)]), Ok(true));
    assert_eq!(check("posInt", &[Value::from(3)]), Ok(true));
    assert_eq!(check("positiveInteger", &[Value::from(-3)]), Ok(false));
    assert_eq!(check("ary.empty", &[Value::array(vec![])]), Ok(true));
    assert_eq!(check("arguments.empty", &[Value::string("")]), Ok(true));
    assert_eq!(check("isArray", &[Value::arguments(vec![])]), Ok(false));
}

#[test]
fn type_takes_its_name_as_a_primitive_string() {
    let one = Value::from(1);
    assert_eq!(check("type", &[one.clone(), Value::string("number")]), Ok(true));
    assert_eq!(check("a", &[one.clone(), Value::string("string")]), Ok(false));
    assert_eq!(check("a", &[one, Value::boxed_string("number")]), Ok(false));
}

#[test]
fn equality_through_dispatch_uses_default_policy() {
    let x = Value::object_from([("a", Value::from(1)), ("b", Value::Undefined)]);
    let y = Value::object_from([("a", Value::from(1))]);
    assert_eq!(check("eq", &[x.clone(), y.clone()]), Ok(false));
    assert_eq!(check("equal", &[y.clone(), x.clone()]), Ok(true));

    let symmetric = typeis::Equality::new(EqPolicy::corrected());
    assert!(!symmetric.equal(&y, &x));
}

#[test]
fn within_takes_three_arguments() {
    let args = [Value::from(5), Value::from(1), Value::from(10)];
    assert_eq!(check("withIn", &args), Ok(true));
    assert_eq!(
        check("within", &args[..1]),
        Err(CheckError::ArityMismatch {
            name: "within".to_owned(),
            expected: 3,
            got: 1,
        })
    );
}

#[test]
fn arity_errors_report_the_name_used() {
    assert_eq!(
        check("ary", &[]),
        Err(CheckError::ArityMismatch {
            name: "ary".to_owned(),
            expected: 1,
            got: 0,
        })
    );
    assert_eq!(
        check("max", &[Value::from(1)]),
        Err(CheckError::ArityMismatch {
            name: "max".to_owned(),
            expected: 2,
            got: 1,
        })
    );
}

#[test]
fn unknown_names_are_errors() {
    let err = check("isSomething", &[Value::Undefined]).unwrap_err();
    assert_eq!(
        err,
        CheckError::UnknownPredicate {
            name: "isSomething".to_owned()
        }
    );
    assert_eq!(err.to_string(), "unknown predicate `isSomething`");
}

#[test]
fn every_spelling_dispatches_like_its_canonical_name() {
    let samples = [
        Value::Undefined,
        Value::Null,
        Value::from(0),
        Value::from(7),
        Value::from(-1.5),
        Value::string(""),
        Value::string("abc"),
        Value::array(vec![Value::from(1), Value::from(2)]),
        Value::object_from([("length", Value::from(0))]),
    ];
    for name in PredicateName::ALL {
        for sample in &samples {
            let args = args_of(name.arity(), sample);
            let expected = check(name.canonical_name(), &args);
            assert!(expected.is_ok(), "{name} with {sample:?}");
            for alias in name.aliases() {
                assert_eq!(check(alias, &args), expected, "{alias} with {sample:?}");
            }
        }
    }
}

#[test]
fn error_messages() {
    let err = CheckError::ArityMismatch {
        name: "gt".to_owned(),
        expected: 2,
        got: 3,
    };
    assert_eq!(err.to_string(), "predicate `gt` takes 2 argument(s), got 3");
}

#[test]
fn version_and_tracing() {
    assert_eq!(typeis::VERSION.split('.').count(), 3);
    // Safe to call repeatedly, with or without RUST_LOG.
    typeis::init_tracing();
    typeis::init_tracing();
}
