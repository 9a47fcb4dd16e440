use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::array(vec![Value::from(1), Value::from(2)]);
    assert_eq!(list.as_array().map(<[Value]>::len), Some(2));
    assert_eq!(list.as_sequence().map(<[Value]>::len), Some(2));

    let args = Value::arguments(vec![Value::Null]);
    assert!(args.as_array().is_none());
    assert_eq!(args.as_sequence().map(<[Value]>::len), Some(1));

    let obj = Value::object_from([("a", Value::from(1)), ("b", Value::from(2))]);
    let keys: Vec<_> = obj.as_object().map(|o| o.keys().collect()).unwrap_or_default();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_object_reinsert_keeps_position() {
    let mut o = ObjectValue::new();
    o.insert("x", Value::from(1));
    o.insert("y", Value::from(2));
    o.insert("x", Value::from(3));
    assert_eq!(o.len(), 2);
    assert_eq!(o.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(o.get("x").and_then(Value::as_number), Some(3.0));
    assert!(o.get("z").is_none());
}

#[test]
fn test_strict_equals_primitives() {
    assert!(Value::Undefined.strict_equals(&Value::Undefined));
    assert!(Value::Null.strict_equals(&Value::Null));
    assert!(!Value::Null.strict_equals(&Value::Undefined));
    assert!(Value::from(1).strict_equals(&Value::Number(1.0)));
    assert!(Value::Number(0.0).strict_equals(&Value::Number(-0.0)));
    assert!(!Value::Number(f64::NAN).strict_equals(&Value::Number(f64::NAN)));
    assert!(Value::string("a").strict_equals(&Value::string("a")));
    assert!(!Value::from(1).strict_equals(&Value::from("1")));
}

#[test]
fn test_strict_equals_reference_identity() {
    let a = Value::array(vec![Value::from(1)]);
    let same = a.clone();
    let twin = Value::array(vec![Value::from(1)]);
    assert!(a.strict_equals(&same));
    assert!(!a.strict_equals(&twin));

    let boxed = Value::boxed_number(1.0);
    assert!(boxed.strict_equals(&boxed.clone()));
    assert!(!boxed.strict_equals(&Value::boxed_number(1.0)));
    assert!(!boxed.strict_equals(&Value::Number(1.0)));

    let sym = Value::symbol(Some("k"));
    assert!(!sym.strict_equals(&Value::symbol(Some("k"))));
    assert!(sym.strict_equals(&sym.clone()));
}

#[test]
fn test_arguments_and_array_never_strictly_equal() {
    let a = Value::array(vec![]);
    let b = Value::arguments(vec![]);
    assert!(!a.strict_equals(&b));
}

#[test]
fn test_unboxed() {
    let boxed = Value::boxed_string("x");
    assert_eq!(boxed.unboxed().as_str(), Some("x"));
    assert_eq!(Value::from(2).unboxed().as_number(), Some(2.0));
}

#[test]
fn test_date_values() {
    let d = DateValue::from_ymd(2020, 1, 1);
    assert_eq!(d.time_value(), 1_577_836_800_000.0);
    assert!(!DateValue::from_ymd(2020, 2, 30).is_valid());
    assert!(!DateValue::from_millis(f64::INFINITY).is_valid());
    assert!(!DateValue::from_millis(9e15).is_valid());
    assert_eq!(DateValue::from_millis(1.9).time_value(), 1.0);
    assert_eq!(DateValue::from_millis(-0.5).time_value().to_bits(), 0.0_f64.to_bits());
}

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::from(42)), "42");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::string("hello")), "hello");
    assert_eq!(format!("{}", Value::host("Map")), "[object Map]");
    assert_eq!(format!("{}", Value::symbol(None)), "Symbol()");
}

#[test]
fn test_value_debug() {
    let v = Value::array(vec![Value::from(1), Value::string("a")]);
    assert_eq!(format!("{v:?}"), "Array([Number(1), Str(\"a\")])");
    let o = Value::object_from([("k", Value::Null)]);
    assert_eq!(format!("{o:?}"), "Object({\"k\": Null})");
}

#[test]
fn test_native_function_source() {
    let f = FunctionValue::native("push", 1);
    assert_eq!(f.source(), "function push() { [native code] }");
    assert_eq!(f.arity(), 1);
}

#[test]
fn test_constructor_recorded() {
    let ctor = Value::function(FunctionValue::new("Point", 2, "function Point(x, y) {}"));
    let Value::Function(handle) = &ctor else {
        panic!("expected function");
    };
    let obj = ObjectValue::new().constructed_by(handle.clone());
    assert!(obj
        .constructor()
        .is_some_and(|c| Heap::ptr_eq(c, handle)));
}
