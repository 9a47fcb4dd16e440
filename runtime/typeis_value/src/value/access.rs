//! Own-property reads.
//!
//! Mirrors what `value[key]` yields for the own properties the predicates
//! care about. Anything not modelled reads as `Undefined`; reading from
//! `null` or `undefined` also yields `Undefined` rather than failing.

use super::Value;

/// Parse a canonical array index (`"0"`, `"17"`, but not `"01"` or `"-1"`).
fn array_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Length of a string in UTF-16 code units, as the host counts it.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// The UTF-16 code unit at `index`, as a one-unit string.
fn utf16_unit_at(s: &str, index: usize) -> Option<Value> {
    let unit = s.encode_utf16().nth(index)?;
    Some(Value::string(String::from_utf16_lossy(&[unit])))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "host lengths are bounded well below 2^53"
)]
fn length_value(len: usize) -> Value {
    Value::Number(len as f64)
}

fn string_property(s: &str, key: &str) -> Value {
    if key == "length" {
        return length_value(utf16_len(s));
    }
    array_index(key)
        .and_then(|i| utf16_unit_at(s, i))
        .unwrap_or(Value::Undefined)
}

impl Value {
    /// Read an own property, `Undefined` when absent.
    pub fn property(&self, key: &str) -> Value {
        match self {
            Value::Object(o) => o.get(key).cloned().unwrap_or(Value::Undefined),
            Value::Array(items) | Value::Arguments(items) => {
                if key == "length" {
                    return length_value(items.len());
                }
                array_index(key)
                    .and_then(|i| items.get(i).cloned())
                    .unwrap_or(Value::Undefined)
            }
            Value::Str(s) => string_property(s, key),
            Value::Boxed(inner) => match &**inner {
                Value::Str(s) => string_property(s, key),
                _ => Value::Undefined,
            },
            Value::Function(func) => match key {
                "length" => length_value(func.arity()),
                "name" => Value::string(func.name()),
                _ => Value::Undefined,
            },
            Value::Error(err) => match key {
                "name" => Value::string(err.name()),
                "message" => Value::string(err.message()),
                _ => Value::Undefined,
            },
            Value::RegExp(re) => match key {
                "source" => Value::string(re.source()),
                "flags" => Value::string(re.flags()),
                _ => Value::Undefined,
            },
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::Symbol(_)
            | Value::Date(_)
            | Value::Host(_) => Value::Undefined,
        }
    }

    /// Whether `key` is an own property of the value.
    ///
    /// Unlike [`Value::property`], a member explicitly holding `Undefined`
    /// still counts as present.
    pub fn has_own_property(&self, key: &str) -> bool {
        match self {
            Value::Object(o) => o.contains_key(key),
            Value::Array(items) | Value::Arguments(items) => {
                key == "length" || array_index(key).is_some_and(|i| i < items.len())
            }
            Value::Str(s) => key == "length" || array_index(key).is_some_and(|i| i < utf16_len(s)),
            Value::Boxed(inner) => match &**inner {
                Value::Str(s) => {
                    key == "length" || array_index(key).is_some_and(|i| i < utf16_len(s))
                }
                _ => false,
            },
            Value::Function(_) => matches!(key, "length" | "name"),
            Value::Error(_) => key == "message",
            Value::RegExp(_) => false,
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::Symbol(_)
            | Value::Date(_)
            | Value::Host(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FunctionValue, ObjectValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_array_index_rejects_non_canonical() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("12"), Some(12));
        assert_eq!(array_index("01"), None);
        assert_eq!(array_index("-1"), None);
        assert_eq!(array_index(""), None);
        assert_eq!(array_index("1.5"), None);
    }

    #[test]
    fn test_sequence_properties() {
        let arr = Value::array(vec![Value::from(10), Value::from(20)]);
        assert_eq!(arr.property("length").as_number(), Some(2.0));
        assert_eq!(arr.property("1").as_number(), Some(20.0));
        assert!(arr.property("2").is_undefined());
        assert!(arr.has_own_property("length"));
        assert!(!arr.has_own_property("2"));
    }

    #[test]
    fn test_string_properties_count_utf16_units() {
        let s = Value::string("a\u{1F600}");
        assert_eq!(s.property("length").as_number(), Some(3.0));
        assert_eq!(s.property("0").as_str(), Some("a"));
        let boxed = Value::boxed_string("xyz");
        assert_eq!(boxed.property("length").as_number(), Some(3.0));
        assert!(boxed.has_own_property("length"));
    }

    #[test]
    fn test_object_member_holding_undefined_is_own() {
        let obj = Value::object(ObjectValue::new().with("a", Value::Undefined));
        assert!(obj.property("a").is_undefined());
        assert!(obj.has_own_property("a"));
        assert!(!obj.has_own_property("b"));
    }

    #[test]
    fn test_function_and_error_properties() {
        let f = Value::function(FunctionValue::new(
            "add",
            2,
            "function add(a, b) { return a + b; }",
        ));
        assert_eq!(f.property("length").as_number(), Some(2.0));
        assert_eq!(f.property("name").as_str(), Some("add"));

        let e = Value::error("TypeError", "bad");
        assert_eq!(e.property("message").as_str(), Some("bad"));
        assert_eq!(e.property("name").as_str(), Some("TypeError"));
    }

    #[test]
    fn test_nullish_reads_are_undefined() {
        assert!(Value::Null.property("length").is_undefined());
        assert!(Value::Undefined.property("x").is_undefined());
        assert!(!Value::Null.has_own_property("length"));
    }
}
