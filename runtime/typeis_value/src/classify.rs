//! Type-tag extraction.
//!
//! Classification reads the value's variant only. It never inspects
//! members, so shape-imitating objects (a mapping with a `length`, a
//! mapping with a `getTime` member) keep their own category.

use crate::type_tag::{PrimitiveKind, TypeTag};
use crate::value::Value;

impl Value {
    /// Canonical category of this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::Str(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Arguments(_) => TypeTag::ArgumentsList,
            Value::Object(_) => TypeTag::PlainObject,
            Value::Function(_) => TypeTag::Function,
            Value::Date(_) => TypeTag::Date,
            Value::RegExp(_) => TypeTag::RegularExpression,
            Value::Error(_) => TypeTag::Error,
            // A boxed primitive reports the category of what it wraps.
            Value::Boxed(inner) => inner.type_tag(),
            Value::Symbol(_) | Value::Host(_) => TypeTag::Other,
        }
    }

    /// Host `typeof` kind of this value.
    pub fn primitive_kind(&self) -> PrimitiveKind {
        match self {
            Value::Undefined => PrimitiveKind::Undefined,
            Value::Bool(_) => PrimitiveKind::Boolean,
            Value::Number(_) => PrimitiveKind::Number,
            Value::Str(_) => PrimitiveKind::String,
            Value::Symbol(_) => PrimitiveKind::Symbol,
            Value::Function(_) => PrimitiveKind::Function,
            Value::Null
            | Value::Array(_)
            | Value::Arguments(_)
            | Value::Object(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Error(_)
            | Value::Boxed(_)
            | Value::Host(_) => PrimitiveKind::Object,
        }
    }
}

/// Classify a value. Total and pure.
#[inline]
pub fn classify(value: &Value) -> TypeTag {
    value.type_tag()
}

/// The `typeof` kind of a value.
#[inline]
pub fn primitive_kind(value: &Value) -> PrimitiveKind {
    value.primitive_kind()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FunctionValue, ObjectValue};
    use pretty_assertions::assert_eq;

    fn representatives() -> Vec<(Value, TypeTag)> {
        vec![
            (Value::Null, TypeTag::Null),
            (Value::Undefined, TypeTag::Undefined),
            (Value::Bool(true), TypeTag::Boolean),
            (Value::Number(1.5), TypeTag::Number),
            (Value::string("s"), TypeTag::String),
            (Value::array(vec![]), TypeTag::Array),
            (Value::arguments(vec![]), TypeTag::ArgumentsList),
            (Value::object(ObjectValue::new()), TypeTag::PlainObject),
            (
                Value::function(FunctionValue::native("f", 0)),
                TypeTag::Function,
            ),
            (Value::date_millis(0.0), TypeTag::Date),
            (Value::regexp("x", ""), TypeTag::RegularExpression),
            (Value::error("Error", "boom"), TypeTag::Error),
            (Value::symbol(Some("s")), TypeTag::Other),
            (Value::host("Map"), TypeTag::Other),
        ]
    }

    #[test]
    fn test_every_representative_classifies() {
        for (value, tag) in representatives() {
            assert_eq!(classify(&value), tag, "{value:?}");
        }
    }

    #[test]
    fn test_every_tag_has_a_distinct_builtin_tag() {
        let covered: Vec<TypeTag> = representatives().into_iter().map(|(_, tag)| tag).collect();
        for (i, tag) in TypeTag::ALL.iter().enumerate() {
            assert!(covered.contains(tag), "no representative for {tag}");
            for later in &TypeTag::ALL[i + 1..] {
                assert_ne!(tag.builtin_tag(), later.builtin_tag());
            }
        }
    }

    #[test]
    fn test_sequence_tags() {
        let sequences: Vec<TypeTag> = TypeTag::ALL.into_iter().filter(|t| t.is_sequence()).collect();
        assert_eq!(sequences, vec![TypeTag::Array, TypeTag::ArgumentsList]);
    }

    #[test]
    fn test_array_imitation_is_plain_object() {
        let fake = Value::object(
            ObjectValue::new()
                .with("length", Value::Number(2.0))
                .with("0", Value::from("a")),
        );
        assert_eq!(classify(&fake), TypeTag::PlainObject);
    }

    #[test]
    fn test_boxed_primitives_share_tag_not_kind() {
        let boxed = Value::boxed_number(5.0);
        assert_eq!(classify(&boxed), TypeTag::Number);
        assert_eq!(primitive_kind(&boxed), PrimitiveKind::Object);
        assert_eq!(primitive_kind(&Value::Number(5.0)), PrimitiveKind::Number);
        assert_eq!(classify(&Value::boxed_string("")), TypeTag::String);
        assert_eq!(classify(&Value::boxed_bool(false)), TypeTag::Boolean);
    }

    #[test]
    fn test_null_is_object_kind() {
        assert_eq!(primitive_kind(&Value::Null), PrimitiveKind::Object);
        assert_eq!(
            primitive_kind(&Value::function(FunctionValue::native("f", 0))),
            PrimitiveKind::Function
        );
    }

    #[test]
    fn test_builtin_tags() {
        assert_eq!(TypeTag::Array.builtin_tag(), "[object Array]");
        assert_eq!(TypeTag::ArgumentsList.builtin_tag(), "[object Arguments]");
        assert_eq!(TypeTag::RegularExpression.to_string(), "RegExp");
        for kind in ["undefined", "object", "boolean", "number", "string", "function", "symbol"] {
            assert_eq!(PrimitiveKind::from_name(kind).map(PrimitiveKind::as_str), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_name("bigint"), None);
    }
}
