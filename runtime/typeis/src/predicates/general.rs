//! Predicates that are not tied to a single category.

use typeis_value::{coerce, Heap, PrimitiveKind, TypeTag, Value};

pub use typeis_eq::equal;

/// Whether `typeof value` spells `name`.
pub fn is_type(value: &Value, name: &str) -> bool {
    PrimitiveKind::from_name(name) == Some(value.primitive_kind())
}

pub fn defined(value: &Value) -> bool {
    !value.is_undefined()
}

pub fn null_or_undef(value: &Value) -> bool {
    value.is_nullish()
}

/// Empty sequence, member-less mapping, or the empty primitive string.
///
/// A boxed empty string is not empty: only the primitive `""` is.
pub fn empty(value: &Value) -> bool {
    match value.type_tag() {
        tag if tag.is_sequence() => value.as_sequence().is_some_and(<[_]>::is_empty),
        TypeTag::PlainObject => value.as_object().is_some_and(|o| o.is_empty()),
        TypeTag::String => value.as_str() == Some(""),
        _ => false,
    }
}

/// Whether `host[key]` holds a host-provided member.
///
/// Object-kind members count unless `null`; functions and symbols always
/// count; booleans, numbers, strings and absent members never do.
pub fn hosted(key: &Value, host: &Value) -> bool {
    if key.is_nullish() || host.is_nullish() {
        return false;
    }
    let member = host.property(&coerce::to_display_string(key));
    match member.primitive_kind() {
        PrimitiveKind::Object => !member.is_null(),
        PrimitiveKind::Function | PrimitiveKind::Symbol => true,
        PrimitiveKind::Boolean
        | PrimitiveKind::Number
        | PrimitiveKind::String
        | PrimitiveKind::Undefined => false,
    }
}

/// Whether `value` is a mapping built by `constructor`.
///
/// Only mappings that recorded their constructor can be instances; anything
/// else, including `null` and `undefined` on either side, is not.
pub fn instance_of(value: &Value, constructor: &Value) -> bool {
    match (value, constructor) {
        (Value::Object(object), Value::Function(ctor)) => object
            .constructor()
            .is_some_and(|recorded| Heap::ptr_eq(recorded, ctor)),
        _ => false,
    }
}
