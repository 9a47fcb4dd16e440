//! Category tests and their size-aware variants.

use typeis_value::{coerce, TypeTag, Value};

use super::general::instance_of;

#[inline]
fn tagged(value: &Value, tag: TypeTag) -> bool {
    value.type_tag() == tag
}

/// The numeric `length` of a value, or NaN when it has none.
fn length_of(value: &Value) -> f64 {
    coerce::to_number(&value.property("length"))
}

pub fn null(value: &Value) -> bool {
    value.is_null()
}

pub fn undefined(value: &Value) -> bool {
    value.is_undefined()
}

pub fn arguments(value: &Value) -> bool {
    tagged(value, TypeTag::ArgumentsList)
}

pub fn array(value: &Value) -> bool {
    tagged(value, TypeTag::Array)
}

pub fn non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// `value.length === 0`, for anything with a length.
pub fn array_empty(value: &Value) -> bool {
    value.property("length").strict_equals(&Value::Number(0.0))
}

/// Has an own, finite `length`, whatever its category.
///
/// Strings, sequences, functions and mappings with a numeric `length`
/// member all qualify.
pub fn array_like(value: &Value) -> bool {
    !value.is_nullish() && value.has_own_property("length") && length_of(value).is_finite()
}

pub fn boolean(value: &Value) -> bool {
    tagged(value, TypeTag::Boolean)
}

pub fn is_false(value: &Value) -> bool {
    value.as_bool() == Some(false)
}

pub fn is_true(value: &Value) -> bool {
    value.as_bool() == Some(true)
}

pub fn date(value: &Value) -> bool {
    tagged(value, TypeTag::Date)
}

pub fn error(value: &Value) -> bool {
    tagged(value, TypeTag::Error)
}

pub fn function(value: &Value) -> bool {
    tagged(value, TypeTag::Function)
}

pub fn number(value: &Value) -> bool {
    tagged(value, TypeTag::Number)
}

pub fn object(value: &Value) -> bool {
    tagged(value, TypeTag::PlainObject)
}

pub fn non_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|o| !o.is_empty())
}

pub fn object_instance_of(value: &Value, constructor: &Value) -> bool {
    object(value) && instance_of(value, constructor)
}

pub fn regexp(value: &Value) -> bool {
    tagged(value, TypeTag::RegularExpression)
}

pub fn string(value: &Value) -> bool {
    tagged(value, TypeTag::String)
}

/// Primitive or boxed string with at least one code unit.
pub fn non_empty_string(value: &Value) -> bool {
    string(value) && length_of(value) > 0.0
}
