//! Number-category predicates.
//!
//! All of them first require the `Number` tag and then work on the host
//! numeric value, so boxed numbers qualify. Remainders use IEEE `fmod`
//! semantics (`f64 %`), which makes NaN and the infinities "decimal".

use std::cmp::Ordering;

use typeis_value::{coerce, TypeTag, Value};

use super::category::array_like;

/// The numeric value of a `Number`-tagged value.
fn numeric(value: &Value) -> Option<f64> {
    (value.type_tag() == TypeTag::Number).then(|| coerce::to_number(value))
}

pub fn positive_number(value: &Value) -> bool {
    numeric(value).is_some_and(|n| n > 0.0)
}

pub fn negative_number(value: &Value) -> bool {
    numeric(value).is_some_and(|n| n < 0.0)
}

/// Has a fractional part. NaN and the infinities count.
pub fn decimal(value: &Value) -> bool {
    numeric(value).is_some_and(|n| n % 1.0 != 0.0)
}

/// `value % n === 0`, except that zero itself and a zero divisor never are.
///
/// Only the primitive `0` is rejected up front; `n` just has to not be the
/// number zero and is coerced for the remainder.
pub fn divisible_by(value: &Value, n: &Value) -> bool {
    let zero = Value::Number(0.0);
    if value.strict_equals(&zero) || n.strict_equals(&zero) {
        return false;
    }
    numeric(value).is_some_and(|v| v % coerce::to_number(n) == 0.0)
}

pub fn int(value: &Value) -> bool {
    numeric(value).is_some_and(|n| n % 1.0 == 0.0)
}

pub fn positive_int(value: &Value) -> bool {
    numeric(value).is_some_and(|n| n % 1.0 == 0.0 && n > 0.0)
}

pub fn negative_int(value: &Value) -> bool {
    numeric(value).is_some_and(|n| n % 1.0 == 0.0 && n < 0.0)
}

/// Walk `others[len - 1]` down to `others[0]`, stopping at the first element
/// for which `reject(value <=> element)` holds.
fn bounds_all(value: &Value, others: &Value, reject: Ordering) -> bool {
    if !array_like(others) || value.type_tag() != TypeTag::Number {
        return false;
    }

    let mut index = coerce::to_number(&others.property("length")) - 1.0;
    while index > -1.0 {
        let element = others.property(&coerce::format_number(index));
        if coerce::loose_compare(value, &element) == Some(reject) {
            return false;
        }
        let next = index - 1.0;
        if next == index {
            // Past 2^53 the countdown stalls.
            break;
        }
        index = next;
    }
    true
}

/// No element of the array-like `others` is greater than `value`.
pub fn maximum(value: &Value, others: &Value) -> bool {
    bounds_all(value, others, Ordering::Less)
}

/// No element of the array-like `others` is less than `value`.
pub fn minimum(value: &Value, others: &Value) -> bool {
    bounds_all(value, others, Ordering::Greater)
}

/// Numeric coercion yields NaN. Unlike the rest of this module, any
/// category qualifies: `nan("abc")` is true.
pub fn nan(value: &Value) -> bool {
    coerce::to_number(value).is_nan()
}

pub fn even(value: &Value) -> bool {
    numeric(value).is_some_and(|n| n % 2.0 == 0.0)
}

pub fn odd(value: &Value) -> bool {
    !decimal(value) && numeric(value).is_some_and(|n| n % 2.0 != 0.0)
}
