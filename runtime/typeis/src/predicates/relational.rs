//! Relational predicates with host comparison semantics.
//!
//! Two strings compare by code units; any other pair compares numerically
//! after coercion. An unordered pair (NaN on either side) fails every
//! relation, so `ge` is not the negation of `lt`.

use std::cmp::Ordering;

use typeis_value::{coerce::loose_compare, Value};

pub fn ge(value: &Value, other: &Value) -> bool {
    matches!(
        loose_compare(value, other),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

pub fn gt(value: &Value, other: &Value) -> bool {
    loose_compare(value, other) == Some(Ordering::Greater)
}

pub fn le(value: &Value, other: &Value) -> bool {
    matches!(
        loose_compare(value, other),
        Some(Ordering::Less | Ordering::Equal)
    )
}

pub fn lt(value: &Value, other: &Value) -> bool {
    loose_compare(value, other) == Some(Ordering::Less)
}

/// `start <= value <= finish`.
pub fn within(value: &Value, start: &Value, finish: &Value) -> bool {
    ge(value, start) && le(value, finish)
}
