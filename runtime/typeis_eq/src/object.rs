//! The object rule: member-by-member comparison of two plain objects.
//!
//! Under the default policy the rule is one-directional. It walks the
//! members of `other` and compares each against the same member of `value`,
//! then only checks that every member of `value` is *present* (not
//! `undefined`) on `other`. Two consequences callers rely on:
//!
//! - `equal({a: 1, b: undefined}, {a: 1})` is false, but swapping the
//!   operands gives true.
//! - A nested object recurses as `equal(other[k], value[k])`, so the walk
//!   direction flips at every level.
//!
//! An array-valued member only requires `value[k]` to be an array too. The
//! check that follows reads the *containing* objects: their `length` members
//! must be `===`, and for `i` from `other.length - 1` down to 1 the members
//! `value[i]` and `other[i]` must be `===`. The nested arrays' elements are
//! never read, and an object without a positive integral `length` skips the
//! index loop entirely. Function-valued members compare by source text, with
//! a member named `equals` always accepted.

use tracing::trace;
use typeis_value::{coerce, FunctionValue, ObjectValue, PrimitiveKind, Value};

use crate::engine::Equality;

/// Member name whose function values always match.
const EQUALS_MEMBER: &str = "equals";

/// Reads of absent members.
static UNDEFINED: Value = Value::Undefined;

/// Largest integer `f64` holds exactly (2^53).
const MAX_SAFE: f64 = 9_007_199_254_740_992.0;

fn member<'a>(object: &'a ObjectValue, key: &str) -> &'a Value {
    object.get(key).unwrap_or(&UNDEFINED)
}

impl Equality {
    pub(crate) fn objects_equal(&self, value: &ObjectValue, other: &ObjectValue) -> bool {
        if self.policy().walks_both_ways() {
            self.walk(value, other) && self.walk(other, value)
        } else {
            self.walk(value, other)
        }
    }

    /// One pass of the rule, driven by `other`'s members.
    fn walk(&self, value: &ObjectValue, other: &ObjectValue) -> bool {
        for (key, theirs) in other.iter() {
            let ours = member(value, key);
            let matched = match theirs {
                Value::Array(_) => self.array_member_matches(value, other, theirs, ours),
                Value::Function(func) => function_member_matches(key, func, ours),
                _ if theirs.primitive_kind() == PrimitiveKind::Object => self.equal(theirs, ours),
                _ => theirs.strict_equals(ours),
            };
            if !matched {
                trace!(member = key, "member mismatch");
                return false;
            }
        }

        for key in value.keys() {
            if member(other, key).is_undefined() {
                trace!(member = key, "member missing on other operand");
                return false;
            }
        }

        true
    }

    fn array_member_matches(
        &self,
        value: &ObjectValue,
        other: &ObjectValue,
        theirs: &Value,
        ours: &Value,
    ) -> bool {
        if self.policy().compares_nested_arrays_fully() {
            return self.equal(theirs, ours);
        }

        if !matches!(ours, Value::Array(_)) {
            return false;
        }
        let length = member(other, "length");
        if !member(value, "length").strict_equals(length) {
            return false;
        }
        outer_indices(length).all(|i| {
            let key = i.to_string();
            member(value, &key).strict_equals(member(other, &key))
        })
    }
}

/// Indices `length - 1` down to 1 of the containing object.
///
/// Empty unless `length` coerces to a positive integer.
fn outer_indices(length: &Value) -> impl Iterator<Item = u64> {
    let bound = coerce::to_number(length);
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "bound is a positive integer below 2^53"
    )]
    let last = if bound.is_finite() && bound >= 1.0 && bound.fract() == 0.0 && bound < MAX_SAFE {
        bound as u64 - 1
    } else {
        0
    };
    (1..=last).rev()
}

fn function_member_matches(key: &str, theirs: &FunctionValue, ours: &Value) -> bool {
    if ours.is_undefined() {
        return false;
    }
    key == EQUALS_MEMBER || theirs.source() == coerce::to_display_string(ours)
}
