//! Top-level dispatch of the equality engine.

use tracing::trace;
use typeis_value::{Heap, TypeTag, Value};

use crate::policy::EqPolicy;
use crate::stack::ensure_sufficient_stack;

/// Deep equality engine configured by an [`EqPolicy`].
///
/// Stateless apart from its policy; one engine may be reused for any number
/// of comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Equality {
    policy: EqPolicy,
}

impl Equality {
    pub const fn new(policy: EqPolicy) -> Self {
        Equality { policy }
    }

    pub const fn policy(&self) -> EqPolicy {
        self.policy
    }

    /// Decide whether `a` and `b` are structurally equivalent.
    ///
    /// 1. Different `typeof` kinds are never equal.
    /// 2. Different type tags are never equal.
    /// 3. Same tag: plain objects go through the object rule, arrays compare
    ///    length then elements from the last index down, functions compare by
    ///    identity, dates by instant, everything else by `===`.
    ///
    /// Not symmetric under the default policy; see [`crate::ObjectWalk`].
    pub fn equal(&self, a: &Value, b: &Value) -> bool {
        ensure_sufficient_stack(|| self.dispatch(a, b))
    }

    fn dispatch(&self, a: &Value, b: &Value) -> bool {
        let kind = a.primitive_kind();
        if kind != b.primitive_kind() {
            trace!(left = %kind, right = %b.primitive_kind(), "kind mismatch");
            return false;
        }

        let tag = a.type_tag();
        if tag != b.type_tag() {
            trace!(left = %tag, right = %b.type_tag(), "type tag mismatch");
            return false;
        }

        // Tags are equal here, so each category's variants line up; boxed
        // primitives pair with boxed primitives and fall through to `===`.
        match (a, b) {
            (Value::Object(value), Value::Object(other)) => self.objects_equal(value, other),
            (Value::Array(x), Value::Array(y)) => self.arrays_equal(x, y),
            (Value::Function(x), Value::Function(y)) => Heap::ptr_eq(x, y),
            (Value::Date(x), Value::Date(y)) => x.time_value() == y.time_value(),
            _ => {
                debug_assert!(!matches!(
                    tag,
                    TypeTag::PlainObject | TypeTag::Array | TypeTag::Function | TypeTag::Date
                ));
                a.strict_equals(b)
            }
        }
    }

    fn arrays_equal(&self, a: &[Value], b: &[Value]) -> bool {
        if a.len() != b.len() {
            trace!(left = a.len(), right = b.len(), "array length mismatch");
            return false;
        }
        a.iter().zip(b).rev().all(|(x, y)| self.equal(x, y))
    }
}

/// Deep equality under the default policy.
///
/// Equivalent to `Equality::default().equal(a, b)`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn equal(a: &Value, b: &Value) -> bool {
    Equality::default().equal(a, b)
}
