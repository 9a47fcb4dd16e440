//! Equality policy: which known quirks of the object rule are kept.
//!
//! The default policy reproduces the established behaviour exactly,
//! including its two known defects, because existing callers depend on it.
//! Each defect can be switched off on its own.
//!
//! ```text
//! let strict = Equality::new(EqPolicy::corrected());
//! let mixed = Equality::new(EqPolicy::default().with_object_walk(ObjectWalk::Symmetric));
//! ```

/// How the object rule walks members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObjectWalk {
    /// Walk the second operand's members by value, then only check that the
    /// first operand's members are present on the second. Not symmetric.
    #[default]
    OneWay,
    /// Run the one-way walk in both directions; both must pass.
    Symmetric,
}

/// How array-valued members inside the object rule are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NestedArrays {
    /// Only require the member to be an array on both sides, then compare the
    /// *containing* objects: their `length` members, and their index members
    /// from `length - 1` down to 1 by strict identity. The nested elements are
    /// never read.
    #[default]
    OuterIndices,
    /// Full recursive equality: lengths, then every index.
    Full,
}

/// Configuration of an equality engine.
///
/// Plain data with policy queries, in the manner of an evaluation mode:
/// the engine asks the policy instead of matching on fields everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EqPolicy {
    pub object_walk: ObjectWalk,
    pub nested_arrays: NestedArrays,
}

impl EqPolicy {
    /// The established behaviour, quirks included. Same as `default()`.
    pub const LEGACY: EqPolicy = EqPolicy {
        object_walk: ObjectWalk::OneWay,
        nested_arrays: NestedArrays::OuterIndices,
    };

    /// Both quirks fixed: symmetric object walk, full nested arrays.
    #[must_use]
    pub const fn corrected() -> Self {
        EqPolicy {
            object_walk: ObjectWalk::Symmetric,
            nested_arrays: NestedArrays::Full,
        }
    }

    #[must_use]
    pub const fn with_object_walk(self, object_walk: ObjectWalk) -> Self {
        EqPolicy {
            object_walk,
            ..self
        }
    }

    #[must_use]
    pub const fn with_nested_arrays(self, nested_arrays: NestedArrays) -> Self {
        EqPolicy {
            nested_arrays,
            ..self
        }
    }

    /// Whether the object rule runs in both directions.
    #[inline]
    pub const fn walks_both_ways(&self) -> bool {
        matches!(self.object_walk, ObjectWalk::Symmetric)
    }

    /// Whether array-valued members get full recursive comparison.
    #[inline]
    pub const fn compares_nested_arrays_fully(&self) -> bool {
        matches!(self.nested_arrays, NestedArrays::Full)
    }

    /// Whether this policy reproduces the established behaviour bit for bit.
    #[inline]
    pub const fn is_legacy(&self) -> bool {
        !self.walks_both_ways() && !self.compares_nested_arrays_fully()
    }
}
