//! The predicate battery.
//!
//! Every predicate is total: it takes borrowed values, never fails, and
//! answers `false` where the host would throw (reading a member of `null`,
//! `instanceof` against a non-callable).
//!
//! Category tests go through [`classify`](typeis_value::classify), so a boxed
//! number is a `number` here even though its `typeof` is `"object"`. Only
//! [`is_type`] looks at the `typeof` kind.

mod category;
mod general;
mod numeric;
mod relational;


pub use category::{
    arguments, array, array_empty, array_like, boolean, date, error, function, is_false, is_true,
    non_empty_array, non_empty_object, non_empty_string, null, number, object, object_instance_of,
    regexp, string, undefined,
};
pub use general::{defined, empty, equal, hosted, instance_of, is_type, null_or_undef};
pub use numeric::{
    decimal, divisible_by, even, int, maximum, minimum, nan, negative_int, negative_number, odd,
    positive_int, positive_number,
};
pub use relational::{ge, gt, le, lt, within};
