//! typeis value model - runtime values and their canonical classification.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `ObjectValue`, `FunctionValue`, ...)
//! - The closed category enum `TypeTag` and the `typeof` kind `PrimitiveKind`
//! - `classify` / `primitive_kind`, the total classification functions
//! - Host coercions used by the numeric and relational predicates
//!
//! # Value Types
//!
//! Reference values are heap-allocated through `Value::` factory methods
//! only; a `Heap<T>` handle carries the value's identity. Everything is
//! immutable after construction and `Send + Sync`.

pub mod coerce;
mod classify;
mod type_tag;
mod value;

pub use classify::{classify, primitive_kind};
pub use type_tag::{PrimitiveKind, TypeTag};
pub use value::{
    DateValue, ErrorValue, FunctionValue, Heap, HostValue, ObjectValue, RegExpValue, SymbolValue,
    Value,
};
