//! typeis equality - deep structural equality over runtime values.
//!
//! This crate provides:
//! - `equal`, deep equality under the default policy
//! - `Equality`, an engine bound to an explicit `EqPolicy`
//! - `EqPolicy` with its two knobs, `ObjectWalk` and `NestedArrays`
//!
//! # Algorithm
//!
//! Each comparison first rejects operands whose `typeof` kinds differ, then
//! operands whose type tags differ, and only then dispatches on the shared
//! tag. Plain objects use the object rule (see the `object` module docs for
//! its asymmetries), arrays compare element-wise, functions by
//! identity, dates by instant, and everything else by `===`.
//!
//! # Recursion
//!
//! Each recursive step grows the native stack on demand, so deeply nested
//! values compare without overflow. Values are immutable, so a value graph
//! cannot contain a cycle and every comparison terminates.
//!
//! Comparison is the only deep walk covered. Dropping a [`Value`] still
//! recurses once per nesting level, on the dropping thread's stack, so a
//! chain nested tens of thousands of levels deep can overflow when its last
//! handle goes away. Callers building values that deep should keep them alive
//! or drop them on a thread with a large stack.
//!
//! [`Value`]: typeis_value::Value

mod engine;
mod object;
mod policy;
mod stack;


pub use engine::{equal, Equality};
pub use policy::{EqPolicy, NestedArrays, ObjectWalk};
