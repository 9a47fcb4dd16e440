//! Shared allocation wrapper that gives reference values their identity.
//!
//! Every reference value (arrays, objects, functions, dates, ...) lives in a
//! `Heap<T>`. The constructor is `pub(super)`, so the only way to allocate one
//! is through the factory methods on `Value`. Two handles denote the same
//! host object exactly when they share an allocation, which is what
//! [`Heap::ptr_eq`] reports.
//!
//! `Heap` has no `PartialEq`; content comparison belongs to the equality
//! engine.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, immutable heap allocation.
///
/// `#[repr(transparent)]` keeps the layout identical to `Arc<T>`.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a new value.
    ///
    /// Only visible inside the value module; external code uses the
    /// `Value::` factories.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}
