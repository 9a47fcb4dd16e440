//! Runtime values.
//!
//! # Heap Enforcement
//!
//! Every reference value lives behind a [`Heap`], whose constructor is
//! private to this module. External code allocates through the factory
//! methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let list = Value::array(vec![Value::number(1.0)]);
//! let obj = Value::object(ObjectValue::new().with("a", Value::number(1.0)));
//! ```
//!
//! # Identity
//!
//! A reference value's identity is its allocation. Cloning a `Value` shares
//! the allocation, so a clone is the *same* host object; building the same
//! content twice produces two distinct objects. [`Value::strict_equals`]
//! exposes that identity comparison.
//!
//! Values are immutable once built, so a value graph is always acyclic.

mod access;
mod composite;
mod heap;

use std::fmt;

pub use composite::{
    DateValue, ErrorValue, FunctionValue, HostValue, ObjectValue, RegExpValue, SymbolValue,
};
pub use heap::Heap;

use crate::coerce;

/// A runtime value of unknown static type.
#[derive(Clone)]
pub enum Value {
    // Primitives
    Undefined,
    Null,
    Bool(bool),
    /// IEEE 754 double.
    Number(f64),
    /// Compared by content, never by allocation.
    Str(Heap<String>),
    /// Compared by identity.
    Symbol(Heap<SymbolValue>),

    // Reference values
    Array(Heap<Vec<Value>>),
    /// Arguments-like sequence; indexable but not an array.
    Arguments(Heap<Vec<Value>>),
    Object(Heap<ObjectValue>),
    Function(Heap<FunctionValue>),
    Date(Heap<DateValue>),
    RegExp(Heap<RegExpValue>),
    Error(Heap<ErrorValue>),
    /// A boolean, number or string wrapped in an object.
    ///
    /// Always holds one of `Bool`, `Number` or `Str`; the factories enforce it.
    Boxed(Heap<Value>),
    /// Any other host object.
    Host(Heap<HostValue>),
}

// Factory Methods (the only way to construct reference values)

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// A fresh symbol, distinct from every other symbol.
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Heap::new(SymbolValue::new(description.map(str::to_owned))))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    #[inline]
    pub fn arguments(items: Vec<Value>) -> Self {
        Value::Arguments(Heap::new(items))
    }

    #[inline]
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Heap::new(object))
    }

    /// Build a plain object from `(key, value)` pairs.
    pub fn object_from<K: Into<String>>(members: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::object(members.into_iter().collect())
    }

    #[inline]
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(Heap::new(func))
    }

    #[inline]
    pub fn date(date: DateValue) -> Self {
        Value::Date(Heap::new(date))
    }

    /// Date from a raw millisecond time value.
    pub fn date_millis(ms: f64) -> Self {
        Value::date(DateValue::from_millis(ms))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp(Heap::new(RegExpValue::new(source, flags)))
    }

    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Value::Error(Heap::new(ErrorValue::new(name, message)))
    }

    pub fn boxed_bool(b: bool) -> Self {
        Value::Boxed(Heap::new(Value::Bool(b)))
    }

    pub fn boxed_number(n: f64) -> Self {
        Value::Boxed(Heap::new(Value::Number(n)))
    }

    pub fn boxed_string(s: impl Into<String>) -> Self {
        Value::Boxed(Heap::new(Value::string(s)))
    }

    pub fn host(class: impl Into<String>) -> Self {
        Value::Host(Heap::new(HostValue::new(class)))
    }
}

// Accessors

impl Value {
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `null` or `undefined`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Elements of an `Array` (not of an arguments list).
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Elements of either ordered sequence kind.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) | Value::Arguments(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The primitive a boxed value wraps; `self` for anything else.
    pub fn unboxed(&self) -> &Value {
        match self {
            Value::Boxed(inner) => inner,
            other => other,
        }
    }

    /// Host strict equality (`===`).
    ///
    /// - numbers: IEEE comparison, so `NaN` is never equal and `-0 === 0`
    /// - strings: content
    /// - reference values and symbols: same allocation
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Symbol(a), Value::Symbol(b)) => Heap::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) | (Value::Arguments(a), Value::Arguments(b)) => {
                Heap::ptr_eq(a, b)
            }
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Heap::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Heap::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Heap::ptr_eq(a, b),
            (Value::Boxed(a), Value::Boxed(b)) => Heap::ptr_eq(a, b),
            (Value::Host(a), Value::Host(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::object(object)
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({})", coerce::format_number(*n)),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Arguments(items) => write!(f, "Arguments({:?})", &**items),
            Value::Object(o) => write!(f, "Object({o:?})"),
            Value::Function(func) => write!(f, "Function({})", func.name()),
            Value::Date(d) => write!(f, "Date({})", coerce::format_number(d.time_value())),
            Value::RegExp(r) => write!(f, "RegExp({r})"),
            Value::Error(e) => write!(f, "Error({e})"),
            Value::Boxed(inner) => write!(f, "Boxed({:?})", &**inner),
            Value::Host(h) => write!(f, "Host({})", h.class()),
        }
    }
}

/// Renders the host string conversion of the value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&coerce::to_display_string(self))
    }
}

#[cfg(test)]
mod tests;
