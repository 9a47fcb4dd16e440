//! Payloads of the reference value variants.
//!
//! Each of these lives behind a `Heap` inside a `Value`. They are built
//! mutably by the caller and frozen once handed to a `Value::` factory.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::FxHashMap;

use super::heap::Heap;
use super::Value;

/// Key-value mapping with insertion-ordered members.
///
/// Re-inserting an existing key replaces its value in place, so iteration
/// order is the order keys were first seen.
#[derive(Clone, Default)]
pub struct ObjectValue {
    members: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
    constructor: Option<Heap<FunctionValue>>,
}

impl ObjectValue {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a member.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            self.members[slot].1 = value;
        } else {
            self.index.insert(key.clone(), self.members.len());
            self.members.push((key, value));
        }
    }

    /// Builder form of [`ObjectValue::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Record the function that constructed this mapping.
    #[must_use]
    pub fn constructed_by(mut self, constructor: Heap<FunctionValue>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Member lookup. `None` means the key is absent, which is distinct
    /// from a member explicitly holding `Undefined`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&slot| &self.members[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Member names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(k, _)| k.as_str())
    }

    /// The constructing function, if one was recorded.
    pub fn constructor(&self) -> Option<&Heap<FunctionValue>> {
        self.constructor.as_ref()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = ObjectValue::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Callable value.
///
/// Only the parts equality and the predicates can observe are kept: the
/// name, the declared parameter count (its `length`), and the source text
/// the host would print for it.
#[derive(Clone, Debug)]
pub struct FunctionValue {
    name: String,
    arity: usize,
    source: String,
}

impl FunctionValue {
    pub fn new(name: impl Into<String>, arity: usize, source: impl Into<String>) -> Self {
        FunctionValue {
            name: name.into(),
            arity,
            source: source.into(),
        }
    }

    /// A builtin whose source the host hides.
    pub fn native(name: impl Into<String>, arity: usize) -> Self {
        let name = name.into();
        let source = format!("function {name}() {{ [native code] }}");
        FunctionValue {
            name,
            arity,
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Serialized source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Largest magnitude a time value may have (±100,000,000 days).
const MAX_TIME_MS: f64 = 8.64e15;

/// Temporal value: milliseconds since the Unix epoch, UTC.
///
/// An invalid date carries NaN, so two invalid dates never share an instant.
#[derive(Copy, Clone, Debug)]
pub struct DateValue {
    time: f64,
}

impl DateValue {
    /// Build from a raw time value, clipping the way the host does:
    /// non-finite or out-of-range inputs become invalid, fractions truncate.
    pub fn from_millis(ms: f64) -> Self {
        let time = if ms.is_finite() && ms.abs() <= MAX_TIME_MS {
            // trunc(-0.5) is -0; normalise so the stored instant is +0
            ms.trunc() + 0.0
        } else {
            f64::NAN
        };
        DateValue { time }
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        #[expect(
            clippy::cast_precision_loss,
            reason = "chrono's range is far inside the 2^53 exact-integer range"
        )]
        let ms = at.timestamp_millis() as f64;
        Self::from_millis(ms)
    }

    /// Midnight UTC of a calendar day (month is 1-based).
    ///
    /// An impossible day yields an invalid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map_or_else(Self::invalid, |naive| Self::from_datetime(naive.and_utc()))
    }

    pub fn invalid() -> Self {
        DateValue { time: f64::NAN }
    }

    /// Milliseconds since the epoch; NaN when invalid.
    pub fn time_value(&self) -> f64 {
        self.time
    }

    pub fn is_valid(&self) -> bool {
        !self.time.is_nan()
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "time values are integral and within ±8.64e15"
        )]
        let ms = self.time as i64;
        DateTime::from_timestamp_millis(ms)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(at) => write!(
                f,
                "{} GMT+0000 (Coordinated Universal Time)",
                at.format("%a %b %d %Y %H:%M:%S")
            ),
            None => f.write_str("Invalid Date"),
        }
    }
}

/// Pattern value. Only its text is modelled; matching is not.
#[derive(Clone, Debug)]
pub struct RegExpValue {
    source: String,
    flags: String,
}

impl RegExpValue {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        RegExpValue {
            source: source.into(),
            flags: flags.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Error value (`name` such as `TypeError`, plus a message).
#[derive(Clone, Debug)]
pub struct ErrorValue {
    name: String,
    message: String,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorValue {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

/// Unique symbol with an optional description.
#[derive(Clone, Debug)]
pub struct SymbolValue {
    description: Option<String>,
}

impl SymbolValue {
    pub fn new(description: Option<String>) -> Self {
        SymbolValue { description }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// Any other host object, known only by its class name (`Map`, `Set`, ...).
#[derive(Clone, Debug)]
pub struct HostValue {
    class: String,
}

impl HostValue {
    pub fn new(class: impl Into<String>) -> Self {
        HostValue {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.class)
    }
}
