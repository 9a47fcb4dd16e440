//! Canonical classification enums.
//!
//! Two orthogonal views of a value:
//!
//! - [`TypeTag`], the closed category set every value belongs to exactly one
//!   of. This is what the equality engine dispatches on.
//! - [`PrimitiveKind`], the coarser host `typeof` kind. Boxed primitives and
//!   every reference value share the `Object` kind even when their tags
//!   differ, which is why the equality engine checks it first.

use std::fmt;

/// Canonical category of a runtime value.
///
/// Derived from the value's variant, never from its members: an object with
/// a numeric `length` member is still a [`TypeTag::PlainObject`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    /// The `null` value.
    Null,
    /// The `undefined` value.
    Undefined,
    /// Booleans, primitive or boxed.
    Boolean,
    /// Numbers (IEEE 754), primitive or boxed.
    Number,
    /// Strings, primitive or boxed.
    String,
    /// Ordered array.
    Array,
    /// Arguments-like ordered sequence.
    ArgumentsList,
    /// Key-value mapping.
    PlainObject,
    /// Callable value.
    Function,
    /// Temporal value.
    Date,
    /// Pattern value.
    RegularExpression,
    /// Error value.
    Error,
    /// Anything else (symbols, host objects).
    Other,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub const ALL: [TypeTag; 13] = [
        TypeTag::Null,
        TypeTag::Undefined,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Array,
        TypeTag::ArgumentsList,
        TypeTag::PlainObject,
        TypeTag::Function,
        TypeTag::Date,
        TypeTag::RegularExpression,
        TypeTag::Error,
        TypeTag::Other,
    ];

    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Undefined => "Undefined",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::ArgumentsList => "Arguments",
            Self::PlainObject => "Object",
            Self::Function => "Function",
            Self::Date => "Date",
            Self::RegularExpression => "RegExp",
            Self::Error => "Error",
            Self::Other => "Other",
        }
    }

    /// The host's builtin tag string, e.g. `[object Array]`.
    ///
    /// `Other` has no single builtin tag; callers that need the exact host
    /// string for a symbol or host object should render the value itself.
    #[must_use]
    pub const fn builtin_tag(self) -> &'static str {
        match self {
            Self::Null => "[object Null]",
            Self::Undefined => "[object Undefined]",
            Self::Boolean => "[object Boolean]",
            Self::Number => "[object Number]",
            Self::String => "[object String]",
            Self::Array => "[object Array]",
            Self::ArgumentsList => "[object Arguments]",
            Self::PlainObject => "[object Object]",
            Self::Function => "[object Function]",
            Self::Date => "[object Date]",
            Self::RegularExpression => "[object RegExp]",
            Self::Error => "[object Error]",
            Self::Other => "[object Other]",
        }
    }

    /// Whether values of this tag are ordered sequences.
    #[must_use]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::Array | Self::ArgumentsList)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host `typeof` kind of a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    Undefined,
    /// `null` and every non-callable reference value.
    Object,
    Boolean,
    Number,
    String,
    Function,
    Symbol,
}

impl PrimitiveKind {
    /// The spelling `typeof` produces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Function => "function",
            Self::Symbol => "symbol",
        }
    }

    /// Parse a `typeof` spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "undefined" => Some(Self::Undefined),
            "object" => Some(Self::Object),
            "boolean" => Some(Self::Boolean),
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "function" => Some(Self::Function),
            "symbol" => Some(Self::Symbol),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
