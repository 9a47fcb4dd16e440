//! Predicate names and their alternate spellings.
//!
//! Every predicate has one canonical name and any number of aliases. The
//! table is a closed enum plus `match`es, so resolving a name never touches
//! a map and an unknown name is just `None`.

use std::fmt;

/// Canonical identity of a predicate, whatever name it was called by.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredicateName {
    Type,
    Defined,
    NullOrUndef,
    Empty,
    Equal,
    Hosted,
    InstanceOf,
    Null,
    Undefined,
    Arguments,
    Array,
    NonEmptyArray,
    /// `array.empty`: a zero `length`, on any value.
    ArrayEmpty,
    ArrayLike,
    Boolean,
    False,
    True,
    Date,
    Error,
    Function,
    Number,
    PositiveNumber,
    NegativeNumber,
    Decimal,
    DivisibleBy,
    Int,
    PositiveInt,
    NegativeInt,
    Maximum,
    Minimum,
    Nan,
    Even,
    Odd,
    Ge,
    Gt,
    Le,
    Lt,
    Within,
    Object,
    NonEmptyObject,
    ObjectInstanceOf,
    Regexp,
    String,
    NonEmptyString,
}

impl PredicateName {
    /// All predicates, in declaration order.
    pub const ALL: [PredicateName; 44] = [
        Self::Type,
        Self::Defined,
        Self::NullOrUndef,
        Self::Empty,
        Self::Equal,
        Self::Hosted,
        Self::InstanceOf,
        Self::Null,
        Self::Undefined,
        Self::Arguments,
        Self::Array,
        Self::NonEmptyArray,
        Self::ArrayEmpty,
        Self::ArrayLike,
        Self::Boolean,
        Self::False,
        Self::True,
        Self::Date,
        Self::Error,
        Self::Function,
        Self::Number,
        Self::PositiveNumber,
        Self::NegativeNumber,
        Self::Decimal,
        Self::DivisibleBy,
        Self::Int,
        Self::PositiveInt,
        Self::NegativeInt,
        Self::Maximum,
        Self::Minimum,
        Self::Nan,
        Self::Even,
        Self::Odd,
        Self::Ge,
        Self::Gt,
        Self::Le,
        Self::Lt,
        Self::Within,
        Self::Object,
        Self::NonEmptyObject,
        Self::ObjectInstanceOf,
        Self::Regexp,
        Self::String,
        Self::NonEmptyString,
    ];

    /// Resolve a canonical name or alias.
    pub fn resolve(name: &str) -> Option<Self> {
        let resolved = match name {
            "type" | "a" => Self::Type,
            "defined" | "def" => Self::Defined,
            "nullOrUndef" | "nullOrUndefined" | "isNullOrUndefined" => Self::NullOrUndef,
            "empty" => Self::Empty,
            "equal" | "eq" => Self::Equal,
            "hosted" => Self::Hosted,
            "instanceOf" | "instOf" | "instanceof" => Self::InstanceOf,
            "null" => Self::Null,
            "undefined" | "udef" | "undef" => Self::Undefined,
            "arguments" | "args" => Self::Arguments,
            "array" | "ary" | "arry" | "isArray" => Self::Array,
            "nonEmptyArray" | "nonEmptyArry" | "nonEmptyAry" => Self::NonEmptyArray,
            "array.empty" | "arguments.empty" | "args.empty" | "ary.empty" | "arry.empty" => {
                Self::ArrayEmpty
            }
            "arrayLike" | "arryLike" | "aryLike" | "arraylike" | "isArrayLike" => Self::ArrayLike,
            "boolean" | "bool" | "isBoolean" => Self::Boolean,
            "false" => Self::False,
            "true" => Self::True,
            "date" | "isDate" => Self::Date,
            "error" | "err" | "isError" => Self::Error,
            "function" | "func" | "isFunction" => Self::Function,
            "number" | "num" | "isNumber" => Self::Number,
            "positiveNumber" | "posNum" | "positiveNum" => Self::PositiveNumber,
            "negativeNumber" | "negNum" | "negativeNum" => Self::NegativeNumber,
            "decimal" | "decNum" | "decNumer" => Self::Decimal,
            "divisibleBy" | "divisBy" => Self::DivisibleBy,
            "int" | "integer" => Self::Int,
            "positiveInt" | "posInt" | "positiveInteger" => Self::PositiveInt,
            "negativeInt" | "negativeInteger" | "negInt" => Self::NegativeInt,
            "maximum" | "max" => Self::Maximum,
            "minimum" | "min" => Self::Minimum,
            "nan" | "notANumber" | "notANum" => Self::Nan,
            "even" => Self::Even,
            "odd" => Self::Odd,
            "ge" => Self::Ge,
            "gt" | "greaterThan" => Self::Gt,
            "le" | "lessThanOrEq" | "lessThanOrEqual" => Self::Le,
            "lt" | "lessThan" => Self::Lt,
            "within" | "withIn" => Self::Within,
            "object" | "obj" | "isPlainObject" => Self::Object,
            "nonEmptyObject" | "nonEmptyObj" => Self::NonEmptyObject,
            "objectInstanceOf" | "objInstOf" | "objectInstanceof" | "objectinstanceof" => {
                Self::ObjectInstanceOf
            }
            "regexp" | "regExp" | "isRegExp" => Self::Regexp,
            "string" | "str" | "isString" => Self::String,
            "nonEmptyString" | "nonEmptyStr" => Self::NonEmptyString,
            _ => return None,
        };
        Some(resolved)
    }

    /// The name this predicate is documented under.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Defined => "defined",
            Self::NullOrUndef => "nullOrUndef",
            Self::Empty => "empty",
            Self::Equal => "equal",
            Self::Hosted => "hosted",
            Self::InstanceOf => "instanceOf",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Arguments => "arguments",
            Self::Array => "array",
            Self::NonEmptyArray => "nonEmptyArray",
            Self::ArrayEmpty => "array.empty",
            Self::ArrayLike => "arrayLike",
            Self::Boolean => "boolean",
            Self::False => "false",
            Self::True => "true",
            Self::Date => "date",
            Self::Error => "error",
            Self::Function => "function",
            Self::Number => "number",
            Self::PositiveNumber => "positiveNumber",
            Self::NegativeNumber => "negativeNumber",
            Self::Decimal => "decimal",
            Self::DivisibleBy => "divisibleBy",
            Self::Int => "int",
            Self::PositiveInt => "positiveInt",
            Self::NegativeInt => "negativeInt",
            Self::Maximum => "maximum",
            Self::Minimum => "minimum",
            Self::Nan => "nan",
            Self::Even => "even",
            Self::Odd => "odd",
            Self::Ge => "ge",
            Self::Gt => "gt",
            Self::Le => "le",
            Self::Lt => "lt",
            Self::Within => "within",
            Self::Object => "object",
            Self::NonEmptyObject => "nonEmptyObject",
            Self::ObjectInstanceOf => "objectInstanceOf",
            Self::Regexp => "regexp",
            Self::String => "string",
            Self::NonEmptyString => "nonEmptyString",
        }
    }

    /// Alternate spellings, not including the canonical name.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Type => &["a"],
            Self::Defined => &["def"],
            Self::NullOrUndef => &["nullOrUndefined", "isNullOrUndefined"],
            Self::Equal => &["eq"],
            Self::InstanceOf => &["instOf", "instanceof"],
            Self::Undefined => &["udef", "undef"],
            Self::Arguments => &["args"],
            Self::Array => &["ary", "arry", "isArray"],
            Self::NonEmptyArray => &["nonEmptyArry", "nonEmptyAry"],
            Self::ArrayEmpty => &["arguments.empty", "args.empty", "ary.empty", "arry.empty"],
            Self::ArrayLike => &["arryLike", "aryLike", "arraylike", "isArrayLike"],
            Self::Boolean => &["bool", "isBoolean"],
            Self::Date => &["isDate"],
            Self::Error => &["err", "isError"],
            Self::Function => &["func", "isFunction"],
            Self::Number => &["num", "isNumber"],
            Self::PositiveNumber => &["posNum", "positiveNum"],
            Self::NegativeNumber => &["negNum", "negativeNum"],
            Self::Decimal => &["decNum", "decNumer"],
            Self::DivisibleBy => &["divisBy"],
            Self::Int => &["integer"],
            Self::PositiveInt => &["posInt", "positiveInteger"],
            Self::NegativeInt => &["negativeInteger", "negInt"],
            Self::Maximum => &["max"],
            Self::Minimum => &["min"],
            Self::Nan => &["notANumber", "notANum"],
            Self::Gt => &["greaterThan"],
            Self::Le => &["lessThanOrEq", "lessThanOrEqual"],
            Self::Lt => &["lessThan"],
            Self::Within => &["withIn"],
            Self::Object => &["obj", "isPlainObject"],
            Self::NonEmptyObject => &["nonEmptyObj"],
            Self::ObjectInstanceOf => &["objInstOf", "objectInstanceof", "objectinstanceof"],
            Self::Regexp => &["regExp", "isRegExp"],
            Self::String => &["str", "isString"],
            Self::NonEmptyString => &["nonEmptyStr"],
            Self::Empty
            | Self::Hosted
            | Self::Null
            | Self::False
            | Self::True
            | Self::Even
            | Self::Odd
            | Self::Ge => &[],
        }
    }

    /// Number of arguments the predicate takes.
    pub fn arity(self) -> usize {
        self.predicate().arity()
    }
}

impl fmt::Display for PredicateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
