//! Name-based dispatch.

use tracing::debug;
use typeis_value::Value;

use crate::error::CheckError;
use crate::names::PredicateName;
use crate::predicates as p;

/// A predicate as a function pointer, by argument count.
#[derive(Clone, Copy)]
pub(crate) enum Predicate {
    Unary(fn(&Value) -> bool),
    Binary(fn(&Value, &Value) -> bool),
    Ternary(fn(&Value, &Value, &Value) -> bool),
}

impl Predicate {
    pub(crate) const fn arity(self) -> usize {
        match self {
            Predicate::Unary(_) => 1,
            Predicate::Binary(_) => 2,
            Predicate::Ternary(_) => 3,
        }
    }
}

/// `type` with the name passed as a value: only a primitive string can
/// match, as `typeof x === name` would require.
fn is_type_by_value(value: &Value, name: &Value) -> bool {
    name.as_str().is_some_and(|name| p::is_type(value, name))
}

impl PredicateName {
    pub(crate) fn predicate(self) -> Predicate {
        use Predicate::{Binary, Ternary, Unary};

        match self {
            Self::Type => Binary(is_type_by_value),
            Self::Defined => Unary(p::defined),
            Self::NullOrUndef => Unary(p::null_or_undef),
            Self::Empty => Unary(p::empty),
            Self::Equal => Binary(p::equal),
            Self::Hosted => Binary(p::hosted),
            Self::InstanceOf => Binary(p::instance_of),
            Self::Null => Unary(p::null),
            Self::Undefined => Unary(p::undefined),
            Self::Arguments => Unary(p::arguments),
            Self::Array => Unary(p::array),
            Self::NonEmptyArray => Unary(p::non_empty_array),
            Self::ArrayEmpty => Unary(p::array_empty),
            Self::ArrayLike => Unary(p::array_like),
            Self::Boolean => Unary(p::boolean),
            Self::False => Unary(p::is_false),
            Self::True => Unary(p::is_true),
            Self::Date => Unary(p::date),
            Self::Error => Unary(p::error),
            Self::Function => Unary(p::function),
            Self::Number => Unary(p::number),
            Self::PositiveNumber => Unary(p::positive_number),
            Self::NegativeNumber => Unary(p::negative_number),
            Self::Decimal => Unary(p::decimal),
            Self::DivisibleBy => Binary(p::divisible_by),
            Self::Int => Unary(p::int),
            Self::PositiveInt => Unary(p::positive_int),
            Self::NegativeInt => Unary(p::negative_int),
            Self::Maximum => Binary(p::maximum),
            Self::Minimum => Binary(p::minimum),
            Self::Nan => Unary(p::nan),
            Self::Even => Unary(p::even),
            Self::Odd => Unary(p::odd),
            Self::Ge => Binary(p::ge),
            Self::Gt => Binary(p::gt),
            Self::Le => Binary(p::le),
            Self::Lt => Binary(p::lt),
            Self::Within => Ternary(p::within),
            Self::Object => Unary(p::object),
            Self::NonEmptyObject => Unary(p::non_empty_object),
            Self::ObjectInstanceOf => Binary(p::object_instance_of),
            Self::Regexp => Unary(p::regexp),
            Self::String => Unary(p::string),
            Self::NonEmptyString => Unary(p::non_empty_string),
        }
    }
}

/// Run the predicate called `name`, by canonical name or alias.
///
/// ```text
/// check("posInt", &[Value::from(3)])          // Ok(true)
/// check("within", &[Value::from(3)])          // Err(ArityMismatch { .. })
/// check("isSomething", &[Value::Undefined])   // Err(UnknownPredicate { .. })
/// ```
pub fn check(name: &str, args: &[Value]) -> Result<bool, CheckError> {
    let resolved = PredicateName::resolve(name).ok_or_else(|| CheckError::UnknownPredicate {
        name: name.to_owned(),
    })?;
    if resolved.canonical_name() != name {
        debug!(alias = name, canonical = resolved.canonical_name(), "resolved predicate alias");
    }

    match (resolved.predicate(), args) {
        (Predicate::Unary(f), [value]) => Ok(f(value)),
        (Predicate::Binary(f), [value, other]) => Ok(f(value, other)),
        (Predicate::Ternary(f), [value, start, finish]) => Ok(f(value, start, finish)),
        (predicate, _) => Err(CheckError::ArityMismatch {
            name: name.to_owned(),
            expected: predicate.arity(),
            got: args.len(),
        }),
    }
}
