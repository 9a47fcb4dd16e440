//! Host coercions: number conversion, string conversion, relational compare.
//!
//! These are the implicit conversions the numeric and relational predicates
//! rely on. They are total: where the host would throw (converting a
//! symbol), the result is NaN or the symbol's description string instead.

use std::cmp::Ordering;

use crate::value::Value;

/// Magnitude at or above which numbers render in exponent form.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero numbers render in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Render a number the way the host's string conversion does.
///
/// Integral values print without a fraction, the special values print as
/// `NaN` / `Infinity` / `-Infinity`, and very large or very small
/// magnitudes use `1e+21` style exponents.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_owned();
    }
    let magnitude = n.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return format!("{n}");
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Parse a string the way the host's number conversion does.
///
/// Surrounding whitespace is ignored, the empty string is 0, `0x`/`0o`/`0b`
/// prefixes select a radix, `Infinity` is accepted with an optional sign,
/// and anything else that is not a decimal literal is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return radix_to_number(digits, radix);
        }
    }
    let is_decimal_literal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

fn radix_to_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut total = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => total = total * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    total
}

/// Host number conversion.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined | Value::Symbol(_) => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::Str(s) => string_to_number(s),
        Value::Date(d) => d.time_value(),
        Value::Boxed(inner) => to_number(inner),
        // Remaining reference values convert through their string form,
        // which is how `[]` becomes 0 and `[7]` becomes 7.
        Value::Array(_)
        | Value::Arguments(_)
        | Value::Object(_)
        | Value::Function(_)
        | Value::RegExp(_)
        | Value::Error(_)
        | Value::Host(_) => string_to_number(&to_display_string(value)),
    }
}

/// Host string conversion.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_owned(),
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::Str(s) => s.to_string(),
        Value::Symbol(s) => s.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_nullish() {
                    String::new()
                } else {
                    to_display_string(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Arguments(_) => "[object Arguments]".to_owned(),
        Value::Object(_) => "[object Object]".to_owned(),
        Value::Function(func) => func.source().to_owned(),
        Value::Date(d) => d.to_string(),
        Value::RegExp(r) => r.to_string(),
        Value::Error(e) => e.to_string(),
        Value::Boxed(inner) => to_display_string(inner),
        Value::Host(h) => h.to_string(),
    }
}

/// Host relational comparison.
///
/// Two string operands compare by UTF-16 code units; every other pair
/// compares numerically. `None` when either side is NaN, in which case every
/// relational operator is false.
pub fn loose_compare(a: &Value, b: &Value) -> Option<Ordering> {
    let a = as_comparable(a);
    let b = as_comparable(b);
    if let (Comparable::Text(x), Comparable::Text(y)) = (&a, &b) {
        return Some(x.encode_utf16().cmp(y.encode_utf16()));
    }
    a.number().partial_cmp(&b.number())
}

enum Comparable {
    Number(f64),
    Text(String),
}

impl Comparable {
    fn number(&self) -> f64 {
        match self {
            Comparable::Number(n) => *n,
            Comparable::Text(s) => string_to_number(s),
        }
    }
}

/// Number-hinted primitive conversion.
fn as_comparable(value: &Value) -> Comparable {
    match value {
        Value::Str(s) => Comparable::Text(s.to_string()),
        Value::Boxed(inner) => as_comparable(inner),
        Value::Array(_)
        | Value::Arguments(_)
        | Value::Object(_)
        | Value::Function(_)
        | Value::RegExp(_)
        | Value::Error(_)
        | Value::Host(_) => Comparable::Text(to_display_string(value)),
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::Symbol(_)
        | Value::Date(_) => Comparable::Number(to_number(value)),
    }
}
