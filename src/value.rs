use crate::errors::ValueParseError;
use core::fmt;
use core::str::FromStr;

/// A dynamically-kinded payload, so one list can hold numbers and text side by side.
///
/// Numbers compare exactly across kinds (`Int(1) == Float(1.0)`, but
/// `2^53 + 1` never equals `2^53 as f64`); a number never equals a string.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => int_eq_float(*a, *b),
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

// 2^63, the first float past the end of the i64 range
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison: the float must be integral and inside i64 before the cast.
fn int_eq_float(a: i64, b: f64) -> bool {
    b.fract() == 0.0 && (-I64_END..I64_END).contains(&b) && a == b as i64
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        *self == Value::Int(*other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        *self == Value::Float(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Str(s) if s == other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// Shortest round-trip digits, switching to exponent form below `1e-4` and from
/// `1e16` up (`1e+16`, `1.5e-05`). Whole numbers keep a fractional digit: `1.0`.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }
    let sci = format!("{x:e}");
    if let Some((mantissa, exp)) = sci.split_once('e') {
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
        if x != 0.0 && !(-4..16).contains(&exp) {
            return write!(f, "{mantissa}e{exp:+03}");
        }
    }
    let plain = x.to_string();
    if plain.contains('.') {
        f.write_str(&plain)
    } else {
        write!(f, "{plain}.0")
    }
}

/// An optionally signed run of ASCII digits.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Value {
    type Err = ValueParseError;

    /// `"quoted"` text is always a string; otherwise integers, then floats, then raw text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValueParseError::Empty);
        }
        if let Some(rest) = s.strip_prefix('"') {
            return match rest.strip_suffix('"') {
                Some(inner) => Ok(Value::Str(inner.to_owned())),
                None => Err(ValueParseError::UnterminatedQuote),
            };
        }
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Value::Int(n));
        }
        // too wide for i64; keep the digits as entered rather than rounding to a float
        if is_integer_literal(s) {
            return Ok(Value::Str(s.to_owned()));
        }
        // `inf` and `nan` parse as floats but read as words here
        if s.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(x) = s.parse::<f64>() {
                return Ok(Value::Float(x));
            }
        }
        Ok(Value::Str(s.to_owned()))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
