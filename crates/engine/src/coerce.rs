//! Save coercion for measure-like form values
//!
//! Texture sizes, transform offsets and word-wrap widths are typed into text
//! inputs as pixels (`12`, `12px`) or percentages (`50%`). Pixels are stored
//! as numbers, percentages as canonical strings, and everything unusable as
//! `null`.

use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest integer a host number represents exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Turns a raw form value into its persisted form
///
/// The normalizer calls this for every scalar field. `raw` is `None` when
/// the field is absent from the payload.
pub trait SaveCoercion {
    /// Coerce `raw` into the value that should be stored
    fn save(&self, raw: Option<&Value>) -> Value;
}

impl<F> SaveCoercion for F
where
    F: Fn(Option<&Value>) -> Value,
{
    fn save(&self, raw: Option<&Value>) -> Value {
        self(raw)
    }
}

/// Error type for measure parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeasureParseError {
    /// Input is empty or whitespace only
    #[error("empty measure")]
    Empty,
    /// Input does not match `<number>[px|%]`
    #[error("invalid measure '{0}'")]
    Invalid(String),
}

/// A length typed into a drawing form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Absolute length, stored as a number
    Pixels(f64),
    /// Relative length, stored as `"<n>%"`
    Percent(f64),
}

impl Measure {
    /// Persisted representation
    pub fn to_value(self) -> Value {
        match self {
            Measure::Pixels(px) => number_value(px),
            Measure::Percent(_) => Value::String(self.to_string()),
        }
    }
}

impl FromStr for Measure {
    type Err = MeasureParseError;

    /// Parse `\s*(\d*\.?\d+)\s*(px|%)?\s*`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MeasureParseError::Empty);
        }

        let (digits, percent) = if let Some(rest) = trimmed.strip_suffix('%') {
            (rest.trim_end(), true)
        } else if let Some(rest) = trimmed.strip_suffix("px") {
            (rest.trim_end(), false)
        } else {
            (trimmed, false)
        };

        if !is_unsigned_decimal(digits) {
            return Err(MeasureParseError::Invalid(s.to_string()));
        }
        let n: f64 = digits
            .parse()
            .map_err(|_| MeasureParseError::Invalid(s.to_string()))?;

        Ok(if percent {
            Measure::Percent(n)
        } else {
            Measure::Pixels(n)
        })
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Pixels(px) => write!(f, "{}px", px),
            Measure::Percent(p) => write!(f, "{}%", p),
        }
    }
}

/// `\d*\.?\d+`: optional integer part, optional dot, at least one trailing digit
fn is_unsigned_decimal(s: &str) -> bool {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => ("", s),
    };
    int_part.bytes().all(|b| b.is_ascii_digit())
        && !frac_part.is_empty()
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Store integral values as JSON integers, the rest as floats
///
/// Non-finite input has no JSON form and becomes `null`.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

/// Default save coercion for measure fields
///
/// - absent, `null`, blank strings, bools, arrays, objects: `null`
/// - numbers: unchanged
/// - `"12"`, `"12px"`: `12`
/// - `"50%"`: `"50%"`
/// - anything else: `null`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeasureCoercion;

impl SaveCoercion for MeasureCoercion {
    fn save(&self, raw: Option<&Value>) -> Value {
        match raw {
            Some(Value::Number(n)) => Value::Number(n.clone()),
            Some(Value::String(s)) => s
                .parse::<Measure>()
                .map_or(Value::Null, Measure::to_value),
            _ => Value::Null,
        }
    }
}

/// Coerce with [`MeasureCoercion`]
pub fn save_value(raw: Option<&Value>) -> Value {
    MeasureCoercion.save(raw)
}

/// Render a stored measure back into form text
///
/// Numbers become pixel strings, strings are shown as stored, anything else
/// has no text.
pub fn stringify_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => n.as_f64().map(|px| Measure::Pixels(px).to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
