//! Drawing sheet submit handling
//!
//! Runs after the host has turned the sheet's form into update data and
//! before that data is dispatched: resolves the dash pattern from the
//! toggle, then normalizes and prunes the tracked flag fields.

use crate::config::HookConfig;
use crate::Result;
use drawflags_core::Payload;
use drawflags_engine::{number_value, vivify, PreSave};
use serde_json::Value;
use tracing::trace;

/// Document type the sheet handling applies to
pub const DRAWING_DOCUMENT: &str = "Drawing";

/// Sheet state read at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContext {
    /// `documentName` of the sheet's document
    pub document_name: String,
    /// Whether the dashed-line checkbox is ticked
    pub dash_enabled: bool,
}

impl SubmitContext {
    /// Context for a drawing sheet
    pub fn drawing(dash_enabled: bool) -> Self {
        Self {
            document_name: DRAWING_DOCUMENT.to_string(),
            dash_enabled,
        }
    }
}

/// Prepare sheet submit data for a drawing
///
/// Non-drawing sheets get `data` back untouched.
pub fn prepare_submit_data(
    ctx: &SubmitContext,
    mut data: Payload,
    config: &HookConfig,
) -> Result<Payload> {
    if ctx.document_name != DRAWING_DOCUMENT {
        trace!(target: "drawflags::hooks", document = %ctx.document_name, "not a drawing sheet");
        return Ok(data);
    }

    let scope = config.flags_scope();
    let line_style = vivify(&mut data, &scope.clone().key("lineStyle"))?;
    let dash = if ctx.dash_enabled {
        let (dash, gap) = match line_style.get("dash") {
            Some(Value::Array(items)) => (items.first(), items.get(1)),
            _ => (None, None),
        };
        Value::Array(vec![
            number_value(length_or(dash, config.dash.dash)),
            number_value(length_or(gap, config.dash.gap)),
        ])
    } else {
        Value::Null
    };
    line_style.insert("dash".to_string(), dash);

    PreSave::new().scoped(scope).apply(&mut data)?;
    Ok(data)
}

/// Host numeric conversion of a form value; NaN when it has none
///
/// Follows the host's `Number()`: absent is NaN, `null` is 0, booleans are
/// 0 or 1, arrays convert through their comma-joined text (so `[]` is 0 and
/// `["5"]` is 5), objects are NaN.
fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Object(_)) => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => string_to_number(s),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => 0.0,
            [single] => single_element_number(single),
            // the joined text contains a comma
            _ => f64::NAN,
        },
    }
}

/// Number of a one-element array, converted through the element's text
fn single_element_number(item: &Value) -> f64 {
    match item {
        Value::Null => 0.0,
        Value::Bool(_) | Value::Object(_) => f64::NAN,
        other => to_number(Some(other)),
    }
}

/// Host string-to-number conversion
///
/// Accepts surrounding whitespace, decimal literals with optional sign and
/// exponent, `0x`/`0o`/`0b` integers and signed `Infinity`. Blank text is 0.
fn string_to_number(text: &str) -> f64 {
    let s = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN);
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map_or(f64::NAN, |n| sign * n)
}

/// `digits [. digits] [e|E [+|-] digits]` with at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = !(int_part.is_empty() && frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit());
    let exponent_ok = exponent.map_or(true, |e| {
        let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });
    mantissa_ok && exponent_ok
}

/// A dash length, or `fallback` when the input converts to 0 or NaN
///
/// Infinite lengths are kept; they have no JSON form and are stored as `null`.
fn length_or(value: Option<&Value>, fallback: f64) -> f64 {
    let n = to_number(value);
    if n == 0.0 || n.is_nan() {
        fallback
    } else {
        n
    }
}
