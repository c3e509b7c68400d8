//! Normalization of a raw JSON request body into a [`RiskInput`].
//!
//! Clients send numbers either as JSON numbers or as strings, sometimes with
//! trailing units ("170cm"). Strings are read up to the end of their leading
//! numeric prefix; anything after it is ignored.

use serde_json::Value;

use super::{RiskInput, ScoringError};

/// Fields that must be present and non-empty.
pub const REQUIRED_FIELDS: [&str; 5] = ["age", "height", "weight", "systolic", "diastolic"];

/// Build a [`RiskInput`] from a request body.
///
/// All required fields are checked for presence before any of them is
/// parsed, so a missing field always wins over a malformed one.
pub fn parse_request(body: &Value) -> Result<RiskInput, ScoringError> {
    for field in REQUIRED_FIELDS {
        if !body.get(field).is_some_and(is_present) {
            return Err(ScoringError::MissingParameter(field));
        }
    }

    Ok(RiskInput {
        age: integer_field(body, "age")?,
        height_cm: real_field(body, "height")?,
        weight_kg: real_field(body, "weight")?,
        systolic: integer_field(body, "systolic")?,
        diastolic: integer_field(body, "diastolic")?,
        family_history: family_history(body),
    })
}

/// `null`, `false`, zero and the empty string count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn not_numeric(field: &'static str, value: &Value) -> ScoringError {
    ScoringError::NotNumeric {
        field,
        value: value.to_string(),
    }
}

/// Integer fields truncate fractional input toward zero and saturate at the
/// bounds of `i64`; only non-numeric input fails.
fn integer_field(body: &Value, field: &'static str) -> Result<i64, ScoringError> {
    let value = &body[field];
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let f = n.as_f64().ok_or_else(|| not_numeric(field, value))?;
            // float-to-int `as` saturates
            Ok(f.trunc() as i64)
        }
        Value::String(s) => leading_integer(s).ok_or_else(|| not_numeric(field, value)),
        _ => Err(not_numeric(field, value)),
    }
}

fn real_field(body: &Value, field: &'static str) -> Result<f64, ScoringError> {
    let value = &body[field];
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| not_numeric(field, value)),
        Value::String(s) => real_prefix(s)
            .and_then(|prefix| prefix.parse::<f64>().ok())
            .ok_or_else(|| not_numeric(field, value)),
        _ => Err(not_numeric(field, value)),
    }
}

/// Non-array values and non-string entries are dropped.
fn family_history(body: &Value) -> Vec<String> {
    body.get("familyHistory")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(|tag| tag.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// Length of the optional leading sign.
fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading integer after whitespace, either `[+-]?0[xX][0-9a-fA-F]+` (hex)
/// or `[+-]?\d+`. Magnitudes beyond `i64` saturate.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let rest = &s[sign_len(bytes)..];

    let (digits, radix) = match rest.get(..2) {
        Some("0x" | "0X") => {
            let hex = &rest[2..];
            let len = hex.bytes().take_while(u8::is_ascii_hexdigit).count();
            (&hex[..len], 16)
        }
        _ => (&rest[..digits_len(rest.as_bytes())], 10),
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.chars().fold(0i64, |acc, c| {
        let digit = c.to_digit(radix).map_or(0, i64::from);
        acc.saturating_mul(i64::from(radix)).saturating_add(digit)
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading `[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?` after whitespace.
fn real_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = sign_len(bytes);

    let int_digits = digits_len(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digits_len(&bytes[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    Some(&s[..end])
}
