use crate::models::Value;

// i64::MAX is not exactly representable as f64; 2^63 is the first value out of range.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;

/// Leniently read a cell as an integer.
///
/// Fractional values are truncated toward zero. Anything that is not a finite
/// number within `i64` range (including empty text) yields `None`.
pub fn try_parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Missing => None,
        Value::Int(i) => Some(*i),
        Value::Float(f) => float_to_int(*f),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_int))
        }
    }
}

fn float_to_int(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    if (I64_LOWER..I64_UPPER).contains(&t) {
        Some(t as i64)
    } else {
        None
    }
}

/// Render a cell as trimmed text. Missing and NaN cells stay missing; empty
/// strings are kept. Integral floats render without a fraction (`2021.0` is
/// `"2021"`).
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::Missing => None,
        Value::Float(f) if f.is_nan() => None,
        Value::Text(s) => Some(s.trim().to_string()),
        other => Some(other.to_string().trim().to_string()),
    }
}

/// Coerce a whole column to nullable integers. Returns the coerced cells and
/// how many present cells degraded to missing.
pub fn int_column(values: &[Value]) -> (Vec<Value>, usize) {
    let mut degraded = 0;
    let coerced = values
        .iter()
        .map(|v| match try_parse_int(v) {
            Some(i) => Value::Int(i),
            None => {
                if !v.is_missing() {
                    degraded += 1;
                }
                Value::Missing
            }
        })
        .collect();
    (coerced, degraded)
}

pub fn text_column(values: &[Value]) -> Vec<Value> {
    values.iter().map(|v| Value::from(to_text(v))).collect()
}
