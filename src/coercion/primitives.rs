use crate::value::Value;

/// Coerce to text
///
/// Text and numeric text pass through, other primitives use their default
/// rendering. Everything else renders as compact JSON, or as an empty string
/// when it cannot be serialized.
///
/// An `f32` is widened when it becomes a [Value], so `99.9_f32` renders with
/// all of its `f64` digits (`99.9000015258789`).
///
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::UInt(u) => u.to_string(),
        Value::Float(f) => f.to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|e| {
            log::trace!("unable to render {} value as json: {e}", other.kind());
            String::new()
        }),
    }
}

/// Coerce to an integer
///
/// Floats truncate toward zero, saturating at the bounds of `i64`. Text must
/// be a base-10 integer literal.
///
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Int(i) => *i,
        Value::UInt(u) => *u as i64,
        Value::Float(f) => *f as i64,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::Str(s) => s.parse().unwrap_or_default(),
        _ => 0,
    }
}

/// Coerce to an unsigned integer
///
/// Reads values above `i64::MAX` without passing through [to_int]. Negative
/// inputs take the [to_int] result reinterpreted as `u64`.
///
pub fn to_uint(value: &Value) -> u64 {
    match value {
        Value::UInt(u) => *u,
        Value::Float(f) if *f >= 0.0 => *f as u64,
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or_else(|| to_int(value) as u64),
        Value::Str(s) => s.parse().unwrap_or_else(|_| to_int(value) as u64),
        _ => to_int(value) as u64,
    }
}

/// Coerce to a float
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Float(f) => *f,
        Value::Int(i) => *i as f64,
        Value::UInt(u) => *u as f64,
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::Str(s) => s.parse().unwrap_or_default(),
        _ => 0.0,
    }
}

/// Coerce to a boolean
///
/// Numbers are true when nonzero. Text is read as a boolean literal, see
/// [parse_bool].
///
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Str(s) => parse_bool(s).unwrap_or_default(),
        Value::Int(i) => *i != 0,
        Value::UInt(u) => *u != 0,
        Value::Float(f) => *f != 0.0,
        Value::Number(n) => n.as_f64().unwrap_or_default() != 0.0,
        _ => false,
    }
}

/// Read one of the conventional boolean literals
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
