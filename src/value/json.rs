use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value as Json;

use super::*;
use crate::error::Error;

impl From<Json> for Value {
    fn from(value: Json) -> Self {
        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            Json::String(s) => Value::Str(s),
            Json::Array(a) => Value::Seq(Arc::new(a.into_iter().map(Value::from).collect())),
            Json::Object(o) => Value::Map(Arc::new(
                o.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    /// Parse JSON text, typing numbers as integers or floats
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let json: Json = serde_json::from_str(s)?;
        Ok(Value::from(json))
    }
}

impl Value {
    /// Parse JSON text, keeping every number as its literal [Number] text
    pub fn from_json_numbers(s: &str) -> Result<Value, Error> {
        let json: Json = serde_json::from_str(s)?;
        Ok(keep_numbers(json))
    }
}

fn keep_numbers(json: Json) -> Value {
    match json {
        Json::Number(n) => Value::Number(Number::from(n)),
        Json::Array(a) => Value::Seq(Arc::new(a.into_iter().map(keep_numbers).collect())),
        Json::Object(o) => Value::Map(Arc::new(
            o.into_iter().map(|(k, v)| (k, keep_numbers(v))).collect(),
        )),
        other => Value::from(other),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_are_typed() {
        let v = Value::from(json!([1, -1, 18446744073709551615_u64, 1.5]));
        let Value::Seq(items) = v else { panic!("expected a sequence") };
        assert_eq!(
            *items,
            vec![
                Value::Int(1),
                Value::Int(-1),
                Value::UInt(u64::MAX),
                Value::Float(1.5)
            ]
        );
    }

    #[test]
    fn parses_text() {
        let v: Value = r#"{"a": {"b": [true, null]}}"#.parse().unwrap();
        let inner = v.get("a").and_then(|a| a.get("b")).cloned();
        assert_eq!(inner, Some(Value::from(vec![Value::Bool(true), Value::Null])));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!("{".parse::<Value>(), Err(Error::Json(_))));
    }

    #[test]
    fn keeps_number_text() {
        let v = Value::from_json_numbers(r#"{"n": 99.99, "s": "x"}"#).unwrap();
        assert_eq!(v.get("n"), Some(&Value::Number(Number::new("99.99"))));
        assert_eq!(v.get("s"), Some(&Value::from("x")));
    }
}
