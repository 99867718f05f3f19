use std::sync::Arc;

use crate::value::{Map, Seq, Value};

/// Coerce to a map, sharing the input's container when it already is one
pub fn to_map(value: &Value) -> Arc<Map> {
    match value {
        Value::Map(m) => Arc::clone(m),
        _ => Arc::new(Map::new()),
    }
}

/// Coerce to a sequence, sharing the input's container when it already is one
pub fn to_slice(value: &Value) -> Arc<Seq> {
    match value {
        Value::Seq(s) => Arc::clone(s),
        _ => Arc::new(Seq::new()),
    }
}
