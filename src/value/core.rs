use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::*;
use crate::coercion::{self, Cast};

/// Insertion-ordered mapping of text keys to dynamic values
pub type Map = IndexMap<String, Value>;

/// Ordered sequence of dynamic values
pub type Seq = Vec<Value>;

#[derive(Default, Clone, Debug, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Number(Number),
    Str(String),

    // Structures
    Map(Arc<Map>),
    Seq(Arc<Seq>),

    // Anything without a defined conversion
    Other(Opaque),
}

impl Value {
    pub fn kind(&self) -> Kind {
        Kind::from(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce into `T`, see [crate::cast]
    pub fn cast<T: Cast>(&self) -> T {
        T::cast(self)
    }

    /// Look up a key, provided this is a map
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(m) => m.get(key),
            _ => None,
        }
    }

    /// Encode any serializable value, typically a record, as a dynamic value
    ///
    /// Values that fail to serialize become [Value::Null].
    ///
    pub fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Value {
        match serde_json::to_value(value) {
            Ok(json) => Value::from(json),
            Err(e) => {
                log::trace!("unable to encode value: {e}");
                Value::Null
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", coercion::to_string(self))
    }
}

macro_rules! from_signed {
    ( $($t:ty),* ) => {
        $(impl From<$t> for Value { fn from(x: $t) -> Self { Value::Int(x as i64) } })*
    };
}

from_signed!(i8, i16, i32, i64, isize, u8, u16, u32);

impl From<u64> for Value { fn from(x: u64) -> Self { Value::UInt(x) } }
impl From<usize> for Value { fn from(x: usize) -> Self { Value::UInt(x as u64) } }
impl From<f32> for Value { fn from(x: f32) -> Self { Value::Float(f64::from(x)) } }
impl From<f64> for Value { fn from(x: f64) -> Self { Value::Float(x) } }
impl From<bool> for Value { fn from(x: bool) -> Self { Value::Bool(x) } }
impl From<&str> for Value { fn from(x: &str) -> Self { Value::Str(x.to_string()) } }
impl From<String> for Value { fn from(x: String) -> Self { Value::Str(x) } }
impl From<Number> for Value { fn from(x: Number) -> Self { Value::Number(x) } }
impl From<Opaque> for Value { fn from(x: Opaque) -> Self { Value::Other(x) } }
impl From<Map> for Value { fn from(x: Map) -> Self { Value::Map(Arc::new(x)) } }
impl From<Arc<Map>> for Value { fn from(x: Arc<Map>) -> Self { Value::Map(x) } }
impl From<Arc<Seq>> for Value { fn from(x: Arc<Seq>) -> Self { Value::Seq(x) } }

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(x: Vec<T>) -> Self {
        Value::Seq(Arc::new(x.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(x: Option<T>) -> Self {
        x.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::from(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<Map>(),
        )
    }
}
