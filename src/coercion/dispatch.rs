use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::*;
use crate::register;
use crate::value::{Map, Seq, Value};

/// Cast
///
/// A total conversion from a dynamic [Value] into `Self`. Implementations
/// never fail; an input that cannot be converted produces the zero value of
/// the target.
///
/// Which conversion applies is decided by the target type alone. Primitives
/// and containers delegate to the leaf converters, while any [Record] is
/// populated by binding a dynamic map onto its fields.
///
pub trait Cast: Sized {
    fn cast(value: &Value) -> Self;
}

/// Coerce a dynamic value into `T`
///
/// ```
/// use gconv::{cast, Value};
///
/// let v = Value::from("123");
/// assert_eq!(cast::<i32>(&v), 123);
/// assert_eq!(cast::<f64>(&v), 123.0);
/// assert_eq!(cast::<String>(&Value::from(123)), "123");
/// assert_eq!(cast::<i32>(&Value::Null), 0);
/// ```
///
pub fn cast<T: Cast>(value: &Value) -> T {
    T::cast(value)
}

/// Record
///
/// Marks a type as populated from dynamic maps through its serde field
/// declarations. Usually obtained with `#[derive(Record)]`.
///
/// Only maps and sequences are decoded; any other input produces
/// `Self::default()`. Fields bind independently, so a field that cannot be
/// made sense of takes its zero value while the rest keep theirs. Only an
/// error raised by the type's own `Deserialize` impl discards the record in
/// favor of `Self::default()`.
///
pub trait Record: DeserializeOwned + Default {}

impl<T: Record> Cast for T {
    fn cast(value: &Value) -> Self {
        if !value.kind().is_structural() {
            return T::default();
        }

        from_value(value).unwrap_or_else(|e| {
            log::trace!(
                "unable to decode {} into {}: {e}",
                value.kind(),
                std::any::type_name::<T>()
            );
            T::default()
        })
    }
}

register!(to_int: i8, i16, i32, i64, isize, u8, u16, u32);
register!(to_uint: u64, u128, usize);
register!(to_float: f32, f64);

impl Cast for i128 {
    fn cast(value: &Value) -> Self {
        match value {
            Value::UInt(u) => i128::from(*u),
            Value::Float(f) => *f as i128,
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .unwrap_or_else(|| i128::from(to_int(value))),
            Value::Str(s) => s.parse().unwrap_or_default(),
            _ => i128::from(to_int(value)),
        }
    }
}

impl Cast for String {
    fn cast(value: &Value) -> Self {
        to_string(value)
    }
}

impl Cast for bool {
    fn cast(value: &Value) -> Self {
        to_bool(value)
    }
}

impl Cast for Arc<Map> {
    fn cast(value: &Value) -> Self {
        to_map(value)
    }
}

impl Cast for Map {
    fn cast(value: &Value) -> Self {
        Arc::unwrap_or_clone(to_map(value))
    }
}

impl Cast for Arc<Seq> {
    fn cast(value: &Value) -> Self {
        to_slice(value)
    }
}

impl Cast for Seq {
    fn cast(value: &Value) -> Self {
        Arc::unwrap_or_clone(to_slice(value))
    }
}

impl Cast for Value {
    fn cast(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Cast> Cast for Option<T> {
    fn cast(value: &Value) -> Self {
        if value.is_null() {
            None
        } else {
            Some(T::cast(value))
        }
    }
}
