//! Best-effort coercion of dynamic values into static types
//!
//! Loosely typed data, once decoded, arrives as a [Value] of whatever kind
//! the producer felt like sending: numbers as text, flags as `"1"`, records
//! as maps. [cast] turns such a value into the type the caller asks for and
//! never fails doing so; anything it cannot make sense of becomes the zero
//! value of the target.
//!
//! ```
//! use gconv::{cast, Record, Value};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, PartialEq, Deserialize, Record)]
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! let v: Value = r#"{"name": "Alice", "age": "30"}"#.parse().unwrap();
//! assert_eq!(cast::<Person>(&v), Person { name: "Alice".into(), age: 30 });
//! assert_eq!(cast::<i32>(&v), 0);
//! ```
//!

extern crate self as gconv;

pub mod coercion;
pub mod error;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use coercion::{
    cast, to_bool, to_float, to_int, to_map, to_slice, to_string, to_uint, Cast, Record,
};
pub use error::Error;
pub use gconv_derive::Record;
pub use value::{Kind, Map, Number, Opaque, Seq, Value};
