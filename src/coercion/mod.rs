//! Tools for coercing dynamic values into static types
//!
//! The leaf converters ([to_string], [to_int], [to_float], [to_bool],
//! [to_map] and [to_slice]) are total functions over every [Value] kind.
//! Whatever cannot be converted turns into the zero value of the output.
//!
//! [Cast] picks a converter from the *requested* type rather than from the
//! runtime kind of the input. Types that are not primitives or containers
//! opt in as a [Record], and are populated from dynamic maps by binding map
//! keys onto their declared serde fields, coercing every leaf along the way.
//!
//! [Value]: crate::value::Value
//!

mod macros;

mod primitives;
pub use primitives::*;

mod structural;
pub use structural::*;

mod dispatch;
pub use dispatch::*;

mod record;
pub(crate) use record::*;
