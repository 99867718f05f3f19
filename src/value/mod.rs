//! Dynamic values
//!
//! A [Value] is a closed set of runtime kinds, mirroring what loosely typed
//! interchange data (JSON and friends) can carry, plus an [Opaque] escape
//! hatch for handles that have no meaningful conversion at all.
//!
//! Structural values are reference counted. Converting a value that is
//! already of the requested shape hands back the same container instead of
//! a copy.
//!

mod core;
pub use self::core::*;

mod kind;
pub use kind::*;

mod number;
pub use number::*;

mod opaque;
pub use opaque::*;

mod json;

mod codec;
