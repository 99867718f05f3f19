use core::fmt;

use crate::value::Kind;

#[macro_export]
macro_rules! err {
    ( $x:expr ) => {
        $crate::error::Error::Other($x.to_string())
    };
}

/// Failures raised while moving values through the interchange codec
///
/// None of these ever reach callers of the coercion functions, which
/// substitute zero values instead. They surface only from JSON text parsing
/// and from the command line tool.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    UnknownVariant(String),
    ExpectedVariant(Kind),
    InvalidNumber(String),
    Json(String),
    Other(String),
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::UnknownVariant(name) => format!("unknown variant '{name}'"),
            Error::ExpectedVariant(kind) => {
                format!("expected a variant name or single-entry map, found '{kind}'")
            }
            Error::InvalidNumber(text) => format!("'{text}' is not a valid number"),
            Error::Json(msg) => format!("malformed json: {msg}"),
            Error::Other(s) => s.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.as_str())
    }
}

impl std::error::Error for Error {}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        err!(msg)
    }

    fn unknown_variant(variant: &str, _expected: &'static [&'static str]) -> Self {
        Error::UnknownVariant(variant.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        err!(msg)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value.to_string())
    }
}
