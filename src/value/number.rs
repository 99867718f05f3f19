use std::fmt;

/// Numeric text that has not yet been resolved to a width
///
/// Mirrors a JSON number kept as its literal text. Nothing is validated on
/// construction; parsing happens on demand and unparseable text reads as
/// zero through the coercion functions.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Number(String);

impl Number {
    pub fn new(text: impl Into<String>) -> Self {
        Number(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Number {
    fn from(value: &str) -> Self {
        Number::new(value)
    }
}

impl From<serde_json::Number> for Number {
    fn from(value: serde_json::Number) -> Self {
        Number(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_on_demand() {
        let n = Number::from("42");
        assert_eq!(n.as_i64(), Some(42));
        assert_eq!(n.as_f64(), Some(42.0));

        let n = Number::from("99.99");
        assert_eq!(n.as_i64(), None);
        assert_eq!(n.as_f64(), Some(99.99));

        let n = Number::from("18446744073709551615");
        assert_eq!(n.as_i64(), None);
        assert_eq!(n.as_u64(), Some(u64::MAX));
    }

    #[test]
    fn keeps_literal_text() {
        let n = Number::from(serde_json::Number::from(7));
        assert_eq!(n.to_string(), "7");
        assert_eq!(Number::new("abc").as_str(), "abc");
    }
}
