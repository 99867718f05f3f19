use super::Value;

/// The runtime kind of a [Value]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Null,
    Bool,
    Int,
    #[strum(to_string = "uint")]
    UInt,
    Float,
    Number,
    Str,
    Map,
    Seq,
    Other,
}

impl Kind {
    pub fn is_structural(&self) -> bool {
        matches!(self, Kind::Map | Kind::Seq)
    }
}

impl From<&Value> for Kind {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Float(_) => Kind::Float,
            Value::Number(_) => Kind::Number,
            Value::Str(_) => Kind::Str,
            Value::Map(_) => Kind::Map,
            Value::Seq(_) => Kind::Seq,
            Value::Other(_) => Kind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn renders_snake_case() {
        assert_eq!(Kind::UInt.to_string(), "uint");
        assert_eq!(Kind::Str.to_string(), "str");
        assert_eq!(Kind::from_str("seq"), Ok(Kind::Seq));
    }

    #[test]
    fn kind_of_value() {
        assert_eq!(Kind::from(&Value::Null), Kind::Null);
        assert_eq!(Value::from(1.5).kind(), Kind::Float);
        assert_eq!(Value::from(vec![1, 2]).kind(), Kind::Seq);
        assert!(Kind::Map.is_structural());
        assert!(!Kind::Str.is_structural());
    }
}
