//! Lenient decoding of dynamic values onto serde types
//!
//! [Decoder] drives a type's `Deserialize` impl from a [Value], asking the
//! leaf converters for every primitive the type requests instead of
//! insisting that the runtime kind already matches. Struct fields are
//! walked by declaration: each is looked up in the map (exactly, then
//! ignoring case) and missing keys decode as `null`, which produces the
//! field's zero value.
//!
//! Decoding never fails on its own account. An enum without a matching
//! variant reads as its first declared variant, and an opaque value read
//! through `deserialize_any` reads as `null`. Errors only come from a type's
//! own `Deserialize` impl.
//!

use std::slice;

use indexmap::map;
use serde::de::value::StrDeserializer;
use serde::de::{
    DeserializeOwned, DeserializeSeed, Deserializer, EnumAccess, IntoDeserializer, MapAccess,
    SeqAccess, VariantAccess, Visitor,
};

use super::*;
use crate::error::Error;
use crate::value::{Map, Value};

static NULL: Value = Value::Null;

/// Decode a dynamic value into `T`, coercing leaves as needed
pub(crate) fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, Error> {
    T::deserialize(Decoder(value))
}

struct Decoder<'a>(&'a Value);

macro_rules! coerce {
    ( $de:lifetime; $($method:ident => $visit:ident($ty:ty)),* $(,)? ) => {
        $(
            fn $method<V: Visitor<$de>>(self, visitor: V) -> Result<V::Value, Error> {
                visitor.$visit(<$ty as Cast>::cast(self.0))
            }
        )*
    };
}

impl<'de, 'a> Deserializer<'de> for Decoder<'a> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(*b),
            Value::Int(i) => visitor.visit_i64(*i),
            Value::UInt(u) => visitor.visit_u64(*u),
            Value::Float(f) => visitor.visit_f64(*f),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => visitor.visit_i64(i),
                (_, Some(u), _) => visitor.visit_u64(u),
                (_, _, Some(f)) => visitor.visit_f64(f),
                _ => visitor.visit_str(n.as_str()),
            },
            Value::Str(s) => visitor.visit_str(s),
            Value::Map(m) => visitor.visit_map(Entries::new(Some(&**m))),
            Value::Seq(s) => visitor.visit_seq(Items::new(s, 0)),
            Value::Other(_) => visitor.visit_unit(),
        }
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_bool(to_bool(self.0))
    }

    coerce! { 'de;
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        let s = text(self.0);
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => visitor.visit_char(char::default()),
        }
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(text(self.0))
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(text(self.0))
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Str(s) => visitor.visit_bytes(s.as_bytes()),
            Value::Seq(s) => visitor.visit_seq(Items::new(s, 0)),
            _ => visitor.visit_bytes(&[]),
        }
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        if self.0.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_tuple(0, visitor)
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Seq(s) => visitor.visit_seq(Items::new(s, len)),
            _ => visitor.visit_seq(Items::new(&[], len)),
        }
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.deserialize_tuple(len, visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Map(m) => visitor.visit_map(Entries::new(Some(&**m))),
            _ => visitor.visit_map(Entries::new(None)),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        let map = match self.0 {
            Value::Map(m) => Some(&**m),
            _ => None,
        };

        visitor.visit_map(Fields {
            map,
            fields: fields.iter(),
            value: &NULL,
        })
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        let (name, value) = match self.0 {
            Value::Str(s) => (s.as_str(), &NULL),
            Value::Map(m) if m.len() == 1 => match m.iter().next() {
                Some((name, value)) => (name.as_str(), value),
                None => ("", &NULL),
            },
            _ => ("", &NULL),
        };

        // unknown names read as the first variant, with a zero payload
        let known = variants
            .iter()
            .find(|v| **v == name)
            .or_else(|| variants.iter().find(|v| fold_eq(v, name)));

        match (known, variants.first()) {
            (Some(v), _) => visitor.visit_enum(Variant { name: v, value }),
            (None, Some(v)) => visitor.visit_enum(Variant { name: v, value: &NULL }),
            (None, None) => Err(Error::ExpectedVariant(self.0.kind())),
        }
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }
}

// null reads as an empty string rather than its json rendering
fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        v => to_string(v),
    }
}

struct Items<'a> {
    iter: slice::Iter<'a, Value>,
    pad: usize,
}

impl<'a> Items<'a> {
    /// Yield `items`, padded with nulls up to `len` elements
    fn new(items: &'a [Value], len: usize) -> Self {
        Items {
            iter: items.iter(),
            pad: len.saturating_sub(items.len()),
        }
    }
}

impl<'de, 'a> SeqAccess<'de> for Items<'a> {
    type Error = Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Error> {
        match self.iter.next() {
            Some(v) => seed.deserialize(Decoder(v)).map(Some),
            None if self.pad > 0 => {
                self.pad -= 1;
                seed.deserialize(Decoder(&NULL)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len() + self.pad)
    }
}

struct Entries<'a> {
    iter: Option<map::Iter<'a, String, Value>>,
    value: &'a Value,
}

impl<'a> Entries<'a> {
    fn new(map: Option<&'a Map>) -> Self {
        Entries {
            iter: map.map(|m| m.iter()),
            value: &NULL,
        }
    }
}

impl<'de, 'a> MapAccess<'de> for Entries<'a> {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>, Error> {
        let Some((k, v)) = self.iter.as_mut().and_then(Iterator::next) else {
            return Ok(None);
        };

        // keys are coerced too, so maps keyed by integers decode
        self.value = v;
        let key = Value::Str(k.clone());
        seed.deserialize(Decoder(&key)).map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Error> {
        seed.deserialize(Decoder(std::mem::replace(&mut self.value, &NULL)))
    }

    fn size_hint(&self) -> Option<usize> {
        self.iter.as_ref().map(|i| i.len())
    }
}

struct Fields<'a> {
    map: Option<&'a Map>,
    fields: slice::Iter<'static, &'static str>,
    value: &'a Value,
}

impl<'de, 'a> MapAccess<'de> for Fields<'a> {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>, Error> {
        let Some(&name) = self.fields.next() else {
            return Ok(None);
        };

        self.value = self.map.map_or(&NULL, |m| lookup(m, name));
        let key: StrDeserializer<'_, Error> = name.into_deserializer();
        seed.deserialize(key).map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Error> {
        seed.deserialize(Decoder(std::mem::replace(&mut self.value, &NULL)))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.fields.len())
    }
}

/// Find a field's key, preferring an exact match over a case-insensitive one
fn lookup<'a>(map: &'a Map, name: &str) -> &'a Value {
    map.get(name)
        .or_else(|| {
            map.iter()
                .find(|(k, _)| fold_eq(k, name))
                .map(|(_, v)| v)
        })
        .unwrap_or(&NULL)
}

fn fold_eq(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

struct Variant<'a> {
    name: &'a str,
    value: &'a Value,
}

impl<'de, 'a> EnumAccess<'de> for Variant<'a> {
    type Error = Error;
    type Variant = Decoder<'a>;

    fn variant_seed<S: DeserializeSeed<'de>>(self, seed: S) -> Result<(S::Value, Decoder<'a>), Error> {
        let key: StrDeserializer<'_, Error> = self.name.into_deserializer();
        Ok((seed.deserialize(key)?, Decoder(self.value)))
    }
}

impl<'de, 'a> VariantAccess<'de> for Decoder<'a> {
    type Error = Error;

    fn unit_variant(self) -> Result<(), Error> {
        Ok(())
    }

    fn newtype_variant_seed<S: DeserializeSeed<'de>>(self, seed: S) -> Result<S::Value, Error> {
        seed.deserialize(self)
    }

    fn tuple_variant<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_tuple(len, visitor)
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.deserialize_struct("", fields, visitor)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::value::Opaque;

    fn decode<T: DeserializeOwned>(json: serde_json::Value) -> Result<T, Error> {
        from_value(&Value::from(json))
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Flags {
        name: String,
        count: u32,
        ratio: f32,
        on: bool,
        initial: char,
        tags: Vec<String>,
        note: Option<String>,
    }

    #[test]
    fn leaves_are_coerced() {
        let flags: Flags = decode(json!({
            "name": 12,
            "count": "3",
            "ratio": "0.5",
            "on": "1",
            "initial": "x",
            "tags": [1, "b", true],
            "note": "hi"
        }))
        .unwrap();

        assert_eq!(
            flags,
            Flags {
                name: "12".into(),
                count: 3,
                ratio: 0.5,
                on: true,
                initial: 'x',
                tags: vec!["1".into(), "b".into(), "true".into()],
                note: Some("hi".into()),
            }
        );
    }

    #[test]
    fn missing_and_null_fields_are_zero() {
        let flags: Flags = decode(json!({"name": null, "extra": 1})).unwrap();
        assert_eq!(flags, Flags::default());
    }

    #[test]
    fn keys_match_ignoring_case() {
        let flags: Flags = decode(json!({"NAME": "upper", "Count": 2})).unwrap();
        assert_eq!(flags.name, "upper");
        assert_eq!(flags.count, 2);

        let flags: Flags = decode(json!({"NAME": "upper", "name": "exact"})).unwrap();
        assert_eq!(flags.name, "exact");
    }

    #[test]
    fn renamed_fields_use_declared_keys() {
        #[derive(Debug, Deserialize)]
        struct Renamed {
            #[serde(rename = "userName")]
            user_name: String,
        }

        let r: Renamed = decode(json!({"username": "a"})).unwrap();
        assert_eq!(r.user_name, "a");
    }

    #[test]
    fn shapes_that_do_not_match_are_empty() {
        let flags: Flags = decode(json!({"tags": "one", "name": {"a": 1}})).unwrap();
        assert!(flags.tags.is_empty());
        assert_eq!(flags.name, r#"{"a":1}"#);

        let nested: BTreeMap<String, Flags> = decode(json!({"a": [1, 2]})).unwrap();
        assert_eq!(nested["a"], Flags::default());
    }

    #[test]
    fn maps_coerce_keys() {
        let m: BTreeMap<i32, String> = decode(json!({"1": "a", "20": 3})).unwrap();
        assert_eq!(m.get(&20).map(String::as_str), Some("3"));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn tuples_pad_with_zero() {
        let t: (i32, String, bool) = decode(json!(["7"])).unwrap();
        assert_eq!(t, (7, String::new(), false));
    }

    #[derive(Debug, PartialEq, Deserialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Rect { w: u32, h: u32 },
        Pair(i32, i32),
    }

    #[test]
    fn enums_from_names_and_single_entry_maps() {
        assert_eq!(decode::<Shape>(json!("Empty")).unwrap(), Shape::Empty);
        assert_eq!(decode::<Shape>(json!({"Circle": "1.5"})).unwrap(), Shape::Circle(1.5));
        assert_eq!(
            decode::<Shape>(json!({"Rect": {"w": 2, "h": "3"}})).unwrap(),
            Shape::Rect { w: 2, h: 3 }
        );
        assert_eq!(decode::<Shape>(json!({"Pair": [1]})).unwrap(), Shape::Pair(1, 0));
    }

    #[test]
    fn enum_names_match_ignoring_case() {
        assert_eq!(decode::<Shape>(json!("circle")).unwrap(), Shape::Circle(0.0));
        assert_eq!(decode::<Shape>(json!({"pair": ["4", 5]})).unwrap(), Shape::Pair(4, 5));
    }

    #[test]
    fn enums_without_a_variant_read_as_the_first() {
        assert_eq!(decode::<Shape>(json!("Square")).unwrap(), Shape::Empty);
        assert_eq!(decode::<Shape>(json!(3)).unwrap(), Shape::Empty);
        assert_eq!(decode::<Shape>(json!({"Empty": 1, "Circle": 2})).unwrap(), Shape::Empty);

        #[derive(Debug, PartialEq, Deserialize)]
        enum Tag {
            Code(u32),
            Name(String),
        }

        assert_eq!(decode::<Tag>(json!({"Label": "x"})).unwrap(), Tag::Code(0));
        assert_eq!(decode::<Tag>(json!({"name": 7})).unwrap(), Tag::Name("7".into()));
    }

    #[test]
    fn dynamic_fields_keep_values() {
        #[derive(Debug, Deserialize)]
        struct Envelope {
            kind: String,
            body: Value,
        }

        let e: Envelope = decode(json!({"kind": "k", "body": {"x": [1, 2.5]}})).unwrap();
        assert_eq!(e.kind, "k");
        assert_eq!(e.body, Value::from(json!({"x": [1, 2.5]})));

        let v = Value::from_iter([("kind", Value::from("k")), ("body", Value::Other(Opaque::new(1)))]);
        let e: Envelope = from_value(&v).unwrap();
        assert_eq!(e.kind, "k");
        assert_eq!(e.body, Value::Null);
    }

    #[test]
    fn wide_unsigned_fields() {
        #[derive(Debug, Deserialize)]
        struct Counters {
            total: u64,
            wide: u128,
            signed: i128,
        }

        let c: Counters = decode(json!({
            "total": "18446744073709551615",
            "wide": 18446744073709551615_u64,
            "signed": 18446744073709551615_u64
        }))
        .unwrap();
        assert_eq!(c.total, u64::MAX);
        assert_eq!(c.wide, u128::from(u64::MAX));
        assert_eq!(c.signed, i128::from(u64::MAX));
    }
}
