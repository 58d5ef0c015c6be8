use json_coerce_util::fold_eq;
use serde::de::{
    self, Deserialize, DeserializeSeed, Deserializer, EnumAccess, MapAccess, SeqAccess,
    Unexpected, VariantAccess, Visitor,
};
use serde::forward_to_deserialize_any;
use serde_json::{Error, Map, Value};

/// A [`Deserializer`] over a [`serde_json::Value`] applying the web preset.
///
/// Nested objects and arrays are wrapped again, so the preset holds at every
/// depth.
pub struct WebDeserializer {
    value: Value,
}

impl WebDeserializer {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

macro_rules! deserialize_integer {
    ($($method:ident => $ty:ty, $visit:ident;)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Error>
            where
                V: Visitor<'de>,
            {
                match self.value {
                    Value::String(text) => match text.parse::<$ty>() {
                        Ok(n) => visitor.$visit(n),
                        Err(_) => Err(de::Error::invalid_type(Unexpected::Str(&text), &visitor)),
                    },
                    other => other.$method(visitor),
                }
            }
        )*
    };
}

macro_rules! deserialize_float {
    ($($method:ident => $ty:ty, $visit:ident;)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Error>
            where
                V: Visitor<'de>,
            {
                match self.value {
                    Value::String(text) => match text.parse::<$ty>() {
                        Ok(n) if n.is_finite() => visitor.$visit(n),
                        _ => Err(de::Error::invalid_type(Unexpected::Str(&text), &visitor)),
                    },
                    other => other.$method(visitor),
                }
            }
        )*
    };
}

impl<'de> Deserializer<'de> for WebDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Array(items) => visitor.visit_seq(WebSeq::new(items)),
            Value::Object(map) => visitor.visit_map(WebMap::new(map, None)),
            other => other.deserialize_any(visitor),
        }
    }

    deserialize_integer! {
        deserialize_i8 => i8, visit_i8;
        deserialize_i16 => i16, visit_i16;
        deserialize_i32 => i32, visit_i32;
        deserialize_i64 => i64, visit_i64;
        deserialize_u8 => u8, visit_u8;
        deserialize_u16 => u16, visit_u16;
        deserialize_u32 => u32, visit_u32;
        deserialize_u64 => u64, visit_u64;
    }

    deserialize_float! {
        deserialize_f32 => f32, visit_f32;
        deserialize_f64 => f64, visit_f64;
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Object(map) => visitor.visit_map(WebMap::new(map, Some(fields))),
            Value::Array(items) => visitor.visit_seq(WebSeq::new(items)),
            other => other.deserialize_struct(name, fields, visitor),
        }
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(WebEnum {
                variant,
                value: None,
            }),
            Value::Object(map) if map.len() == 1 => {
                let mut iter = map.into_iter();
                match iter.next() {
                    Some((variant, value)) => visitor.visit_enum(WebEnum {
                        variant,
                        value: Some(value),
                    }),
                    None => Err(de::Error::invalid_length(0, &"map with a single key")),
                }
            }
            other => other.deserialize_enum(name, variants, visitor),
        }
    }

    forward_to_deserialize_any! {
        bool char str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map identifier ignored_any
    }
}

/// An externally tagged enum. The variant name is matched exactly; the payload
/// keeps the web preset.
struct WebEnum {
    variant: String,
    value: Option<Value>,
}

impl<'de> EnumAccess<'de> for WebEnum {
    type Error = Error;
    type Variant = WebVariant;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, WebVariant), Error>
    where
        V: DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Value::String(self.variant))?;
        Ok((variant, WebVariant { value: self.value }))
    }
}

struct WebVariant {
    value: Option<Value>,
}

impl<'de> VariantAccess<'de> for WebVariant {
    type Error = Error;

    fn unit_variant(self) -> Result<(), Error> {
        match self.value {
            Some(value) => <()>::deserialize(WebDeserializer::new(value)),
            None => Ok(()),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value, Error>
    where
        T: DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(WebDeserializer::new(value)),
            None => Err(de::Error::invalid_type(
                Unexpected::UnitVariant,
                &"newtype variant",
            )),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(value) => WebDeserializer::new(value).deserialize_seq(visitor),
            None => Err(de::Error::invalid_type(
                Unexpected::UnitVariant,
                &"tuple variant",
            )),
        }
    }

    fn struct_variant<V>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(value) => WebDeserializer::new(value).deserialize_struct("", fields, visitor),
            None => Err(de::Error::invalid_type(
                Unexpected::UnitVariant,
                &"struct variant",
            )),
        }
    }
}

struct WebSeq {
    iter: std::vec::IntoIter<Value>,
}

impl WebSeq {
    fn new(items: Vec<Value>) -> Self {
        Self {
            iter: items.into_iter(),
        }
    }
}

impl<'de> SeqAccess<'de> for WebSeq {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Error>
    where
        T: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(WebDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct WebMap {
    iter: serde_json::map::IntoIter,
    value: Option<Value>,
    fields: Option<&'static [&'static str]>,
}

impl WebMap {
    fn new(map: Map<String, Value>, fields: Option<&'static [&'static str]>) -> Self {
        Self {
            iter: map.into_iter(),
            value: None,
            fields,
        }
    }

    /// Rename `key` to the struct field it folds to, if any.
    fn bind(&self, key: String) -> String {
        let Some(fields) = self.fields else {
            return key;
        };
        if fields.contains(&key.as_str()) {
            return key;
        }
        match fields.iter().find(|field| fold_eq(&key, field)) {
            Some(field) => (*field).to_string(),
            None => key,
        }
    }
}

impl<'de> MapAccess<'de> for WebMap {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                let key = self.bind(key);
                seed.deserialize(WebDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Error>
    where
        V: DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(WebDeserializer::new(value)),
            None => Err(de::Error::custom("value is missing")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Inner {
        item_count: u8,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Outer {
        id: i64,
        inner: Inner,
        list: Vec<Inner>,
        note: Option<String>,
    }

    fn web<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, Error> {
        T::deserialize(WebDeserializer::new(value))
    }

    #[test]
    fn test_fields_fold_at_every_depth() {
        let out: Outer = web(json!({
            "ID": 1,
            "Inner": {"ItemCount": 2},
            "LIST": [{"itemCount": 3}, {"item_count": 4}],
        }))
        .unwrap();
        assert_eq!(
            out,
            Outer {
                id: 1,
                inner: Inner { item_count: 2 },
                list: vec![Inner { item_count: 3 }, Inner { item_count: 4 }],
                note: None,
            }
        );
    }

    #[test]
    fn test_exact_name_wins_over_folded() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Pair {
            a: u8,
            #[serde(rename = "A")]
            big_a: u8,
        }
        let out: Pair = web(json!({"a": 1, "A": 2})).unwrap();
        assert_eq!(out, Pair { a: 1, big_a: 2 });
    }

    #[test]
    fn test_numbers_from_strings() {
        let out: Vec<i32> = web(json!(["1", 2, "-3"])).unwrap();
        assert_eq!(out, vec![1, 2, -3]);
        let out: f64 = web(json!("2.5")).unwrap();
        assert_eq!(out, 2.5);
    }

    #[test]
    fn test_number_string_rejections() {
        assert!(web::<u8>(json!("300")).is_err());
        assert!(web::<f64>(json!("NaN")).is_err());
        assert!(web::<i32>(json!("1.5")).is_err());
    }

    #[test]
    fn test_map_keys_are_verbatim() {
        let out: HashMap<String, u8> = web(json!({"KeyOne": 1})).unwrap();
        assert_eq!(out.get("KeyOne"), Some(&1));
    }

    #[test]
    fn test_numeric_map_keys() {
        let out: HashMap<u32, bool> = web(json!({"7": true})).unwrap();
        assert_eq!(out.get(&7), Some(&true));
    }

    #[test]
    fn test_unit_enum() {
        #[derive(Debug, Deserialize, PartialEq)]
        enum Color {
            Red,
        }
        let out: Color = web(json!("Red")).unwrap();
        assert_eq!(out, Color::Red);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Session {
        user_name: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    enum Event {
        Login(Session),
        Logout { user_name: String },
        Retry(u8, u8),
        Wait(u32),
        Ping,
    }

    #[test]
    fn test_enum_payloads_keep_the_preset() {
        let out: Vec<Event> = web(json!([
            {"Login": {"userName": "ada"}},
            {"Logout": {"UserName": "ada"}},
            {"Retry": ["1", 2]},
            {"Wait": "30"},
            "Ping",
            {"Ping": null},
        ]))
        .unwrap();
        assert_eq!(
            out,
            vec![
                Event::Login(Session {
                    user_name: "ada".to_string()
                }),
                Event::Logout {
                    user_name: "ada".to_string()
                },
                Event::Retry(1, 2),
                Event::Wait(30),
                Event::Ping,
                Event::Ping,
            ]
        );
    }

    #[test]
    fn test_enum_variant_names_are_exact() {
        let err = web::<Event>(json!({"login": {"user_name": "ada"}})).unwrap_err();
        assert!(err.to_string().contains("unknown variant"), "{}", err);
    }

    #[test]
    fn test_enum_shape_errors() {
        assert!(web::<Event>(json!({"Ping": null, "Wait": 1})).is_err());
        assert!(web::<Event>(json!("Wait")).is_err());
        assert!(web::<Event>(json!(3)).is_err());
    }

    #[test]
    fn test_type_mismatch_is_serde_json_error() {
        let err = web::<Inner>(json!({"item_count": true})).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{}", err);
    }
}
