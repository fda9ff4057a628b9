//! Serde support for tag trees.
//!
//! This module integrates the tag value model with the serde ecosystem,
//! allowing conversion between Rust structs and tag trees.
//!
//! **Note**: This module is only available when the `serde` feature is
//! enabled (it is part of the default feature set).
//!
//! # Usage
//!
//! ```rust
//! use nbt_tree::{to_tag, from_tag};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Player {
//!     name: String,
//!     level: u32,
//! }
//!
//! let player = Player { name: "Zed".to_string(), level: 9 };
//!
//! let tag_value = to_tag(&player).unwrap();
//! let recovered: Player = from_tag(tag_value).unwrap();
//! ```
//!
//! # Type Mapping
//!
//! - Rust `Option<T>` maps to either `Tag::End` or the contained value
//! - Rust `Vec<T>` maps to `Tag::List` (element kinds must agree)
//! - Rust maps and structs map to `Tag::Compound`
//! - `bool` maps to `Tag::Byte` (`0`/`1`); on the way back out of
//!   [`from_tag`], bytes `0` and `1` convert as booleans
//! - integers map to `Tag::Int` when they fit, `Tag::Long` otherwise
//!
//! # Reserved Keys
//!
//! The three array kinds have no serde-native form that preserves their
//! kind, so they are encoded as single-entry maps with reserved keys:
//! - `ByteArray` -> `{"__nbt_byte_array": [bytes]}`
//! - `IntArray` -> `{"__nbt_int_array": [ints]}`
//! - `LongArray` -> `{"__nbt_long_array": [longs]}`

use serde::{
  de::{self, MapAccess, SeqAccess, Visitor},
  ser::{SerializeMap, SerializeSeq},
  Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{CompoundTag, ListTag, Tag};

impl Serialize for Tag {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Tag::End => serializer.serialize_unit(),
      Tag::Byte(v) => serializer.serialize_i8(*v),
      Tag::Short(v) => serializer.serialize_i16(*v),
      Tag::Int(v) => serializer.serialize_i32(*v),
      Tag::Long(v) => serializer.serialize_i64(*v),
      Tag::Float(v) => serializer.serialize_f32(*v),
      Tag::Double(v) => serializer.serialize_f64(*v),
      Tag::String(s) => serializer.serialize_str(s),
      Tag::ByteArray(xs) => {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("__nbt_byte_array", xs)?;
        map.end()
      }
      Tag::IntArray(xs) => {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("__nbt_int_array", xs)?;
        map.end()
      }
      Tag::LongArray(xs) => {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("__nbt_long_array", xs)?;
        map.end()
      }
      Tag::List(xs) => {
        let mut seq = serializer.serialize_seq(Some(xs.len()))?;
        for item in xs.iter() {
          seq.serialize_element(item)?;
        }
        seq.end()
      }
      Tag::Compound(xs) => {
        let mut ser_map = serializer.serialize_map(Some(xs.len()))?;
        for (k, v) in xs.iter() {
          ser_map.serialize_entry(k.as_ref(), v)?;
        }
        ser_map.end()
      }
    }
  }
}

impl<'de> Deserialize<'de> for Tag {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct TagVisitor;

    impl<'de> Visitor<'de> for TagVisitor {
      type Value = Tag;

      fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("any valid tag value")
      }

      fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        Ok(Tag::Byte(value as i8))
      }

      fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        match i32::try_from(value) {
          Ok(v) => Ok(Tag::Int(v)),
          Err(_) => Ok(Tag::Long(value)),
        }
      }

      fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        if let Ok(v) = i32::try_from(value) {
          Ok(Tag::Int(v))
        } else if let Ok(v) = i64::try_from(value) {
          Ok(Tag::Long(v))
        } else {
          Err(de::Error::custom(format!("integer out of range: {value}")))
        }
      }

      fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        Ok(Tag::Double(value))
      }

      fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        Ok(Tag::String(value.into()))
      }

      fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        Ok(Tag::String(value.into()))
      }

      fn visit_unit<E>(self) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        Ok(Tag::End)
      }

      fn visit_none<E>(self) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        Ok(Tag::End)
      }

      fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
      where
        D: Deserializer<'de>,
      {
        Tag::deserialize(deserializer)
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
      where
        A: SeqAccess<'de>,
      {
        let mut elements = Vec::new();
        while let Some(value) = seq.next_element()? {
          elements.push(value);
        }
        ListTag::from_vec(elements)
          .map(Tag::List)
          .map_err(de::Error::custom)
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut compound = CompoundTag::new();
        let mut special: Option<Tag> = None;

        while let Some(key) = map.next_key::<String>()? {
          match key.as_str() {
            "__nbt_byte_array" => {
              let xs: Vec<i8> = map.next_value()?;
              special = Some(Tag::ByteArray(xs));
            }
            "__nbt_int_array" => {
              let xs: Vec<i32> = map.next_value()?;
              special = Some(Tag::IntArray(xs));
            }
            "__nbt_long_array" => {
              let xs: Vec<i64> = map.next_value()?;
              special = Some(Tag::LongArray(xs));
            }
            _ => {
              let value: Tag = map.next_value()?;
              compound.set(key, value);
            }
          }
        }

        match special {
          Some(tag) if compound.is_empty() => Ok(tag),
          Some(_) => Err(de::Error::custom(
            "reserved __nbt_ key mixed with plain entries",
          )),
          None => Ok(Tag::Compound(compound)),
        }
      }
    }

    deserializer.deserialize_any(TagVisitor)
  }
}

/// Convert a `T` where `T` implements `Serialize` to a [`Tag`].
///
/// This is similar to `serde_json::to_value`. Sequences with mixed
/// element kinds are rejected, since a list binds to a single kind.
pub fn to_tag<T>(value: T) -> Result<Tag, String>
where
  T: Serialize,
{
  // bridge through serde_json::Value, then convert to a tag tree
  let json_value = serde_json::to_value(value).map_err(|e| e.to_string())?;
  json_value_to_tag(json_value)
}

/// Convert a [`Tag`] to a `T` where `T` implements `Deserialize`.
///
/// This is similar to `serde_json::from_value`.
pub fn from_tag<T>(value: Tag) -> Result<T, String>
where
  T: for<'de> Deserialize<'de>,
{
  let json_value = tag_to_json_value(value)?;
  serde_json::from_value(json_value).map_err(|e| e.to_string())
}

fn json_value_to_tag(value: serde_json::Value) -> Result<Tag, String> {
  match value {
    serde_json::Value::Null => Ok(Tag::End),
    serde_json::Value::Bool(b) => Ok(Tag::Byte(b as i8)),
    serde_json::Value::Number(n) => {
      if let Some(i) = n.as_i64() {
        match i32::try_from(i) {
          Ok(v) => Ok(Tag::Int(v)),
          Err(_) => Ok(Tag::Long(i)),
        }
      } else if let Some(f) = n.as_f64() {
        Ok(Tag::Double(f))
      } else {
        Err("invalid number format".to_string())
      }
    }
    serde_json::Value::String(s) => Ok(Tag::String(s.into())),
    serde_json::Value::Array(arr) => {
      let mut elements = Vec::with_capacity(arr.len());
      for item in arr {
        elements.push(json_value_to_tag(item)?);
      }
      ListTag::from_vec(elements)
        .map(Tag::List)
        .map_err(|e| e.to_string())
    }
    serde_json::Value::Object(obj) => {
      let mut compound = CompoundTag::new();
      for (k, v) in obj {
        compound.set(k, json_value_to_tag(v)?);
      }
      Ok(Tag::Compound(compound))
    }
  }
}

fn tag_to_json_value(value: Tag) -> Result<serde_json::Value, String> {
  match value {
    Tag::End => Ok(serde_json::Value::Null),
    // bytes 0 and 1 come back as booleans, matching the byte encoding
    // of `bool` on the way in; other byte values stay numeric
    Tag::Byte(0) => Ok(serde_json::Value::Bool(false)),
    Tag::Byte(1) => Ok(serde_json::Value::Bool(true)),
    Tag::Byte(v) => Ok(serde_json::Value::Number(v.into())),
    Tag::Short(v) => Ok(serde_json::Value::Number(v.into())),
    Tag::Int(v) => Ok(serde_json::Value::Number(v.into())),
    Tag::Long(v) => Ok(serde_json::Value::Number(v.into())),
    Tag::Float(v) => serde_json::Number::from_f64(v as f64)
      .map(serde_json::Value::Number)
      .ok_or_else(|| "invalid number".to_string()),
    Tag::Double(v) => serde_json::Number::from_f64(v)
      .map(serde_json::Value::Number)
      .ok_or_else(|| "invalid number".to_string()),
    Tag::String(s) => Ok(serde_json::Value::String((*s).to_string())),
    Tag::ByteArray(xs) => Ok(serde_json::Value::Array(
      xs.into_iter()
        .map(|v| serde_json::Value::Number(v.into()))
        .collect(),
    )),
    Tag::IntArray(xs) => Ok(serde_json::Value::Array(
      xs.into_iter()
        .map(|v| serde_json::Value::Number(v.into()))
        .collect(),
    )),
    Tag::LongArray(xs) => Ok(serde_json::Value::Array(
      xs.into_iter()
        .map(|v| serde_json::Value::Number(v.into()))
        .collect(),
    )),
    Tag::List(xs) => {
      let mut json_array = Vec::with_capacity(xs.len());
      for item in xs {
        json_array.push(tag_to_json_value(item)?);
      }
      Ok(serde_json::Value::Array(json_array))
    }
    Tag::Compound(xs) => {
      let mut json_obj = serde_json::Map::new();
      for (k, v) in xs {
        json_obj.insert((*k).to_string(), tag_to_json_value(v)?);
      }
      Ok(serde_json::Value::Object(json_obj))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::{Deserialize, Serialize};
  use std::collections::HashMap;

  #[derive(Debug, Serialize, Deserialize, PartialEq)]
  struct TestStruct {
    name: String,
    level: u32,
    online: bool,
    scores: Vec<f64>,
    metadata: HashMap<String, String>,
    home: Option<String>,
  }

  #[test]
  fn test_to_tag() {
    let test_data = TestStruct {
      name: "Zed".to_string(),
      level: 30,
      online: true,
      scores: vec![85.5, 92.0, 78.5],
      metadata: [("role".to_string(), "admin".to_string())].into_iter().collect(),
      home: None,
    };

    let tag_value = to_tag(&test_data).unwrap();

    if let Tag::Compound(compound) = tag_value {
      assert!(compound.contains_key("name"));
      assert_eq!(compound.get_str("name"), Some("Zed"));
      assert_eq!(compound.get_int("level"), Some(30));
      assert_eq!(compound.get_byte("online"), Some(1));
    } else {
      panic!("expected Tag::Compound");
    }
  }

  #[test]
  fn test_from_tag() {
    let tag_value = Tag::compound_from_iter([
      ("name", Tag::string("Ada")),
      ("level", Tag::Int(25)),
      ("online", Tag::Byte(0)),
      (
        "scores",
        Tag::list_from_iter([Tag::Double(90.0), Tag::Double(88.5)]).unwrap(),
      ),
      (
        "metadata",
        Tag::compound_from_iter([("role", Tag::string("user"))]),
      ),
      ("home", Tag::End),
    ]);

    let result: Result<TestStruct, _> = from_tag(tag_value);
    let test_struct = result.unwrap();
    assert_eq!(test_struct.name, "Ada");
    assert_eq!(test_struct.level, 25);
    assert!(!test_struct.online);
    assert_eq!(test_struct.home, None);
  }

  #[test]
  fn test_round_trip() {
    let original = TestStruct {
      name: "Hob".to_string(),
      level: 35,
      online: true,
      scores: vec![95.0, 87.5, 91.0],
      metadata: [("department".to_string(), "redstone".to_string())]
        .into_iter()
        .collect(),
      home: Some("spawn".to_string()),
    };

    let tag_value = to_tag(&original).unwrap();
    let reconstructed: TestStruct = from_tag(tag_value).unwrap();

    assert_eq!(original, reconstructed);
  }

  #[test]
  fn test_mixed_sequence_rejected() {
    let json_value = serde_json::json!(["one", 2]);
    let result = json_value_to_tag(json_value);
    assert!(result.is_err());
  }

  #[test]
  fn test_array_reserved_keys() {
    let tag_value = Tag::IntArray(vec![1, 2, 3]);
    let text = serde_json::to_string(&tag_value).unwrap();
    assert_eq!(text, "{\"__nbt_int_array\":[1,2,3]}");

    let back: Tag = serde_json::from_str(&text).unwrap();
    assert_eq!(back, Tag::IntArray(vec![1, 2, 3]));
  }
}
