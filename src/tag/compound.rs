use std::{
  collections::{hash_map, HashMap},
  hash::{Hash, Hasher},
  sync::Arc,
};

use crate::kind::TagKind;
use crate::tag::{ListTag, Tag};

/// A mapping from string keys to tag values.
///
/// Keys are unique and iteration order carries no meaning. The backing
/// map is never handed out mutably: [`all`](CompoundTag::all) is a
/// read-only view, and entries change only through
/// [`set`](CompoundTag::set) and [`remove`](CompoundTag::remove).
/// A compound imposes no kind rule; entries of any kind may sit side by
/// side, so every operation here is total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundTag {
  entries: HashMap<Arc<str>, Tag>,
}

impl CompoundTag {
  pub fn new() -> Self {
    CompoundTag {
      entries: HashMap::new(),
    }
  }

  /// get reference of the entry value, or `None` when absent
  pub fn get(&self, key: &str) -> Option<&Tag> {
    self.entries.get(key)
  }

  /// mutable borrow of the entry value, for editing nested containers
  /// in place (the entry keeps its key; list invariants are enforced by
  /// the list itself)
  pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
    self.entries.get_mut(key)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  /// whether some entry value structurally equals `tag`
  pub fn contains(&self, tag: &Tag) -> bool {
    self.entries.values().any(|v| v == tag)
  }

  /// insert or replace the entry at `key`
  pub fn set(&mut self, key: impl Into<Arc<str>>, tag: Tag) {
    self.entries.insert(key.into(), tag);
  }

  /// remove the entry at `key`; an absent key is not an error
  pub fn remove(&mut self, key: &str) -> Option<Tag> {
    self.entries.remove(key)
  }

  /// read-only view of the full mapping
  pub fn all(&self) -> &HashMap<Arc<str>, Tag> {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> hash_map::Iter<'_, Arc<str>, Tag> {
    self.entries.iter()
  }

  pub fn keys(&self) -> hash_map::Keys<'_, Arc<str>, Tag> {
    self.entries.keys()
  }

  pub fn values(&self) -> hash_map::Values<'_, Arc<str>, Tag> {
    self.entries.values()
  }

  /// whether the entry at `key` exists and has exactly the given kind
  pub fn has_key_of_type(&self, key: &str, kind: TagKind) -> bool {
    self.get(key).map(Tag::kind) == Some(kind)
  }

  /// whether the entry at `key` holds a number of any width
  pub fn has_number(&self, key: &str) -> bool {
    self.get(key).is_some_and(|tag| tag.kind().is_number())
  }

  pub fn get_byte(&self, key: &str) -> Option<i8> {
    self.get(key).and_then(Tag::as_byte)
  }

  pub fn get_short(&self, key: &str) -> Option<i16> {
    self.get(key).and_then(Tag::as_short)
  }

  pub fn get_int(&self, key: &str) -> Option<i32> {
    self.get(key).and_then(Tag::as_int)
  }

  pub fn get_long(&self, key: &str) -> Option<i64> {
    self.get(key).and_then(Tag::as_long)
  }

  pub fn get_float(&self, key: &str) -> Option<f32> {
    self.get(key).and_then(Tag::as_float)
  }

  pub fn get_double(&self, key: &str) -> Option<f64> {
    self.get(key).and_then(Tag::as_double)
  }

  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(Tag::as_str)
  }

  pub fn get_byte_array(&self, key: &str) -> Option<&[i8]> {
    self.get(key).and_then(Tag::as_byte_array)
  }

  pub fn get_int_array(&self, key: &str) -> Option<&[i32]> {
    self.get(key).and_then(Tag::as_int_array)
  }

  pub fn get_long_array(&self, key: &str) -> Option<&[i64]> {
    self.get(key).and_then(Tag::as_long_array)
  }

  pub fn get_list(&self, key: &str) -> Option<&ListTag> {
    self.get(key).and_then(Tag::as_list)
  }

  /// list getter filtered by element kind
  pub fn get_list_of(&self, key: &str, kind: TagKind) -> Option<&ListTag> {
    self.get_list(key).filter(|list| list.element_kind() == kind)
  }

  pub fn get_compound(&self, key: &str) -> Option<&CompoundTag> {
    self.get(key).and_then(Tag::as_compound)
  }
}

impl Hash for CompoundTag {
  fn hash<H>(&self, _state: &mut H)
  where
    H: Hasher,
  {
    // entries hash in sorted-key order so insertion order cannot leak
    // into the hash
    let mut entries: Vec<_> = self.entries.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (k, v) in entries {
      k.hash(_state);
      v.hash(_state);
    }
  }
}

impl<K> FromIterator<(K, Tag)> for CompoundTag
where
  K: Into<Arc<str>>,
{
  fn from_iter<T: IntoIterator<Item = (K, Tag)>>(pairs: T) -> Self {
    CompoundTag {
      entries: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    }
  }
}

impl IntoIterator for CompoundTag {
  type Item = (Arc<str>, Tag);
  type IntoIter = hash_map::IntoIter<Arc<str>, Tag>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl<'a> IntoIterator for &'a CompoundTag {
  type Item = (&'a Arc<str>, &'a Tag);
  type IntoIter = hash_map::Iter<'a, Arc<str>, Tag>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

impl From<HashMap<Arc<str>, Tag>> for CompoundTag {
  fn from(entries: HashMap<Arc<str>, Tag>) -> CompoundTag {
    CompoundTag { entries }
  }
}

impl From<CompoundTag> for HashMap<Arc<str>, Tag> {
  fn from(x: CompoundTag) -> HashMap<Arc<str>, Tag> {
    x.entries
  }
}

impl TryFrom<Tag> for CompoundTag {
  type Error = String;
  fn try_from(value: Tag) -> Result<Self, Self::Error> {
    match value {
      Tag::Compound(xs) => Ok(xs),
      a => Err(format!("failed to convert to compound: {a}")),
    }
  }
}

impl From<CompoundTag> for Tag {
  fn from(x: CompoundTag) -> Tag {
    Tag::Compound(x)
  }
}
