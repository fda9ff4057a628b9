use std::{
  hash::{Hash, Hasher},
  slice, vec,
};

use crate::error::{TagError, TagResult};
use crate::kind::TagKind;
use crate::tag::{CompoundTag, Tag};

/// An ordered sequence of tags sharing a single element kind.
///
/// The element kind starts out as `End` ("unbound") and is bound by the
/// first value ever stored; once bound it never widens, and mismatched
/// insertions are rejected without touching the sequence. Every edit
/// rebuilds the backing vector and swaps it in wholesale, so a view
/// taken before the edit never observes a half-applied change.
#[derive(Debug, Clone)]
pub struct ListTag {
  elements: Vec<Tag>,
  element_kind: TagKind,
}

impl ListTag {
  /// empty list, element kind still unbound
  pub fn new() -> Self {
    ListTag {
      elements: Vec::new(),
      element_kind: TagKind::End,
    }
  }

  /// Build a list from a pre-filled sequence, binding the element kind
  /// to the first element's kind. Rejects `End`-kind elements and mixed
  /// kinds, so a list cannot start life in violation of its own rule.
  pub fn from_vec(elements: Vec<Tag>) -> TagResult<Self> {
    let element_kind = match elements.first() {
      Some(tag) => tag.kind(),
      None => TagKind::End,
    };
    for tag in &elements {
      if tag.kind() == TagKind::End || tag.kind() != element_kind {
        return Err(TagError::InvalidElementKind {
          list: element_kind,
          element: tag.kind(),
        });
      }
    }
    Ok(ListTag {
      elements,
      element_kind,
    })
  }

  /// Kind shared by every element; `End` while the list is unbound.
  /// Draining the list does not reset it.
  pub fn element_kind(&self) -> TagKind {
    self.element_kind
  }

  /// Append `tag`, binding the element kind on the first insertion.
  pub fn add(&mut self, tag: Tag) -> TagResult<()> {
    self.check_element(&tag)?;
    let kind = tag.kind();
    self.edit(move |xs| xs.push(tag), kind);
    Ok(())
  }

  /// Replace the element at `index` with `tag`.
  pub fn set(&mut self, index: usize, tag: Tag) -> TagResult<()> {
    self.check_element(&tag)?;
    if index >= self.elements.len() {
      return Err(TagError::IndexOutOfRange {
        index,
        len: self.elements.len(),
      });
    }
    let kind = tag.kind();
    self.edit(move |xs| xs[index] = tag, kind);
    Ok(())
  }

  /// Remove and return the element at `index`. The element kind stays
  /// bound even when this empties the list.
  pub fn remove(&mut self, index: usize) -> TagResult<Tag> {
    if index >= self.elements.len() {
      return Err(TagError::IndexOutOfRange {
        index,
        len: self.elements.len(),
      });
    }
    let mut next = self.elements.clone();
    let removed = next.remove(index);
    self.elements = next;
    Ok(removed)
  }

  /// get reference of element
  pub fn get(&self, index: usize) -> Option<&Tag> {
    self.elements.get(index)
  }

  /// whether some element structurally equals `tag`
  pub fn contains(&self, tag: &Tag) -> bool {
    self.elements.contains(tag)
  }

  /// immutable ordered view of the current sequence
  pub fn all(&self) -> &[Tag] {
    &self.elements
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, Tag> {
    self.elements.iter()
  }

  pub fn get_byte(&self, index: usize) -> Option<i8> {
    self.get(index).and_then(Tag::as_byte)
  }

  pub fn get_short(&self, index: usize) -> Option<i16> {
    self.get(index).and_then(Tag::as_short)
  }

  pub fn get_int(&self, index: usize) -> Option<i32> {
    self.get(index).and_then(Tag::as_int)
  }

  pub fn get_long(&self, index: usize) -> Option<i64> {
    self.get(index).and_then(Tag::as_long)
  }

  pub fn get_float(&self, index: usize) -> Option<f32> {
    self.get(index).and_then(Tag::as_float)
  }

  pub fn get_double(&self, index: usize) -> Option<f64> {
    self.get(index).and_then(Tag::as_double)
  }

  pub fn get_str(&self, index: usize) -> Option<&str> {
    self.get(index).and_then(Tag::as_str)
  }

  pub fn get_byte_array(&self, index: usize) -> Option<&[i8]> {
    self.get(index).and_then(Tag::as_byte_array)
  }

  pub fn get_int_array(&self, index: usize) -> Option<&[i32]> {
    self.get(index).and_then(Tag::as_int_array)
  }

  pub fn get_long_array(&self, index: usize) -> Option<&[i64]> {
    self.get(index).and_then(Tag::as_long_array)
  }

  pub fn get_list(&self, index: usize) -> Option<&ListTag> {
    self.get(index).and_then(Tag::as_list)
  }

  pub fn get_compound(&self, index: usize) -> Option<&CompoundTag> {
    self.get(index).and_then(Tag::as_compound)
  }

  fn check_element(&self, tag: &Tag) -> TagResult<()> {
    let kind = tag.kind();
    if kind == TagKind::End || (self.element_kind != TagKind::End && kind != self.element_kind) {
      return Err(TagError::InvalidElementKind {
        list: self.element_kind,
        element: kind,
      });
    }
    Ok(())
  }

  /// copy-on-write edit: build a new sequence, apply, swap wholesale,
  /// then bind the element kind if it was still unbound
  fn edit(&mut self, apply: impl FnOnce(&mut Vec<Tag>), bind: TagKind) {
    let mut next = self.elements.clone();
    apply(&mut next);
    self.elements = next;
    if self.element_kind == TagKind::End {
      self.element_kind = bind;
    }
  }
}

impl Default for ListTag {
  fn default() -> Self {
    ListTag::new()
  }
}

impl Eq for ListTag {}

impl PartialEq for ListTag {
  fn eq(&self, other: &Self) -> bool {
    // the bound kind is derived data; the elements alone decide equality
    self.elements == other.elements
  }
}

impl Hash for ListTag {
  fn hash<H>(&self, _state: &mut H)
  where
    H: Hasher,
  {
    self.elements.hash(_state);
  }
}

impl IntoIterator for ListTag {
  type Item = Tag;
  type IntoIter = vec::IntoIter<Tag>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

impl<'a> IntoIterator for &'a ListTag {
  type Item = &'a Tag;
  type IntoIter = slice::Iter<'a, Tag>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}

impl TryFrom<Vec<Tag>> for ListTag {
  type Error = TagError;
  fn try_from(elements: Vec<Tag>) -> Result<Self, Self::Error> {
    ListTag::from_vec(elements)
  }
}

impl From<ListTag> for Vec<Tag> {
  fn from(x: ListTag) -> Vec<Tag> {
    x.elements
  }
}

impl TryFrom<Tag> for ListTag {
  type Error = String;
  fn try_from(value: Tag) -> Result<Self, Self::Error> {
    match value {
      Tag::List(xs) => Ok(xs),
      a => Err(format!("failed to convert to list: {a}")),
    }
  }
}

impl From<ListTag> for Tag {
  fn from(x: ListTag) -> Tag {
    Tag::List(x)
  }
}
