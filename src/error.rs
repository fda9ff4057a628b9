//! Error types for tag tree edits.
//!
//! Compound edits are total and never fail; the errors here are the ones
//! returned by the copy-on-write edit path of [`ListTag`](crate::ListTag).

use std::fmt;

use crate::kind::TagKind;

/// Errors that can occur while editing a list of tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
  /// A value could not be stored in a list: its kind is the reserved
  /// `End` sentinel, or the list is already bound to a different
  /// element kind.
  InvalidElementKind {
    /// Element kind the list is bound to (`End` while unbound)
    list: TagKind,
    /// Kind of the rejected value
    element: TagKind,
  },
  /// An index-addressed edit pointed past the end of the list.
  IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for TagError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TagError::InvalidElementKind { list, element } => {
        if *element == TagKind::End {
          write!(f, "cannot add an {element} value to a list")
        } else {
          write!(f, "element kind mismatch: list holds {list}, got {element}")
        }
      }
      TagError::IndexOutOfRange { index, len } => {
        write!(f, "index {index} out of range for list of length {len}")
      }
    }
  }
}

impl std::error::Error for TagError {}

/// Result type for list edits
pub type TagResult<T> = Result<T, TagError>;
