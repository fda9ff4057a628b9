//! Kind discriminators for tag values.
//!
//! Every [`Tag`](crate::Tag) reports exactly one [`TagKind`]. The set is
//! closed, so consumers match exhaustively instead of downcasting; adding
//! a concrete tag kind means adding exactly one variant here.

use std::fmt;

/// The closed set of concrete kinds a tag value can have.
///
/// Discriminants follow the classic NBT numbering. `End` doubles as the
/// "unbound" marker for lists that have not received an element yet and
/// is never storable as a list element itself.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TagKind {
  End = 0,
  Byte = 1,
  Short = 2,
  Int = 3,
  Long = 4,
  Float = 5,
  Double = 6,
  ByteArray = 7,
  String = 8,
  List = 9,
  Compound = 10,
  IntArray = 11,
  LongArray = 12,
}

impl TagKind {
  /// Stable numeric identifier of the kind.
  pub const fn id(self) -> u8 {
    self as u8
  }

  /// Reverse lookup by numeric identifier.
  pub const fn from_id(id: u8) -> Option<TagKind> {
    match id {
      0 => Some(TagKind::End),
      1 => Some(TagKind::Byte),
      2 => Some(TagKind::Short),
      3 => Some(TagKind::Int),
      4 => Some(TagKind::Long),
      5 => Some(TagKind::Float),
      6 => Some(TagKind::Double),
      7 => Some(TagKind::ByteArray),
      8 => Some(TagKind::String),
      9 => Some(TagKind::List),
      10 => Some(TagKind::Compound),
      11 => Some(TagKind::IntArray),
      12 => Some(TagKind::LongArray),
      _ => None,
    }
  }

  pub const fn is_number(self) -> bool {
    matches!(
      self,
      Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
    )
  }

  pub const fn is_array(self) -> bool {
    matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
  }

  pub const fn is_composite(self) -> bool {
    matches!(self, Self::List | Self::Compound)
  }

  /// Lower-case name used in rendered values and error messages.
  pub const fn name(self) -> &'static str {
    match self {
      TagKind::End => "end",
      TagKind::Byte => "byte",
      TagKind::Short => "short",
      TagKind::Int => "int",
      TagKind::Long => "long",
      TagKind::Float => "float",
      TagKind::Double => "double",
      TagKind::ByteArray => "byte-array",
      TagKind::String => "string",
      TagKind::List => "list",
      TagKind::Compound => "compound",
      TagKind::IntArray => "int-array",
      TagKind::LongArray => "long-array",
    }
  }
}

impl fmt::Display for TagKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
