//! # nbt_tree
//!
//! In-memory NBT (Named Binary Tag) value trees.
//!
//! This crate provides the dynamically-typed, heterogeneous nested data
//! model used for structured game/server state: scalar values, keyed
//! compounds, and ordered homogeneous lists, all addressable through a
//! single [`Tag`] sum type. There is no wire format here; the crate is
//! the value model only.
//!
//! ## Features
//!
//! - **Closed kind set**: every value reports a [`TagKind`]; consumers
//!   match exhaustively instead of downcasting
//! - **Homogeneous lists**: a [`ListTag`] lazily binds to the kind of
//!   its first element and rejects mismatches with structured errors
//! - **Copy-on-write edits**: list mutations rebuild the sequence and
//!   swap it in wholesale, never patching elements in place
//! - **Structural equality**: equal trees hash equal, regardless of
//!   compound insertion order
//! - **Serde integration**: optional conversion between Rust structs
//!   and tag trees (feature `serde`, on by default)
//!
//! ## Basic Usage
//!
//! ```rust
//! use nbt_tree::{CompoundTag, ListTag, Tag, TagKind};
//!
//! let mut names = ListTag::new();
//! names.add(Tag::string("Zed")).unwrap();
//! names.add(Tag::string("Ada")).unwrap();
//! assert_eq!(names.element_kind(), TagKind::String);
//!
//! let mut root = CompoundTag::new();
//! root.set("names", Tag::List(names));
//! root.set("seed", Tag::Long(42));
//!
//! assert_eq!(root.get_long("seed"), Some(42));
//! assert_eq!(root.get_list("names").map(|xs| xs.len()), Some(2));
//! ```
//!
//! ## List Binding
//!
//! A list created empty is unbound; the first insertion decides the
//! element kind for the rest of its life:
//!
//! ```rust
//! use nbt_tree::{ListTag, Tag, TagKind};
//!
//! let mut xs = ListTag::new();
//! assert_eq!(xs.element_kind(), TagKind::End);
//!
//! xs.add(Tag::Int(1)).unwrap();
//! assert_eq!(xs.element_kind(), TagKind::Int);
//!
//! // a mismatched insertion is rejected and the list is untouched
//! assert!(xs.add(Tag::string("two")).is_err());
//! assert_eq!(xs.len(), 1);
//! ```

mod error;
mod kind;
mod tag;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use error::{TagError, TagResult};
pub use kind::TagKind;
pub use tag::{is_simple_char, CompoundTag, ListTag, Tag};

#[cfg(feature = "serde")]
pub use serde_support::{from_tag, to_tag};

// Common constants for convenience
impl Tag {
  /// Predefined end constant for convenience
  pub const END: Tag = Tag::End;
}
