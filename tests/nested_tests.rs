use nbt_tree::{CompoundTag, ListTag, Tag, TagError, TagKind};

#[test]
fn nested_tree_roundtrip() {
  let mut tags = ListTag::new();
  tags.add(Tag::string("a")).unwrap();
  tags.add(Tag::string("b")).unwrap();

  let mut root = CompoundTag::new();
  root.set("name", Tag::string("Zed"));
  root.set("tags", Tag::List(tags));

  assert_eq!(root.len(), 2);
  let list = root.get_list("tags").unwrap();
  assert_eq!(list.all(), &[Tag::string("a"), Tag::string("b")][..]);
}

#[test]
fn rejected_edit_leaves_nested_entry_unchanged() {
  let mut root = CompoundTag::new();
  root.set("name", Tag::string("Zed"));
  root.set(
    "tags",
    Tag::list_from_iter([Tag::string("a"), Tag::string("b")]).unwrap(),
  );

  let err = root
    .get_mut("tags")
    .unwrap()
    .as_list_mut()
    .unwrap()
    .add(Tag::Int(3))
    .unwrap_err();
  assert_eq!(
    err,
    TagError::InvalidElementKind {
      list: TagKind::String,
      element: TagKind::Int,
    }
  );

  let list = root.get_list("tags").unwrap();
  assert_eq!(list.all(), &[Tag::string("a"), Tag::string("b")][..]);
  assert_eq!(list.element_kind(), TagKind::String);
}

#[test]
fn compounds_nest_to_any_depth() {
  let mut position = CompoundTag::new();
  position.set("x", Tag::Double(1.0));
  position.set("y", Tag::Double(64.0));
  position.set("z", Tag::Double(-3.5));

  let mut player = CompoundTag::new();
  player.set("name", Tag::string("Zed"));
  player.set("position", Tag::Compound(position));

  let mut root = CompoundTag::new();
  root.set("player", Tag::Compound(player));

  let y = root
    .get_compound("player")
    .and_then(|p| p.get_compound("position"))
    .and_then(|p| p.get_double("y"));
  assert_eq!(y, Some(64.0));
}

#[test]
fn nested_mutation_through_compound_chain() {
  let mut root = CompoundTag::new();
  root.set(
    "world",
    Tag::compound_from_iter([(
      "players",
      Tag::list_from_iter([Tag::string("Zed")]).unwrap(),
    )]),
  );

  root
    .get_mut("world")
    .unwrap()
    .as_compound_mut()
    .unwrap()
    .get_mut("players")
    .unwrap()
    .as_list_mut()
    .unwrap()
    .add(Tag::string("Ada"))
    .unwrap();

  let players = root
    .get_compound("world")
    .and_then(|w| w.get_list("players"))
    .unwrap();
  assert_eq!(players.len(), 2);
  assert_eq!(players.get_str(1), Some("Ada"));
}

#[test]
fn whole_trees_compare_structurally() {
  let build = |seed: i64| {
    Tag::compound_from_iter([
      ("seed", Tag::Long(seed)),
      (
        "spawn",
        Tag::compound_from_iter([("x", Tag::Int(0)), ("z", Tag::Int(0))]),
      ),
      (
        "names",
        Tag::list_from_iter([Tag::string("a"), Tag::string("b")]).unwrap(),
      ),
    ])
  };

  assert_eq!(build(42), build(42));
  assert_ne!(build(42), build(43));
}
