use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use nbt_tree::{CompoundTag, ListTag, Tag};

fn build_tree(width: usize) -> Tag {
  let mut root = CompoundTag::new();
  for i in 0..width {
    let mut entry = CompoundTag::new();
    entry.set("name", Tag::string(format!("entry-{i}")));
    entry.set("level", Tag::Int(i as i32));
    entry.set("health", Tag::Double(20.0));

    let mut tags = ListTag::new();
    for j in 0..8 {
      tags.add(Tag::string(format!("tag-{j}"))).unwrap();
    }
    entry.set("tags", Tag::List(tags));

    root.set(format!("entry-{i}"), Tag::Compound(entry));
  }
  Tag::Compound(root)
}

fn criterion_benchmark(c: &mut Criterion) {
  c.bench_function("build", |b| {
    b.iter(|| {
      let _ = build_tree(100);
    })
  });

  let tree = build_tree(100);
  let other = build_tree(100);

  c.bench_function("hash", |b| {
    b.iter(|| {
      let mut hasher = DefaultHasher::new();
      tree.hash(&mut hasher);
      hasher.finish()
    })
  });

  c.bench_function("compare", |b| {
    b.iter(|| tree == other)
  });

  c.bench_function("render", |b| {
    b.iter(|| tree.to_string())
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
