use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use libosmatch::prelude::*;

fn tags(tags: &[(&str, &str)]) -> Tags {
  tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn check_for_match_good(c: &mut Criterion) {
  let entity = WikidataEntity::builder().labels(&[("en", "Chrysler Building"), ("fr", "Chrysler Building")]).build();
  let names = get_wikidata_names(&entity);
  let tags = tags(&[("name", "Chrysler Building"), ("name:en", "Chrysler Building"), ("building", "yes")]);

  c.bench_function("check_for_match_good", |b| b.iter(|| black_box(check_for_match(&tags, &names, &["building"]))));
}

fn check_for_match_none(c: &mut Criterion) {
  let entity = WikidataEntity::builder()
    .labels(&[("en", "Museum of Modern Art"), ("de", "Museum of Modern Art"), ("es", "Museo de Arte Moderno")])
    .aliases(&[("en", &["MoMA", "The Modern"])])
    .build();

  let names = get_wikidata_names(&entity);
  let tags = tags(&[("name", "Rockefeller Center"), ("alt_name", "Rockefeller Plaza"), ("addr:housenumber", "30"), ("addr:street", "Rockefeller Plaza")]);

  c.bench_function("check_for_match_none", |b| b.iter(|| black_box(check_for_match(&tags, &names, &["museum", "gallery"]))));
}

fn disambiguate_batch(c: &mut Criterion) {
  let items = (0..100)
    .map(|id| {
      Item::builder(id)
        .tags(&["amenity=school", "building=school"])
        .candidates(vec![
          Candidate::builder(OsmType::Way, id as i64 * 2).tags(&[("name", "School"), ("amenity", "school")]).build(),
          Candidate::builder(OsmType::Way, id as i64 * 2 + 1).tags(&[("name", "School"), ("building", "school")]).build(),
        ])
        .build()
    })
    .collect::<Vec<_>>();

  let bad = Default::default();

  c.bench_function("disambiguate_batch", |b| b.iter(|| black_box(disambiguate(&items, &bad).count())));
}

criterion_group!(benches, check_for_match_good, check_for_match_none, disambiguate_batch);
criterion_main!(benches);
