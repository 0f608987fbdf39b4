use libosmatch::prelude::*;

const CATALOG: &str = r#"[
  {"cats": ["Churches in England"], "tags": ["amenity=place_of_worship", "religion=christian"], "trim": ["church", "parish church"]},
  {"cats": ["Villages in England"], "tags": ["place=village"]}
]"#;

fn row(table: PlanetTable, src_id: i64, tags: &[(&str, &str)]) -> PlanetRow {
  PlanetRow {
    table,
    src_id,
    name: None,
    tags: tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    dist: 0.0,
  }
}

#[test]
fn match_and_disambiguate() {
  let catalog = EntityTypes::from_reader(CATALOG.as_bytes()).unwrap();
  let church_tags = catalog.categories_to_tags(&["Churches in England"]);
  let village_tags = catalog.categories_to_tags(&["Villages in England"]);

  let matcher = Matcher::new(catalog);

  let church = Item::builder(1)
    .entity(WikidataEntity::builder().labels(&[("en", "St Mary's Church, Ely")]).build())
    .tags(&church_tags.iter().map(String::as_str).collect::<Vec<_>>())
    .build();

  let village = Item::builder(2)
    .entity(WikidataEntity::builder().labels(&[("en", "Little Downham")]).build())
    .tags(&village_tags.iter().map(String::as_str).collect::<Vec<_>>())
    .build();

  let batch = vec![
    (
      church,
      vec![
        row(PlanetTable::Polygon, 100, &[("name", "St Mary's Church"), ("amenity", "place_of_worship"), ("religion", "christian")]),
        row(PlanetTable::Point, 101, &[("name", "St Mary's Church"), ("religion", "christian"), ("historic", "memorial")]),
        row(PlanetTable::Point, 102, &[("name", "Ely Cathedral"), ("amenity", "place_of_worship")]),
      ],
    ),
    (
      village,
      vec![
        row(PlanetTable::Polygon, -200, &[("name", "Little Downham"), ("admin_level", "10"), ("boundary", "administrative")]),
        row(PlanetTable::Point, 201, &[("name", "Little Downham"), ("place", "village")]),
      ],
    ),
  ];

  let items = matcher.match_items(batch);

  assert_eq!(items[0].candidates.len(), 2);
  assert_eq!(items[1].candidates.len(), 2);

  let decisions = disambiguate(&items, &Default::default()).map(|(item, decision)| (item.item_id, decision.candidate().map(Candidate::key))).collect::<Vec<_>>();

  assert_eq!(decisions, vec![(1, Some((OsmType::Way, 100))), (2, Some((OsmType::Node, 201)))]);
}

#[test]
fn names_and_matches() {
  let entity = WikidataEntity::builder()
    .labels(&[("en", "Museum of Modern Art"), ("pl", "Muzeum Sztuki Nowoczesnej")])
    .aliases(&[("en", &["MoMA"])])
    .sitelinks(&[("enwiki", "Museum of Modern Art")])
    .build();

  let names = get_wikidata_names(&entity);

  assert_eq!(names.keys().collect::<Vec<_>>(), vec!["MoMA", "Museum of Modern Art"]);

  let tags = [("name", "MOMA")].iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<Tags>();
  let found = check_for_match(&tags, &names, &["museum"]).unwrap();

  assert_eq!(found.match_type, MatchType::Good);
  assert_eq!(found.reference_name, "MoMA");
  assert_eq!(found.reference_source, vec![NameSource::new(SourceKind::Alias, "en")]);
}
