use std::collections::BTreeMap;

use crate::{
  matching::{NameSource, SourceKind},
  model::WikidataEntity,
};

/// Languages and sites whose names are never used for matching.
const SKIP_LANGUAGES: &[&str] = &["ar", "arc", "pl"];

/// Aliases are only trusted for sparsely documented entities.
const MAX_NAMES_FOR_ALIASES: usize = 6;
const MAX_ALIASES_PER_LANGUAGE: usize = 3;

/// Every known name of a reference entity, with where it came from.
pub type ReferenceNames = BTreeMap<String, Vec<NameSource>>;

pub fn get_wikidata_names(entity: &WikidataEntity) -> ReferenceNames {
  let mut names = ReferenceNames::new();

  if entity.sitelinks.len() < MAX_NAMES_FOR_ALIASES && entity.labels.len() < MAX_NAMES_FOR_ALIASES {
    for (language, aliases) in &entity.aliases {
      if skipped(language) || aliases.len() > MAX_ALIASES_PER_LANGUAGE {
        continue;
      }

      for alias in aliases {
        add_name(&mut names, alias, SourceKind::Alias, language);
      }
    }
  }

  for (language, label) in &entity.labels {
    if !skipped(language) {
      add_name(&mut names, label, SourceKind::Label, language);
    }
  }

  for (site, title) in &entity.sitelinks {
    if !skipped(site) && !site.strip_suffix("wiki").is_some_and(skipped) {
      add_name(&mut names, title, SourceKind::Sitelink, site);
    }
  }

  names
}

fn add_name(names: &mut ReferenceNames, name: &str, kind: SourceKind, key: &str) {
  if name.is_empty() {
    return;
  }

  names.entry(name.to_string()).or_default().push(NameSource::new(kind, key));
}

fn skipped(code: &str) -> bool {
  SKIP_LANGUAGES.contains(&code)
}

#[cfg(test)]
mod tests {
  use super::get_wikidata_names;
  use crate::{
    matching::{NameSource, SourceKind},
    model::WikidataEntity,
  };

  #[test]
  fn labels_aliases_and_sitelinks() {
    let entity = WikidataEntity::builder()
      .labels(&[("en", "Big Ben"), ("de", "Big Ben"), ("pl", "Wielki Ben")])
      .aliases(&[("en", &["Elizabeth Tower", "Great Bell"])])
      .sitelinks(&[("enwiki", "Big Ben"), ("plwiki", "Big Ben (dzwon)")])
      .build();

    let names = get_wikidata_names(&entity);

    assert_eq!(names.keys().collect::<Vec<_>>(), vec!["Big Ben", "Elizabeth Tower", "Great Bell"]);
    assert_eq!(
      names["Big Ben"],
      vec![
        NameSource::new(SourceKind::Label, "de"),
        NameSource::new(SourceKind::Label, "en"),
        NameSource::new(SourceKind::Sitelink, "enwiki"),
      ]
    );
    assert_eq!(names["Elizabeth Tower"], vec![NameSource::new(SourceKind::Alias, "en")]);
  }

  #[test]
  fn aliases_skipped_for_well_documented_entities() {
    let labels = [("en", "Paris"), ("fr", "Paris"), ("de", "Paris"), ("es", "París"), ("it", "Parigi"), ("nl", "Parijs")];
    let entity = WikidataEntity::builder().labels(&labels).aliases(&[("en", &["City of Light"])]).build();

    assert!(!get_wikidata_names(&entity).contains_key("City of Light"));
  }

  #[test]
  fn alias_floods_skipped() {
    let entity = WikidataEntity::builder()
      .labels(&[("en", "Springfield")])
      .aliases(&[("en", &["A", "B", "C", "D"]), ("fr", &["Springfield (ville)"])])
      .build();

    let names = get_wikidata_names(&entity);

    assert!(!names.contains_key("A"));
    assert!(names.contains_key("Springfield (ville)"));
  }
}
