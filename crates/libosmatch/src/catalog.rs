use std::{
  collections::{BTreeMap, BTreeSet},
  fs::File,
  io::{BufReader, Read},
  path::Path,
};

use itertools::Itertools;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::OsmatchError;

/// Default search radius around an item, in kilometers.
pub const DEFAULT_MAX_DIST: f64 = 4.0;

/// One entry of the entity type catalog: which OpenStreetMap tags describe
/// items in the given knowledge-base categories.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntityType {
  pub cats: Vec<String>,
  pub tags: Vec<String>,
  /// Words commonly appended to or prepended to names of this type.
  #[serde(default)]
  pub trim: Vec<String>,
  /// Search radius in kilometers, when wider or narrower than the default.
  #[serde(default)]
  pub max_dist: Option<f64>,
  #[serde(default)]
  pub exclude_cats: Vec<String>,
}

struct CategoryPattern {
  pattern: Regex,
  exclude: Option<Regex>,
  entry: usize,
}

impl CategoryPattern {
  fn matches(&self, category: &str) -> bool {
    self.pattern.is_match(category) && !self.exclude.as_ref().is_some_and(|exclude| exclude.is_match(category))
  }
}

/// The entity type catalog, with its category patterns compiled once.
///
/// It is immutable after loading and can be shared across threads.
pub struct EntityTypes {
  entries: Vec<EntityType>,
  categories: Vec<CategoryPattern>,
}

impl EntityTypes {
  pub fn new(entries: Vec<EntityType>) -> Result<EntityTypes, OsmatchError> {
    let mut keyed = BTreeMap::new();

    // Later entries win when two of them list the same category.
    for (index, entry) in entries.iter().enumerate() {
      for category in &entry.cats {
        let mut category = category.to_lowercase();

        if let Some(by) = category.find(" by ") {
          category.truncate(by);
        }

        keyed.insert(category, index);
      }
    }

    let categories = keyed
      .into_iter()
      .map(|(category, entry)| -> Result<CategoryPattern, OsmatchError> {
        let exclude = match entries[entry].exclude_cats.as_slice() {
          [] => None,
          exclude => Some(word_pattern(&exclude.iter().map(|e| regex::escape(e)).join("|"))?),
        };

        Ok(CategoryPattern {
          pattern: word_pattern(&regex::escape(&category))?,
          exclude,
          entry,
        })
      })
      .collect::<Result<Vec<_>, OsmatchError>>()?;

    tracing::debug!(entries = entries.len(), categories = categories.len(), "built entity type catalog");

    Ok(EntityTypes { entries, categories })
  }

  pub fn from_reader<R: Read>(reader: R) -> Result<EntityTypes, OsmatchError> {
    EntityTypes::new(serde_json::from_reader(reader)?)
  }

  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<EntityTypes, OsmatchError> {
    EntityTypes::from_reader(BufReader::new(File::open(path)?))
  }

  pub fn entries(&self) -> &[EntityType] {
    &self.entries
  }

  fn entries_for_tags<'t, S: AsRef<str>>(&'t self, tags: &'t [S]) -> impl Iterator<Item = &'t EntityType> + 't {
    self.entries.iter().filter(move |entry| entry.tags.iter().any(|tag| tags.iter().any(|t| t.as_ref() == tag)))
  }

  /// Trimmable name endings of every entity type sharing a tag with `tags`.
  pub fn endings_for_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
    self.entries_for_tags(tags).flat_map(|entry| entry.trim.iter().cloned()).sorted().dedup().collect()
  }

  /// Widest search radius of the entity types sharing a tag with `tags`.
  pub fn max_dist_for_tags<S: AsRef<str>>(&self, tags: &[S]) -> Option<f64> {
    self.entries_for_tags(tags).filter_map(|entry| entry.max_dist).reduce(f64::max)
  }

  /// Tags of the entity types matching any of the categories, sorted.
  pub fn categories_to_tags<S: AsRef<str>>(&self, categories: &[S]) -> Vec<String> {
    self.categories_to_tags_map(categories).into_values().flatten().sorted().dedup().collect()
  }

  /// Tags of the entity types matching each of the categories.
  pub fn categories_to_tags_map<S: AsRef<str>>(&self, categories: &[S]) -> BTreeMap<String, BTreeSet<String>> {
    let mut out: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for category in categories.iter().map(AsRef::as_ref) {
      let lc_category = category.to_lowercase();

      for pattern in self.categories.iter().filter(|pattern| pattern.matches(&lc_category)) {
        out.entry(category.to_string()).or_default().extend(self.entries[pattern.entry].tags.iter().cloned());
      }
    }

    out
  }
}

fn word_pattern(pattern: &str) -> Result<Regex, OsmatchError> {
  Ok(RegexBuilder::new(&format!(r"\b(?:{pattern})\b")).case_insensitive(true).build()?)
}

/// Drops `key=value` tags made redundant by a bare `key` in the same list.
pub fn simplify_tags(tags: &[String]) -> Vec<String> {
  let keys = tags.iter().filter(|tag| !tag.contains('=')).collect::<BTreeSet<_>>();

  tags
    .iter()
    .filter(|tag| match tag.split_once('=') {
      Some((key, _)) => !keys.iter().any(|k| k.as_str() == key),
      None => true,
    })
    .cloned()
    .collect()
}
