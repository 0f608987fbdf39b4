use std::{
  collections::{BTreeMap, HashMap},
  fmt,
};

use ahash::RandomState;
use bon::bon;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matching::MatchResult;

/// Free-form tags of an OpenStreetMap object.
pub type Tags = HashMap<String, String, RandomState>;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
  Node,
  Way,
  Relation,
}

impl fmt::Display for OsmType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OsmType::Node => write!(f, "node"),
      OsmType::Way => write!(f, "way"),
      OsmType::Relation => write!(f, "relation"),
    }
  }
}

/// An OpenStreetMap object considered as a representation of an item.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Candidate {
  pub osm_type: OsmType,
  pub osm_id: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, serialize_with = "sorted_tags")]
  pub tags: Tags,
  #[serde(default)]
  pub dist: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub matched: Option<MatchResult>,
}

impl Candidate {
  pub fn key(&self) -> (OsmType, i64) {
    (self.osm_type, self.osm_id)
  }

  pub fn tag(&self, key: &str) -> Option<&str> {
    self.tags.get(key).map(String::as_str)
  }

  /// The item criteria (`key=value` tags or bare keys) this candidate
  /// carries, in criteria order.
  pub fn matching_tags<'c, S: AsRef<str>>(&self, criteria: &'c [S]) -> Vec<&'c str> {
    criteria
      .iter()
      .map(AsRef::as_ref)
      .filter(|criterion| match criterion.split_once('=') {
        Some((key, value)) => self.tag(key) == Some(value),
        None => self.tags.contains_key(*criterion),
      })
      .collect()
  }
}

#[bon]
impl Candidate {
  #[builder]
  pub fn builder(#[builder(start_fn)] osm_type: OsmType, #[builder(start_fn)] osm_id: i64, #[builder(default)] dist: f64, tags: &[(&str, &str)]) -> Candidate {
    let tags = tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<Tags>();

    Candidate {
      osm_type,
      osm_id,
      name: tags.get("name").cloned(),
      tags,
      dist,
      matched: None,
    }
  }
}

/// The knowledge-base record being matched.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Item {
  pub item_id: u64,
  #[serde(default)]
  pub entity: WikidataEntity,
  /// Search criteria, as `key=value` tags or bare keys.
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub categories: Vec<String>,
  #[serde(default)]
  pub candidates: Vec<Candidate>,
}

#[bon]
impl Item {
  #[builder]
  pub fn builder(
    #[builder(start_fn)] item_id: u64,
    #[builder(default)] entity: WikidataEntity,
    #[builder(default)] tags: &[&str],
    #[builder(default)] categories: &[&str],
    #[builder(default)] candidates: Vec<Candidate>,
  ) -> Item {
    Item {
      item_id,
      entity,
      tags: tags.iter().map(ToString::to_string).collect(),
      categories: categories.iter().map(ToString::to_string).collect(),
      candidates,
    }
  }
}

/// Labels, aliases and sitelinks of a Wikidata entity.
///
/// Values are accepted either as plain strings or in the shape returned by
/// the `wbgetentities` API (`{"value": …}` / `{"title": …}` objects).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct WikidataEntity {
  #[serde(default, deserialize_with = "text_map")]
  pub labels: BTreeMap<String, String>,
  #[serde(default, deserialize_with = "text_list_map")]
  pub aliases: BTreeMap<String, Vec<String>>,
  #[serde(default, deserialize_with = "text_map")]
  pub sitelinks: BTreeMap<String, String>,
}

#[bon]
impl WikidataEntity {
  #[builder]
  pub fn builder(#[builder(default)] labels: &[(&str, &str)], #[builder(default)] aliases: &[(&str, &[&str])], #[builder(default)] sitelinks: &[(&str, &str)]) -> WikidataEntity {
    WikidataEntity {
      labels: labels.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
      aliases: aliases.iter().map(|(k, v)| (k.to_string(), v.iter().map(ToString::to_string).collect())).collect(),
      sitelinks: sitelinks.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
  Plain(String),
  Value { value: String },
  Title { title: String },
}

impl From<TextValue> for String {
  fn from(value: TextValue) -> Self {
    match value {
      TextValue::Plain(text) | TextValue::Value { value: text } | TextValue::Title { title: text } => text,
    }
  }
}

/// Writes tags ordered by key, so that output does not depend on hashing.
pub(crate) fn sorted_tags<S: Serializer>(tags: &Tags, ser: S) -> Result<S::Ok, S::Error> {
  ser.collect_map(tags.iter().sorted_unstable_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs)))
}

fn text_map<'de, D: Deserializer<'de>>(de: D) -> Result<BTreeMap<String, String>, D::Error> {
  let map = BTreeMap::<String, TextValue>::deserialize(de)?;

  Ok(map.into_iter().map(|(k, v)| (k, v.into())).collect())
}

fn text_list_map<'de, D: Deserializer<'de>>(de: D) -> Result<BTreeMap<String, Vec<String>>, D::Error> {
  let map = BTreeMap::<String, Vec<TextValue>>::deserialize(de)?;

  Ok(map.into_iter().map(|(k, v)| (k, v.into_iter().map(Into::into).collect())).collect())
}
