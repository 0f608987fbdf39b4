use serde::{Deserialize, Serialize};

use crate::model::{OsmType, Tags, sorted_tags};

/// Which osm2pgsql planet table a row was read from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetTable {
  Point,
  Line,
  Polygon,
}

/// A row returned by the spatial query around an item, before matching.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlanetRow {
  pub table: PlanetTable,
  /// Source identifier: relations are stored with negated identifiers.
  pub src_id: i64,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, serialize_with = "sorted_tags")]
  pub tags: Tags,
  /// Distance from the item, in meters.
  #[serde(default)]
  pub dist: f64,
}

impl PlanetRow {
  pub fn osm_id_and_type(&self) -> (OsmType, i64) {
    osm_id_and_type(self.table, self.src_id)
  }

  /// Best-effort parse of the `admin_level` tag.
  pub fn admin_level(&self) -> Option<u8> {
    self.tags.get("admin_level").and_then(|level| level.trim().parse().ok())
  }
}

/// Maps a planet table row identifier back to an OpenStreetMap object.
pub fn osm_id_and_type(table: PlanetTable, src_id: i64) -> (OsmType, i64) {
  match table {
    PlanetTable::Point => (OsmType::Node, src_id),
    _ if src_id > 0 => (OsmType::Way, src_id),
    _ => (OsmType::Relation, -src_id),
  }
}
