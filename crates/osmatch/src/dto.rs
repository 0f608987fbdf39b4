use std::collections::HashSet;

use ahash::RandomState;
use libosmatch::prelude::*;
use serde::{Deserialize, Serialize};

/// A batch of items to match, each with the rows fetched around it.
#[derive(Debug, Deserialize)]
pub struct Batch {
  pub items: Vec<BatchItem>,
  /// Items already carrying a rejected match.
  #[serde(default)]
  pub bad: HashSet<u64, RandomState>,
}

#[derive(Debug, Deserialize)]
pub struct BatchItem {
  #[serde(flatten)]
  pub item: Item,
  #[serde(default)]
  pub rows: Vec<PlanetRow>,
}

/// One output line.
#[derive(Debug, Serialize)]
pub struct DecisionRecord<'d> {
  pub item_id: u64,
  pub search_radius_km: f64,
  #[serde(flatten)]
  pub decision: Decision<'d>,
}
