use std::{collections::HashSet, time::Instant};

use ahash::RandomState;
use itertools::Itertools;
use metrics::histogram;
use rayon::prelude::*;
use tracing::instrument;

use crate::{
  candidates::PlanetRow,
  catalog::{DEFAULT_MAX_DIST, EntityTypes},
  matching::{
    aggregate::{candidate_names, check_for_match},
    references::get_wikidata_names,
  },
  model::{Candidate, Item},
};

/// Matches items against the OpenStreetMap rows found around them.
///
/// Built once from the entity type catalog, then shared by reference.
pub struct Matcher {
  catalog: EntityTypes,
  default_max_dist: f64,
}

impl Matcher {
  pub fn new(catalog: EntityTypes) -> Matcher {
    Matcher {
      catalog,
      default_max_dist: DEFAULT_MAX_DIST,
    }
  }

  pub fn with_default_max_dist(mut self, max_dist: f64) -> Matcher {
    self.default_max_dist = max_dist;
    self
  }

  pub fn catalog(&self) -> &EntityTypes {
    &self.catalog
  }

  /// Radius, in kilometers, within which rows should be fetched for `item`.
  pub fn search_radius_km(&self, item: &Item) -> f64 {
    self.catalog.max_dist_for_tags(&item.tags).unwrap_or(self.default_max_dist)
  }

  pub fn endings(&self, item: &Item) -> Vec<String> {
    self.catalog.endings_for_tags(&item.tags)
  }

  /// Keeps the rows whose names match the item, nearest first.
  #[instrument(level = "debug", skip_all, fields(item_id = item.item_id, rows = rows.len()))]
  pub fn match_item(&self, item: &Item, rows: &[PlanetRow]) -> Vec<Candidate> {
    let names = get_wikidata_names(&item.entity);

    if names.is_empty() {
      return Vec::new();
    }

    let endings = self.endings(item);
    let in_cities = item.categories.iter().any(|category| category.starts_with("Cities "));
    let wants_townland = item.tags.iter().any(|tag| tag == "locality=townland");

    let mut seen = HashSet::<_, RandomState>::default();
    let mut candidates = Vec::new();

    for row in rows.iter().sorted_by(|lhs, rhs| lhs.dist.total_cmp(&rhs.dist)) {
      let (osm_type, osm_id) = row.osm_id_and_type();

      if !seen.insert((osm_type, osm_id)) {
        continue;
      }

      if row.tags.get("locality").is_some_and(|locality| locality == "townland") && !wants_townland {
        continue;
      }

      if in_cities && row.admin_level() == Some(10) {
        continue;
      }

      if candidate_names(&row.tags).is_empty() {
        continue;
      }

      let Some(matched) = check_for_match(&row.tags, &names, &endings) else {
        continue;
      };

      tracing::debug!(%osm_type, osm_id, match_type = ?matched.match_type, "row matches item");

      candidates.push(Candidate {
        osm_type,
        osm_id,
        name: row.name.clone().or_else(|| row.tags.get("name").cloned()),
        tags: row.tags.clone(),
        dist: row.dist,
        matched: Some(matched),
      });
    }

    candidates
  }

  /// Matches a whole batch in parallel, replacing each item's candidates.
  pub fn match_items(&self, batch: Vec<(Item, Vec<PlanetRow>)>) -> Vec<Item> {
    batch
      .into_par_iter()
      .map(|(mut item, rows)| {
        let then = Instant::now();

        item.candidates = self.match_item(&item, &rows);

        histogram!("osmatch_matching_latency_seconds").record(then.elapsed().as_secs_f64());

        item
      })
      .collect()
  }
}
