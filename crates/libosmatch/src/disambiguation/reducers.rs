use itertools::Itertools;
use libosmatch_macros::candidate_reducer;
use tracing::instrument;

use crate::{
  disambiguation::Reducer,
  model::{Candidate, Item, OsmType},
};

/// Prefers a `place` node over the administrative or residential areas
/// sharing its name, when the node is the only point among the candidates.
#[candidate_reducer(PlaceReducer, name = "place")]
fn reduce<'c>(&self, _item: &Item, candidates: &'c [Candidate]) -> Option<&'c Candidate> {
  if candidates.len() < 2 || candidates.iter().map(|candidate| candidate.osm_type).unique().count() < 2 {
    return None;
  }

  let node = candidates.iter().filter(|candidate| candidate.osm_type == OsmType::Node).exactly_one().ok()?;

  if !node.tags.contains_key("place") {
    return None;
  }

  candidates
    .iter()
    .filter(|candidate| candidate.osm_type != OsmType::Node)
    .any(|area| area.tags.contains_key("admin_level") || area.tag("landuse") == Some("residential"))
    .then_some(node)
}

/// Picks the only candidate carrying the `winner` tag, provided every other
/// candidate's matching tags are accepted by `others`.
pub(crate) struct ExclusiveTagReducer {
  name: &'static str,
  winner: &'static str,
  others: fn(&[&str]) -> bool,
}

impl Reducer for ExclusiveTagReducer {
  fn name(&self) -> &'static str {
    self.name
  }

  #[instrument(level = "trace", name = "exclusive_tag_reducer", skip_all, fields(reducer = self.name, candidates = candidates.len()))]
  fn reduce<'c>(&self, item: &Item, candidates: &'c [Candidate]) -> Option<&'c Candidate> {
    if candidates.len() < 2 {
      return None;
    }

    let mut winner = None;

    for candidate in candidates {
      let tags = candidate.matching_tags(&item.tags);

      if tags.contains(&self.winner) {
        if winner.is_some() {
          return None;
        }

        winner = Some(candidate);
      } else if !(self.others)(&tags) {
        return None;
      }
    }

    winner
  }
}

/// A school and the building it occupies.
pub(crate) const SCHOOL: ExclusiveTagReducer = ExclusiveTagReducer {
  name: "school",
  winner: "amenity=school",
  others: |tags| tags == ["building=school"],
};

/// A station and the tram stops it serves.
pub(crate) const STATION: ExclusiveTagReducer = ExclusiveTagReducer {
  name: "station",
  winner: "public_transport=station",
  others: |tags| tags.contains(&"railway=tram_stop"),
};

/// A church and other christian features sharing its name.
pub(crate) const CHURCH: ExclusiveTagReducer = ExclusiveTagReducer {
  name: "church",
  winner: "amenity=place_of_worship",
  others: |tags| tags == ["religion=christian"],
};
