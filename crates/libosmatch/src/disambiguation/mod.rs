mod reducers;

use std::{
  collections::{HashMap, HashSet},
  fmt,
};

use ahash::RandomState;
use metrics::counter;
use serde::Serialize;
use tracing::instrument;

use crate::{
  disambiguation::reducers::{CHURCH, PlaceReducer, SCHOOL, STATION},
  matching::is_number,
  model::{Candidate, Item, OsmType},
};

/// A heuristic picking one winner out of several matched candidates.
pub(crate) trait Reducer: Send + Sync {
  fn name(&self) -> &'static str;
  fn reduce<'c>(&self, item: &Item, candidates: &'c [Candidate]) -> Option<&'c Candidate>;
}

const TAG_REDUCERS: &[&dyn Reducer] = &[&SCHOOL, &STATION, &CHURCH];

/// Why an item could not be bound to a single candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Note {
  #[serde(rename = "has bad match")]
  HasBadMatch,
  #[serde(rename = "number as house name")]
  NumberAsHouseName,
  #[serde(rename = "number as name")]
  NumberAsName,
  #[serde(rename = "more than one candidate found")]
  MoreThanOneCandidate,
  #[serde(rename = "OSM candidate matches multiple Wikidata items")]
  MatchesMultipleItems,
  #[serde(rename = "candidate already tagged")]
  AlreadyTagged,
}

impl Note {
  fn outcome(self) -> &'static str {
    match self {
      Note::HasBadMatch => "has_bad_match",
      Note::NumberAsHouseName => "number_as_house_name",
      Note::NumberAsName => "number_as_name",
      Note::MoreThanOneCandidate => "more_than_one_candidate",
      Note::MatchesMultipleItems => "matches_multiple_items",
      Note::AlreadyTagged => "already_tagged",
    }
  }
}

impl fmt::Display for Note {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Note::HasBadMatch => "has bad match",
      Note::NumberAsHouseName => "number as house name",
      Note::NumberAsName => "number as name",
      Note::MoreThanOneCandidate => "more than one candidate found",
      Note::MatchesMultipleItems => "OSM candidate matches multiple Wikidata items",
      Note::AlreadyTagged => "candidate already tagged",
    };

    write!(f, "{text}")
  }
}

/// The outcome of disambiguation for one item.
///
/// Serializes as `{"note": "..."}` or `{"candidate": {...}}`.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision<'c> {
  Note(Note),
  Candidate(&'c Candidate),
}

impl Decision<'_> {
  pub fn candidate(&self) -> Option<&Candidate> {
    match self {
      Decision::Candidate(candidate) => Some(candidate),
      Decision::Note(_) => None,
    }
  }

  pub fn note(&self) -> Option<Note> {
    match self {
      Decision::Note(note) => Some(*note),
      Decision::Candidate(_) => None,
    }
  }

  fn outcome(&self) -> &'static str {
    match self {
      Decision::Note(note) => note.outcome(),
      Decision::Candidate(_) => "candidate",
    }
  }
}

type Multiplicity = HashMap<(OsmType, i64), usize, RandomState>;

/// Reduces the matched candidates of every item to at most one winner.
///
/// Items listed in `bad` already carry a rejected match and are not
/// decided again. A candidate matched by several items is never bound to
/// any of them, so multiplicity is counted across the whole batch before
/// the first decision is yielded.
pub fn disambiguate<'i>(items: &'i [Item], bad: &'i HashSet<u64, RandomState>) -> impl Iterator<Item = (&'i Item, Decision<'i>)> {
  let mut multiplicity = Multiplicity::default();

  for candidate in items.iter().flat_map(|item| &item.candidates) {
    *multiplicity.entry(candidate.key()).or_default() += 1;
  }

  items.iter().map(move |item| {
    let decision = decide(item, bad, &multiplicity);

    counter!("osmatch_decisions_total", "outcome" => decision.outcome()).increment(1);

    (item, decision)
  })
}

#[instrument(level = "debug", skip_all, fields(item_id = item.item_id, candidates = item.candidates.len()))]
fn decide<'i>(item: &'i Item, bad: &HashSet<u64, RandomState>, multiplicity: &Multiplicity) -> Decision<'i> {
  if bad.contains(&item.item_id) {
    return Decision::Note(Note::HasBadMatch);
  }

  for candidate in &item.candidates {
    if candidate.tag("addr:housename").is_some_and(is_number) {
      return Decision::Note(Note::NumberAsHouseName);
    }

    if candidate.tag("name").is_some_and(is_number) {
      return Decision::Note(Note::NumberAsName);
    }
  }

  let candidate = match reduce(item, &item.candidates) {
    Some(candidate) => candidate,
    None => match item.candidates.as_slice() {
      [candidate] => candidate,
      _ => return Decision::Note(Note::MoreThanOneCandidate),
    },
  };

  if multiplicity.get(&candidate.key()).copied().unwrap_or_default() > 1 {
    return Decision::Note(Note::MatchesMultipleItems);
  }

  if candidate.tags.contains_key("wikidata") {
    return Decision::Note(Note::AlreadyTagged);
  }

  tracing::debug!(osm_type = %candidate.osm_type, osm_id = candidate.osm_id, "candidate confirmed");

  Decision::Candidate(candidate)
}

fn reduce<'c>(item: &Item, candidates: &'c [Candidate]) -> Option<&'c Candidate> {
  if let Some(place) = PlaceReducer.reduce(item, candidates) {
    tracing::debug!(reducer = PlaceReducer.name(), osm_id = place.osm_id, "reducer picked a candidate");

    return Some(place);
  }

  let mut fired = TAG_REDUCERS.iter().filter_map(|reducer| reducer.reduce(item, candidates).map(|winner| (reducer.name(), winner)));
  let (name, winner) = fired.next()?;

  // The losing candidates of each tag reducer match a tag set every other tag reducer rejects.
  debug_assert!(fired.next().is_none(), "tag reducers exclude each other");

  tracing::debug!(reducer = name, osm_id = winner.osm_id, "reducer picked a candidate");

  Some(winner)
}
