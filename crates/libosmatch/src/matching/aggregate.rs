use std::collections::BTreeMap;

use tracing::instrument;

use crate::{
  matching::{MatchResult, MatchType, address::check_name_matches_address, name::name_match, references::ReferenceNames},
  model::Tags,
};

/// Name-like keys known to carry values that should not be matched against.
const BAD_NAME_FIELDS: &[&str] = &["tiger:name_base", "old_name", "name:right", "name:left", "gnis:county_name", "openGeoDB:name"];

/// The candidate's name-like tags, ordered by key.
pub fn candidate_names(tags: &Tags) -> BTreeMap<&str, &str> {
  tags
    .iter()
    .filter(|(key, _)| is_name_key(key))
    .map(|(key, value)| (key.as_str(), value.as_str()))
    .collect()
}

fn is_name_key(key: &str) -> bool {
  key.contains("name") && !BAD_NAME_FIELDS.contains(&key)
}

/// Finds the best match between a candidate's tags and the reference names.
///
/// The first `good` name match wins outright. Otherwise an address match is
/// preferred, then the strongest (latest, on ties) weaker name match.
#[instrument(level = "trace", skip_all)]
pub fn check_for_match<S: AsRef<str>>(tags: &Tags, names: &ReferenceNames, endings: &[S]) -> Option<MatchResult> {
  let candidate = candidate_names(tags);
  let mut best: Option<MatchResult> = None;

  for (reference_name, sources) in names {
    for (key, value) in &candidate {
      let Some(match_type) = name_match(value, reference_name, endings) else {
        continue;
      };

      let found = MatchResult {
        match_type,
        reference_name: reference_name.clone(),
        reference_source: sources.clone(),
        candidate_name: value.to_string(),
        candidate_key: key.to_string(),
      };

      if match_type == MatchType::Good {
        tracing::debug!(reference = reference_name, candidate = value, key = key, "good name match");

        return Some(found);
      }

      if best.as_ref().is_none_or(|best| best.match_type.rank() <= match_type.rank()) {
        best = Some(found);
      }
    }
  }

  if let Some(address) = check_name_matches_address(tags, names) {
    tracing::debug!(reference = address.reference_name, candidate = address.candidate_name, "address match");

    return Some(address);
  }

  best
}

/// Every match between a candidate's tags and the reference names, followed
/// by the address match if there is one.
pub fn get_all_matches<S: AsRef<str>>(tags: &Tags, names: &ReferenceNames, endings: &[S]) -> Vec<MatchResult> {
  let candidate = candidate_names(tags);

  names
    .iter()
    .flat_map(|(reference_name, sources)| {
      candidate.iter().filter_map(move |(key, value)| {
        name_match(value, reference_name, endings).map(|match_type| MatchResult {
          match_type,
          reference_name: reference_name.clone(),
          reference_source: sources.clone(),
          candidate_name: value.to_string(),
          candidate_key: key.to_string(),
        })
      })
    })
    .chain(check_name_matches_address(tags, names))
    .collect()
}
