use crate::matching::{
  MatchType, initials::initials_match, is_number, normalize::tidy_name, strip_keep_commas, strip_non_word,
};

const STATUE_PREFIX: &str = "Statue of ";

/// Compares a candidate name with a reference name.
///
/// On top of [`name_match_main`], a name of the form "Statue of X" matches
/// a name X, since statues are often tagged with the name of their subject.
///
/// The cascade only splits commas and "Statue of " off its second argument,
/// so when the names do not match in the given order they are tried the
/// other way around. Whether two names match never depends on their order,
/// but the match type of the given order is preferred.
pub fn name_match<S: AsRef<str>>(candidate: &str, reference: &str, endings: &[S]) -> Option<MatchType> {
  directed_match(candidate, reference, endings).or_else(|| directed_match(reference, candidate, endings))
}

fn directed_match<S: AsRef<str>>(candidate: &str, reference: &str, endings: &[S]) -> Option<MatchType> {
  if let Some(found) = name_match_main(candidate, reference, endings) {
    return Some(found);
  }

  let subject = reference.strip_prefix(STATUE_PREFIX)?;

  name_match_main(candidate, subject, endings).map(|_| MatchType::Trim)
}

/// Runs the ordered cascade of comparisons between a candidate name and a
/// reference name, each step discarding more information than the last.
///
/// The comma steps only look at the reference, so `("London", "London, England")`
/// matches while the swapped pair does not.
pub fn name_match_main<S: AsRef<str>>(candidate: &str, reference: &str, endings: &[S]) -> Option<MatchType> {
  if candidate.is_empty() || reference.is_empty() {
    return None;
  }

  if let Some(found) = initials_match(candidate, reference, endings).or_else(|| initials_match(reference, candidate, endings)) {
    return Some(found);
  }

  let reference_lc = reference.to_lowercase();
  let candidate_lc = candidate.to_lowercase();

  let (reference_word, candidate_word) = (strip_non_word(&reference_lc), strip_non_word(&candidate_lc));

  // Names without a single word character (pure punctuation) carry nothing to compare.
  if reference_word.is_empty() || candidate_word.is_empty() {
    return None;
  }

  if reference_word == candidate_word {
    return Some(MatchType::Good);
  }

  let mut reference_lc = tidy_name(&reference_lc);
  let candidate_lc = tidy_name(&candidate_lc);

  if reference_lc.is_empty() || candidate_lc.is_empty() {
    return None;
  }

  if !endings.is_empty() && match_with_words_removed(&candidate_lc, &reference_lc, endings) {
    return Some(MatchType::Good);
  }

  if reference_lc == candidate_lc {
    return Some(MatchType::Good);
  }

  if reference_lc.contains("washington, d") {
    reference_lc = reference_lc.replace("washington, d", "washington d");
  }

  if let Some(head) = before_last_comma(&reference_lc)
    && !is_number(&candidate_lc)
    && head == candidate_lc
  {
    return Some(MatchType::Good);
  }

  if reference_lc.split_whitespace().eq(candidate_lc.split_whitespace().rev()) {
    return Some(MatchType::Good);
  }

  let reference_lc = strip_keep_commas(&reference_lc);
  let candidate_lc = strip_keep_commas(&candidate_lc);

  if let Some(head) = before_last_comma(&reference_lc)
    && !is_number(&candidate_lc)
    && (same(head, &candidate_lc) || same(remove_start(head, "the "), remove_start(&candidate_lc, "the ")))
  {
    return Some(MatchType::Good);
  }

  let reference_lc = strip_non_word(&reference_lc);
  let candidate_lc = strip_non_word(&candidate_lc);

  if same(&reference_lc, &candidate_lc) {
    return Some(MatchType::Good);
  }

  let reference_lc = remove_start(&reference_lc, "the");
  let candidate_lc = remove_start(&candidate_lc, "the");

  if same(reference_lc, candidate_lc) {
    return Some(MatchType::Good);
  }

  let endings = std::iter::once("building".to_string()).chain(endings.iter().map(|ending| strip_non_word(&ending.as_ref().to_lowercase())));

  for ending in endings.filter(|ending| !ending.is_empty()) {
    if trims_to(reference_lc, &ending, candidate_lc) || trims_to(candidate_lc, &ending, reference_lc) {
      return Some(MatchType::Trim);
    }
  }

  None
}

/// Whether removing any of the (normalized) `words` from both names leaves
/// the same residue.
fn match_with_words_removed<S: AsRef<str>>(candidate: &str, reference: &str, words: &[S]) -> bool {
  let candidate = strip_non_word(candidate);
  let reference = strip_non_word(reference);

  words
    .iter()
    .map(|word| strip_non_word(&tidy_name(&word.as_ref().to_lowercase())))
    .filter(|word| !word.is_empty())
    .any(|word| same(&reference.replace(&word, ""), &candidate.replace(&word, "")))
}

/// Whether `value` equals `other` once `ending` is removed from its start or end.
fn trims_to(value: &str, ending: &str, other: &str) -> bool {
  if other.is_empty() {
    return false;
  }

  value.strip_suffix(ending) == Some(other) || value.strip_prefix(ending) == Some(other)
}

fn before_last_comma(value: &str) -> Option<&str> {
  value.rfind(", ").map(|comma| &value[..comma])
}

fn remove_start<'s>(value: &'s str, prefix: &str) -> &'s str {
  value.strip_prefix(prefix).unwrap_or(value)
}

/// Equality that never holds between names reduced to nothing.
#[inline(always)]
fn same(lhs: &str, rhs: &str) -> bool {
  !lhs.is_empty() && lhs == rhs
}
