use crate::matching::MatchType;

const MIN_INITIALS_LENGTH: usize = 3;

/// Checks whether `short` is made of the initials of the capitalized words
/// of `long`, optionally once one of `endings` is trimmed from `short`.
pub fn initials_match<S: AsRef<str>>(short: &str, long: &str, endings: &[S]) -> Option<MatchType> {
  let initials = long.split_whitespace().filter_map(|term| term.chars().next()).filter(|c| c.is_uppercase()).collect::<String>();

  if initials.chars().count() < MIN_INITIALS_LENGTH || short.chars().count() < MIN_INITIALS_LENGTH {
    return None;
  }

  if initials == short {
    return Some(MatchType::Initials);
  }

  if initials == short.chars().filter(|c| c.is_alphanumeric()).collect::<String>() {
    return Some(MatchType::Initials);
  }

  let short_lc = short.to_lowercase();

  let trimmed = endings.iter().map(AsRef::as_ref).filter(|ending| !ending.is_empty()).any(|ending| {
    let ending = ending.to_lowercase();

    short_lc.ends_with(&ending) && short.get(..short.len().saturating_sub(ending.len())).is_some_and(|rest| rest.trim() == initials)
  });

  trimmed.then_some(MatchType::InitialsTrim)
}
