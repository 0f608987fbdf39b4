use crate::{
  matching::{MatchResult, MatchType, is_number, normalize::normalize_name, references::ReferenceNames},
  model::Tags,
};

const HOUSENUMBER: &str = "addr:housenumber";
const STREET: &str = "addr:street";
const FULL: &str = "addr:full";

/// Matches reference names that look like street addresses (they start
/// with a digit) against the candidate's address tags.
///
/// A house number and street must be exactly equal to a normalized address
/// name, while a free-text `addr:full` only needs to contain one.
pub fn check_name_matches_address(tags: &Tags, names: &ReferenceNames) -> Option<MatchResult> {
  let housenumber = tags.get(HOUSENUMBER);
  let full = tags.get(FULL);

  if housenumber.is_none() && full.is_none() {
    return None;
  }

  let forms = address_forms(names);

  if forms.is_empty() {
    return None;
  }

  if let (Some(number), Some(street)) = (housenumber, tags.get(STREET)) {
    let address = normalize_name(&format!("{number}{street}"));

    if let Some((_, name)) = forms.iter().find(|(form, _)| *form == address) {
      return Some(result(names, name, format!("{number} {street}"), HOUSENUMBER));
    }
  }

  if let Some(full) = full {
    let address = normalize_name(full);

    if let Some((_, name)) = forms.iter().find(|(form, _)| address.contains(form.as_str())) {
      return Some(result(names, name, full.clone(), FULL));
    }
  }

  None
}

/// Normalized address-like forms, each with the reference name it came from.
fn address_forms(names: &ReferenceNames) -> Vec<(String, &str)> {
  let mut forms = Vec::new();

  for name in names.keys().filter(|name| name.starts_with(|c: char| c.is_ascii_digit())) {
    forms.push((normalize_name(name), name.as_str()));

    if let Some(comma) = name.rfind(',') {
      let head = &name[..comma];

      if !is_number(head) {
        forms.push((normalize_name(head), name.as_str()));
      }
    }
  }

  forms
}

fn result(names: &ReferenceNames, name: &str, candidate_name: String, candidate_key: &str) -> MatchResult {
  MatchResult {
    match_type: MatchType::Address,
    reference_name: name.to_string(),
    reference_source: names.get(name).cloned().unwrap_or_default(),
    candidate_name,
    candidate_key: candidate_key.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::check_name_matches_address;
  use crate::{
    matching::{MatchType, NameSource, SourceKind, references::ReferenceNames},
    model::Tags,
  };

  fn names(names: &[&str]) -> ReferenceNames {
    names.iter().map(|name| (name.to_string(), vec![NameSource::new(SourceKind::Label, "en")])).collect()
  }

  fn tags(tags: &[(&str, &str)]) -> Tags {
    tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn housenumber_and_street() {
    let tags = tags(&[("addr:housenumber", "10"), ("addr:street", "Downing Street")]);
    let found = check_name_matches_address(&tags, &names(&["10 Downing Street", "Prime Minister's residence"])).unwrap();

    assert_eq!(found.match_type, MatchType::Address);
    assert_eq!(found.reference_name, "10 Downing Street");
    assert_eq!(found.candidate_name, "10 Downing Street");
    assert_eq!(found.candidate_key, "addr:housenumber");
    assert_eq!(found.reference_source, vec![NameSource::new(SourceKind::Label, "en")]);
  }

  #[test]
  fn name_with_locality_suffix() {
    let tags = tags(&[("addr:housenumber", "221B"), ("addr:street", "Baker Street")]);

    assert!(check_name_matches_address(&tags, &names(&["221B Baker Street, London"])).is_some());
    assert!(check_name_matches_address(&tags, &names(&["221B Baker Street, Marylebone, London"])).is_none());
  }

  #[test]
  fn full_address_contains_name() {
    let tags = tags(&[("addr:full", "1600 Pennsylvania Avenue NW, Washington, DC 20500")]);
    let found = check_name_matches_address(&tags, &names(&["1600 Pennsylvania Avenue"])).unwrap();

    assert_eq!(found.candidate_key, "addr:full");
  }

  #[test]
  fn no_address_tags() {
    let tags = tags(&[("addr:street", "Downing Street"), ("name", "10")]);

    assert!(check_name_matches_address(&tags, &names(&["10 Downing Street"])).is_none());
  }

  #[test]
  fn bare_numbers_are_not_addresses() {
    let tags = tags(&[("addr:full", "10 Downing Street")]);

    assert!(check_name_matches_address(&tags, &names(&["Downing Street"])).is_none());
    assert!(check_name_matches_address(&tags, &names(&["10, Whitehall"])).is_none());
  }

  #[test]
  fn numeric_symbols_are_not_house_numbers() {
    let tags = tags(&[("addr:full", "½ Moon Street, Mayfair, London")]);

    assert!(check_name_matches_address(&tags, &names(&["½ Moon Street"])).is_none());
    assert!(check_name_matches_address(&tags, &names(&["Ⅻ Moon Street"])).is_none());
  }
}
