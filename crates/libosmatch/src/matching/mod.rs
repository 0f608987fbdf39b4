use serde::{Deserialize, Serialize};

pub(crate) mod address;
pub(crate) mod aggregate;
pub(crate) mod initials;
pub(crate) mod latinize;
pub(crate) mod name;
pub(crate) mod normalize;
pub(crate) mod references;

/// How strongly a reference name and a candidate name agree.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
  /// Equal once normalized.
  Good,
  /// Equal once a known ending (such as "building") was removed.
  Trim,
  /// The reference name is the candidate's street address.
  Address,
  /// One name is the initials of the other.
  Initials,
  /// One name is the initials of the other, once a known ending was removed.
  InitialsTrim,
}

impl MatchType {
  /// Relative confidence: `good` above `address`/`trim` above the initials kinds.
  pub fn rank(self) -> u8 {
    match self {
      MatchType::Good => 3,
      MatchType::Trim | MatchType::Address => 2,
      MatchType::Initials | MatchType::InitialsTrim => 1,
    }
  }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
  Label,
  Alias,
  Sitelink,
}

/// Where a reference name came from: a label, alias or sitelink, keyed by
/// language or site code.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct NameSource {
  pub kind: SourceKind,
  pub key: String,
}

impl NameSource {
  pub fn new(kind: SourceKind, key: &str) -> NameSource {
    NameSource { kind, key: key.to_string() }
  }
}

/// A match between one reference name and one candidate tag.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MatchResult {
  pub match_type: MatchType,
  pub reference_name: String,
  pub reference_source: Vec<NameSource>,
  pub candidate_name: String,
  pub candidate_key: String,
}

/// Keeps only word characters (letters, digits, underscore) and `@`.
pub(crate) fn strip_non_word(value: &str) -> String {
  value.chars().filter(|c| is_word(*c)).collect()
}

/// Like [`strip_non_word`], but also keeps commas and spaces.
pub(crate) fn strip_keep_commas(value: &str) -> String {
  value.chars().filter(|c| is_word(*c) || *c == ',' || *c == ' ').collect()
}

/// Whether the value is made only of the ASCII digits `0` to `9`.
pub(crate) fn is_number(value: &str) -> bool {
  !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[inline(always)]
fn is_word(c: char) -> bool {
  c.is_alphanumeric() || c == '_' || c == '@'
}
