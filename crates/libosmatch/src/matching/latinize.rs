use any_ascii::any_ascii;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Folds a string to an ASCII approximation: accents are decomposed and
/// dropped first, remaining non-ASCII characters are transliterated.
pub(crate) fn latinize(value: &str) -> String {
  if value.is_ascii() {
    return value.to_string();
  }

  let stripped = value.nfkd().filter(|c| !is_combining_mark(*c)).collect::<String>();

  if stripped.is_ascii() {
    return stripped;
  }

  any_ascii(&stripped)
}
