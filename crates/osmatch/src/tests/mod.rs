use libosmatch::prelude::*;

use crate::dto::Batch;

mod log_writer;

const CATALOG: &str = r#"[
  {"cats": ["Schools"], "tags": ["amenity=school", "building=school"], "trim": ["school"]},
  {"cats": ["Railway stations"], "tags": ["railway=station"], "trim": ["station"], "max_dist": 1}
]"#;

fn matcher() -> Matcher {
  Matcher::new(EntityTypes::from_reader(CATALOG.as_bytes()).unwrap())
}

fn batch(json: &str) -> Batch {
  serde_json::from_str(json).unwrap()
}

fn output_lines(out: &[u8]) -> Vec<serde_json::Value> {
  std::str::from_utf8(out).unwrap().lines().map(|line| serde_json::from_str(line).unwrap()).collect()
}
