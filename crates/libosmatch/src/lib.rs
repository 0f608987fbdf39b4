mod candidates;
mod disambiguation;
mod error;
mod matcher;
mod matching;
mod model;

pub mod catalog;

pub mod prelude {
  pub use crate::candidates::{PlanetRow, PlanetTable, osm_id_and_type};
  pub use crate::catalog::{DEFAULT_MAX_DIST, EntityType, EntityTypes};
  pub use crate::disambiguation::{Decision, Note, disambiguate};
  pub use crate::error::OsmatchError;
  pub use crate::matcher::Matcher;
  pub use crate::matching::{
    MatchResult, MatchType, NameSource, SourceKind,
    address::check_name_matches_address,
    aggregate::{candidate_names, check_for_match, get_all_matches},
    initials::initials_match,
    name::{name_match, name_match_main},
    normalize::{normalize_name, tidy_name},
    references::{ReferenceNames, get_wikidata_names},
  };
  pub use crate::model::{Candidate, Item, OsmType, Tags, WikidataEntity};
}
