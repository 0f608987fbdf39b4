use libosmatch::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error("invalid entity types catalog: {0}")]
  InvalidCatalog(String),
  #[error("invalid input batch: {0}")]
  InvalidInput(#[from] serde_json::Error),
  #[error("could not read input: {0}")]
  IoError(#[from] std::io::Error),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}

impl From<OsmatchError> for AppError {
  fn from(value: OsmatchError) -> Self {
    match value {
      OsmatchError::ConfigError(err) => AppError::ConfigError(err),
      OsmatchError::InvalidCatalog(err) => AppError::InvalidCatalog(err.to_string()),
      OsmatchError::InvalidPattern(err) => AppError::InvalidCatalog(err.to_string()),
      OsmatchError::IoError(err) => AppError::IoError(err),
      OsmatchError::OtherError(err) => AppError::OtherError(err),
    }
  }
}

#[cfg(test)]
mod tests {
  use libosmatch::prelude::*;

  use super::AppError;

  #[test]
  fn from_library_errors() {
    let err = EntityTypes::from_reader("{".as_bytes()).err().unwrap();

    assert!(matches!(AppError::from(err), AppError::InvalidCatalog(_)));
    assert!(matches!(AppError::from(OsmatchError::ConfigError("nope".into())), AppError::ConfigError(msg) if msg == "nope"));

    let err = EntityTypes::from_path("/nonexistent/entity_types.json").err().unwrap();

    assert!(matches!(AppError::from(err), AppError::IoError(_)));
  }
}
