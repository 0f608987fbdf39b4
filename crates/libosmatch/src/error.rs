#[derive(Debug, thiserror::Error)]
pub enum OsmatchError {
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error("invalid entity type catalog: {0}")]
  InvalidCatalog(#[from] serde_json::Error),
  #[error("invalid category pattern: {0}")]
  InvalidPattern(#[from] regex::Error),
  #[error(transparent)]
  IoError(#[from] std::io::Error),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}
