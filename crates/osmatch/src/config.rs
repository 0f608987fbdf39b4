use std::{
  env::{self, VarError},
  fmt::Display,
  path::PathBuf,
  str::FromStr,
};

use libosmatch::prelude::*;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct Config {
  pub env: Env,

  // Matching settings
  pub entity_types: Option<PathBuf>,
  pub default_max_dist: f64,

  // Batch
  pub input: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      env: Env::Dev,
      entity_types: None,
      default_max_dist: DEFAULT_MAX_DIST,
      input: None,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    let config = Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      entity_types: env::var("ENTITY_TYPES").ok().filter(|path| !path.is_empty()).map(PathBuf::from),
      default_max_dist: parse_env("DEFAULT_MAX_DIST", DEFAULT_MAX_DIST)?,
      input: env::var("INPUT").ok().filter(|path| !path.is_empty() && path != "-").map(PathBuf::from),
    };

    if !config.default_max_dist.is_finite() || config.default_max_dist <= 0.0 {
      return Err(AppError::ConfigError("DEFAULT_MAX_DIST must be a positive number of kilometers".into()));
    }

    Ok(config)
  }

  /// Loads the entity type catalog, if any, into a ready-to-use matcher.
  pub fn matcher(&self) -> Result<Matcher, AppError> {
    let catalog = match &self.entity_types {
      Some(path) => EntityTypes::from_path(path)?,
      None => {
        tracing::warn!("ENTITY_TYPES is not set, matching without entity types");

        EntityTypes::new(Vec::new())?
      }
    };

    Ok(Matcher::new(catalog).with_default_max_dist(self.default_max_dist))
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(default),
    Ok(value) => Ok(value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}")))?),
    Err(err) => match err {
      VarError::NotPresent => Ok(default),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}")).into()),
    },
  }
}
