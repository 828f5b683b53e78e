//! Ranker configuration with sane defaults and environment overrides.

use crate::error::RankError;

pub const ENV_ROOT_LOCATION: &str = "INCIDENT_RANKER_ROOT_LOCATION";
pub const ENV_PAGE_SIZE: &str = "INCIDENT_RANKER_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Label attached to incidents whose location id is not in the directory.
  pub unknown_location_name: String,
  /// Location whose incident set is "all incidents".
  pub root_location_id: String,
  /// Rows per page for a fresh view state.
  pub page_size: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      unknown_location_name: "Unknown".to_string(),
      root_location_id: "airport".to_string(),
      page_size: 10,
    }
  }
}

impl Config {
  /// Defaults overlaid with `INCIDENT_RANKER_*` environment variables.
  pub fn from_env() -> Result<Self, RankError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as [`Config::from_env`] but reads variables through `lookup`.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, RankError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(root) = lookup(ENV_ROOT_LOCATION) {
      let root = root.trim();
      if root.is_empty() {
        return Err(RankError::validation(ENV_ROOT_LOCATION, "must not be empty"));
      }
      config.root_location_id = root.to_string();
    }

    if let Some(raw) = lookup(ENV_PAGE_SIZE) {
      config.page_size = raw
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| RankError::validation(ENV_PAGE_SIZE, "expected a positive integer"))?;
    }

    Ok(config)
  }
}
