//! Incident suppliers.
//!
//! A source hands over fully materialized records; ranking happens later in
//! [`crate::service`]. Errors from a source are surfaced to the caller as-is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::RankError;
use crate::types::{Incident, Location};

pub trait IncidentSource {
  type Error: std::error::Error + Send + Sync + 'static;

  fn locations(&self) -> Result<Vec<Location>, Self::Error>;

  /// Incidents reported at `location_id` or anywhere beneath it.
  fn incidents_by_location(&self, location_id: &str) -> Result<Vec<Incident>, Self::Error>;
}

/// True when `location_id` is `ancestor` or nested under it (`a/b` is under `a`).
pub fn is_within(location_id: &str, ancestor: &str) -> bool {
  match location_id.strip_prefix(ancestor) {
    Some(rest) => rest.is_empty() || rest.starts_with('/'),
    None => false,
  }
}

#[derive(Debug, Deserialize)]
struct DataFile {
  #[serde(default)]
  locations: Vec<Location>,
  incidents: Vec<Incident>,
}

/// Reads `{ "locations": [...], "incidents": [...] }` from disk on every query.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
  path: PathBuf,
}

impl JsonFileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn load(&self) -> Result<DataFile, RankError> {
    let raw = fs::read_to_string(&self.path).map_err(|source| RankError::Io {
      path: self.path.clone(),
      source,
    })?;
    let data: DataFile = serde_json::from_str(&raw)?;
    debug!(
      path = %self.path.display(),
      locations = data.locations.len(),
      incidents = data.incidents.len(),
      "loaded data file"
    );
    Ok(data)
  }
}

impl IncidentSource for JsonFileSource {
  type Error = RankError;

  fn locations(&self) -> Result<Vec<Location>, Self::Error> {
    Ok(self.load()?.locations)
  }

  fn incidents_by_location(&self, location_id: &str) -> Result<Vec<Incident>, Self::Error> {
    Ok(
      self
        .load()?
        .incidents
        .into_iter()
        .filter(|i| is_within(&i.location_id, location_id))
        .collect(),
    )
  }
}
