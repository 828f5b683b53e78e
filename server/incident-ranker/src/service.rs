//! Incident service: fetch from a source, then rank through the shared pipeline.

use thiserror::Error;

use crate::config::Config;
use crate::dataset::StaticDataset;
use crate::error::RankError;
use crate::rank;
use crate::source::IncidentSource;
use crate::types::{IncidentWithLocation, Location};

#[derive(Debug, Error)]
pub enum ServiceError<E> {
  /// The source failed; passed through unchanged.
  #[error(transparent)]
  Source(E),

  #[error(transparent)]
  Rank(#[from] RankError),
}

#[derive(Debug)]
pub struct IncidentService<S> {
  source: S,
  config: Config,
}

impl IncidentService<StaticDataset> {
  pub fn with_defaults() -> Self {
    Self::new(StaticDataset::new(), Config::default())
  }
}

impl<S: IncidentSource> IncidentService<S> {
  pub fn new(source: S, config: Config) -> Self {
    Self { source, config }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Every incident under the configured root location, ranked.
  pub fn all_incidents(&self) -> Result<Vec<IncidentWithLocation>, ServiceError<S::Error>> {
    self.incidents_by_location(&self.config.root_location_id)
  }

  /// Incidents the source reports for `location_id`, ranked.
  pub fn incidents_by_location(
    &self,
    location_id: &str,
  ) -> Result<Vec<IncidentWithLocation>, ServiceError<S::Error>> {
    if location_id.trim().is_empty() {
      return Err(RankError::validation("locationId", "must not be empty").into());
    }
    let locations = self.source.locations().map_err(ServiceError::Source)?;
    let incidents = self
      .source
      .incidents_by_location(location_id)
      .map_err(ServiceError::Source)?;
    Ok(rank::rank_with(
      &incidents,
      &locations,
      &self.config.unknown_location_name,
    ))
  }

  pub fn locations(&self) -> Result<Vec<Location>, ServiceError<S::Error>> {
    self.source.locations().map_err(ServiceError::Source)
  }

  /// A single enriched incident from the root listing.
  pub fn incident_by_id(&self, id: i64) -> Result<Option<IncidentWithLocation>, ServiceError<S::Error>> {
    Ok(self.all_incidents()?.into_iter().find(|i| i.id() == id))
  }
}
