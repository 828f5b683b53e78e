//! Incident aggregation: dedupe by id, attach location names, rank.
//!
//! Every consumer of the incident list goes through [`rank_with`]; the other
//! entry points only choose the incident subset and the unknown-location label.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::RankError;
use crate::normalize;
use crate::types::*;

/// Label for incidents whose `location_id` is missing from the directory.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Dedupe, enrich and rank `incidents` against the `locations` directory.
///
/// Output is ordered by priority ascending, then datetime descending. Of
/// several incidents sharing an id only the first is kept.
pub fn rank_incidents(incidents: &[Incident], locations: &[Location]) -> Vec<IncidentWithLocation> {
  rank_with(incidents, locations, UNKNOWN_LOCATION)
}

/// Like [`rank_incidents`], restricted to incidents whose `location_id` is
/// exactly `location_id`. Child locations are not included.
pub fn rank_incidents_for_location(
  incidents: &[Incident],
  locations: &[Location],
  location_id: &str,
) -> Vec<IncidentWithLocation> {
  rank_with(at_location(incidents, location_id), locations, UNKNOWN_LOCATION)
}

/// Incidents whose `location_id` is exactly `location_id`.
fn at_location<'a>(
  incidents: &'a [Incident],
  location_id: &'a str,
) -> impl Iterator<Item = &'a Incident> {
  incidents.iter().filter(move |i| i.location_id == location_id)
}

/// Validate and rank one stdin request.
pub fn rank_request(req: &RankRequest, config: &Config) -> Result<Vec<IncidentWithLocation>, RankError> {
  normalize::validate_request(req)?;
  let unknown = config.unknown_location_name.as_str();
  let ranked = match &req.location_id {
    Some(location_id) => rank_with(at_location(&req.incidents, location_id), &req.locations, unknown),
    None => rank_with(&req.incidents, &req.locations, unknown),
  };
  Ok(ranked)
}

/// The shared pipeline behind every ranking entry point.
pub fn rank_with<'a, I>(incidents: I, locations: &[Location], unknown: &str) -> Vec<IncidentWithLocation>
where
  I: IntoIterator<Item = &'a Incident>,
{
  // Later duplicates of a location id overwrite earlier ones.
  let names: HashMap<&str, &str> = locations
    .iter()
    .map(|l| (l.id.as_str(), l.name.as_str()))
    .collect();

  let mut seen: HashSet<i64> = HashSet::new();
  let mut keyed: Vec<(Option<DateTime<Utc>>, IncidentWithLocation)> = Vec::new();
  let mut duplicates = 0usize;

  for incident in incidents {
    if !seen.insert(incident.id) {
      duplicates += 1;
      debug!(id = incident.id, "dropping duplicate incident");
      continue;
    }

    let timestamp = normalize::parse_datetime(&incident.datetime);
    if timestamp.is_none() {
      warn!(
        id = incident.id,
        datetime = %incident.datetime,
        "unparseable datetime; ranking after dated incidents of the same priority"
      );
    }

    let location_name = names
      .get(incident.location_id.as_str())
      .copied()
      .unwrap_or(unknown)
      .to_string();

    keyed.push((
      timestamp,
      IncidentWithLocation {
        incident: incident.clone(),
        location_name,
      },
    ));
  }

  // Stable: exact ties keep input order. `None` timestamps compare lowest.
  keyed.sort_by(|(ts_a, a), (ts_b, b)| {
    a.priority()
      .cmp(&b.priority())
      .then_with(|| ts_b.cmp(ts_a))
  });

  debug!(kept = keyed.len(), duplicates, "ranked incidents");
  keyed.into_iter().map(|(_, incident)| incident).collect()
}
