//! Timestamp parsing and request validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::RankError;
use crate::types::RankRequest;

// Tried in order after RFC 3339. `%z` covers basic offsets such as `+0200`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an incident timestamp.
///
/// Accepts RFC 3339 (`2018-01-22T11:25:18.000Z`) and the other common ISO 8601
/// shapes: minute precision (`2018-01-23T07:13Z`), basic offsets (`+0200`),
/// zone-less times (read as UTC) and bare dates (UTC midnight). Anything else
/// yields `None`, which ranks older than every parseable timestamp.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
  let raw = raw.trim();
  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Some(dt.with_timezone(&Utc));
  }
  for fmt in OFFSET_FORMATS {
    if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
      return Some(dt.with_timezone(&Utc));
    }
  }

  let naive = raw.strip_suffix(['Z', 'z']).unwrap_or(raw);
  for fmt in NAIVE_FORMATS {
    if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
      return Some(dt.and_utc());
    }
  }
  NaiveDate::parse_from_str(naive, "%Y-%m-%d")
    .ok()
    .and_then(|date| date.and_hms_opt(0, 0, 0))
    .map(|midnight| midnight.and_utc())
}

/// Reject requests that cannot be ranked meaningfully.
///
/// Directory entries are never rejected; an entry nothing matches is harmless.
pub fn validate_request(req: &RankRequest) -> Result<(), RankError> {
  if let Some(location_id) = &req.location_id {
    if location_id.trim().is_empty() {
      return Err(RankError::validation("locationId", "must not be empty"));
    }
  }
  Ok(())
}
