//! Core types for the incident ranker (JSON contracts + ranked output).

use serde::{Deserialize, Serialize};

use crate::error::RankError;

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// A named place. `id` is a slash-separated path such as `airport/t1/lobby`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
  pub id: String,
  pub name: String,
}

impl Location {
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
    }
  }
}

// ---------------------------------------------------------------------------
// Priority (1 = most urgent)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
  High = 1,
  Medium = 2,
  Low = 3,
}

impl Priority {
  pub fn as_u8(self) -> u8 {
    self as u8
  }
}

impl TryFrom<u8> for Priority {
  type Error = RankError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(Self::High),
      2 => Ok(Self::Medium),
      3 => Ok(Self::Low),
      _ => Err(RankError::validation("priority", "expected 1, 2 or 3")),
    }
  }
}

impl From<Priority> for u8 {
  fn from(p: Priority) -> Self {
    p.as_u8()
  }
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

/// One reported incident. Unknown fields (including a stale `locationName`)
/// are ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
  pub id: i64,
  pub name: String,
  pub priority: Priority,
  /// ISO 8601 timestamp, kept verbatim so output echoes the input.
  pub datetime: String,
  pub location_id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// An incident with its resolved location name, as handed to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentWithLocation {
  #[serde(flatten)]
  pub incident: Incident,
  pub location_name: String,
}

impl IncidentWithLocation {
  pub fn id(&self) -> i64 {
    self.incident.id
  }

  pub fn priority(&self) -> Priority {
    self.incident.priority
  }
}

impl From<IncidentWithLocation> for Incident {
  fn from(enriched: IncidentWithLocation) -> Self {
    enriched.incident
  }
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// One `rank` request read from stdin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
  pub incidents: Vec<Incident>,
  #[serde(default)]
  pub locations: Vec<Location>,
  /// Restrict to incidents at exactly this location.
  #[serde(default)]
  pub location_id: Option<String>,
}

/// Structured error output for rejected input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&RankError> for ErrorOutput {
  fn from(err: &RankError) -> Self {
    match err {
      RankError::Validation { field, reason } => Self::new(reason.clone()).with_field(field.clone()),
      _ => Self::new(err.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn priority_rejects_out_of_range() {
    let err = serde_json::from_str::<Priority>("4").unwrap_err();
    assert!(err.to_string().contains("expected 1, 2 or 3"));
    assert!(serde_json::from_str::<Priority>("0").is_err());
    assert_eq!(serde_json::from_str::<Priority>("2").unwrap(), Priority::Medium);
  }

  #[test]
  fn priority_orders_most_urgent_first() {
    assert!(Priority::High < Priority::Medium);
    assert!(Priority::Medium < Priority::Low);
  }

  #[test]
  fn incident_ignores_stale_location_name() {
    let json = r#"{
      "id": 7, "name": "Theft", "priority": 2,
      "datetime": "2018-01-22T01:04:24.000Z",
      "locationId": "airport/t2", "locationName": "stale"
    }"#;
    let incident: Incident = serde_json::from_str(json).unwrap();
    assert_eq!(incident.id, 7);
    assert_eq!(incident.location_id, "airport/t2");
    assert_eq!(incident.description, None);
  }

  #[test]
  fn enriched_incident_serializes_flat_camel_case() {
    let enriched = IncidentWithLocation {
      incident: Incident {
        id: 5,
        name: "Fire".into(),
        priority: Priority::High,
        datetime: "2018-01-22T11:25:18.000Z".into(),
        location_id: "airport/t2".into(),
        description: None,
      },
      location_name: "T2".into(),
    };
    let value = serde_json::to_value(&enriched).unwrap();
    assert_eq!(
      value,
      serde_json::json!({
        "id": 5,
        "name": "Fire",
        "priority": 1,
        "datetime": "2018-01-22T11:25:18.000Z",
        "locationId": "airport/t2",
        "locationName": "T2"
      })
    );
  }

  #[test]
  fn error_output_carries_validation_field() {
    let out = ErrorOutput::from(&RankError::validation("locationId", "must not be empty"));
    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["error"], true);
    assert_eq!(value["field"], "locationId");
    assert_eq!(value["message"], "must not be empty");
  }
}
