//! Filtering and re-sorting of ranked incident lists.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize;
use crate::types::{IncidentWithLocation, Priority};

/// Narrowing criteria. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
  pub priority: Vec<Priority>,
  /// Exact location ids.
  pub location: Vec<String>,
  pub date_from: Option<DateTime<Utc>>,
  pub date_to: Option<DateTime<Utc>>,
  /// Case-insensitive substring over name, description and location name.
  pub search_term: String,
}

impl FilterConfig {
  pub fn is_empty(&self) -> bool {
    self == &Self::default()
  }

  pub fn matches(&self, item: &IncidentWithLocation) -> bool {
    let incident = &item.incident;

    if !self.priority.is_empty() && !self.priority.contains(&incident.priority) {
      return false;
    }
    if !self.location.is_empty() && !self.location.contains(&incident.location_id) {
      return false;
    }

    if self.date_from.is_some() || self.date_to.is_some() {
      // Undated incidents cannot satisfy a date bound.
      let Some(at) = normalize::parse_datetime(&incident.datetime) else {
        return false;
      };
      if self.date_from.is_some_and(|from| at < from) {
        return false;
      }
      if self.date_to.is_some_and(|to| at > to) {
        return false;
      }
    }

    let needle = self.search_term.trim().to_lowercase();
    if needle.is_empty() {
      return true;
    }
    incident.name.to_lowercase().contains(&needle)
      || item.location_name.to_lowercase().contains(&needle)
      || incident
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&needle))
  }

  pub fn apply(&self, items: &[IncidentWithLocation]) -> Vec<IncidentWithLocation> {
    items.iter().filter(|i| self.matches(i)).cloned().collect()
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
  Id,
  Name,
  #[default]
  Priority,
  Datetime,
  LocationId,
  LocationName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
  #[default]
  Asc,
  Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
  pub field: SortField,
  pub direction: SortDirection,
}

impl SortConfig {
  pub fn new(field: SortField, direction: SortDirection) -> Self {
    Self { field, direction }
  }

  fn compare(&self, a: &IncidentWithLocation, b: &IncidentWithLocation) -> Ordering {
    let ord = match self.field {
      SortField::Id => a.id().cmp(&b.id()),
      SortField::Name => a.incident.name.cmp(&b.incident.name),
      SortField::Priority => a.priority().cmp(&b.priority()),
      SortField::Datetime => normalize::parse_datetime(&a.incident.datetime)
        .cmp(&normalize::parse_datetime(&b.incident.datetime)),
      SortField::LocationId => a.incident.location_id.cmp(&b.incident.location_id),
      SortField::LocationName => a.location_name.cmp(&b.location_name),
    };
    match self.direction {
      SortDirection::Asc => ord,
      SortDirection::Desc => ord.reverse(),
    }
  }

  /// Stable sort: rows equal on the chosen field keep their current order,
  /// so sorting a ranked list by priority leaves it unchanged.
  pub fn sort(&self, items: &mut [IncidentWithLocation]) {
    items.sort_by(|a, b| self.compare(a, b));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dataset::StaticDataset;
  use crate::rank;
  use crate::source::IncidentSource;
  use chrono::TimeZone;

  fn ranked() -> Vec<IncidentWithLocation> {
    let data = StaticDataset::new();
    rank::rank_incidents(&data.incidents_for("airport"), &data.locations().unwrap())
  }

  fn ids(items: &[IncidentWithLocation]) -> Vec<i64> {
    items.iter().map(|i| i.id()).collect()
  }

  #[test]
  fn empty_filter_matches_everything() {
    let filter = FilterConfig::default();
    assert!(filter.is_empty());
    assert_eq!(filter.apply(&ranked()).len(), 5);
  }

  #[test]
  fn priority_and_location_filters_combine() {
    let filter = FilterConfig {
      priority: vec![Priority::High],
      location: vec!["airport/t2".into()],
      ..FilterConfig::default()
    };
    assert_eq!(ids(&filter.apply(&ranked())), vec![5]);
  }

  #[test]
  fn date_window_is_inclusive() {
    let filter = FilterConfig {
      date_from: Some(Utc.with_ymd_and_hms(2018, 1, 22, 7, 13, 0).unwrap()),
      date_to: Some(Utc.with_ymd_and_hms(2018, 1, 22, 23, 59, 59).unwrap()),
      ..FilterConfig::default()
    };
    assert_eq!(ids(&filter.apply(&ranked())), vec![5, 3]);
  }

  #[test]
  fn search_covers_description_and_location() {
    let by_description = FilterConfig {
      search_term: "CCTV".into(),
      ..FilterConfig::default()
    };
    assert_eq!(ids(&by_description.apply(&ranked())), vec![4]);

    let by_location = FilterConfig {
      search_term: " t1 lobby ".into(),
      ..FilterConfig::default()
    };
    assert_eq!(ids(&by_location.apply(&ranked())), vec![2, 1]);
  }

  #[test]
  fn sort_by_priority_keeps_ranked_order() {
    let mut items = ranked();
    SortConfig::default().sort(&mut items);
    assert_eq!(ids(&items), vec![5, 3, 4, 2, 1]);
  }

  #[test]
  fn sort_by_datetime_descending() {
    let mut items = ranked();
    SortConfig::new(SortField::Datetime, SortDirection::Desc).sort(&mut items);
    assert_eq!(ids(&items), vec![2, 5, 3, 4, 1]);
  }

  #[test]
  fn sort_config_uses_camel_case_json() {
    let json = serde_json::to_string(&SortConfig::new(SortField::LocationName, SortDirection::Desc)).unwrap();
    assert_eq!(json, r#"{"field":"locationName","direction":"desc"}"#);
  }
}
