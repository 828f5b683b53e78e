//! Human-readable labels and timestamp formatting for text output.

use chrono::{DateTime, Utc};

use crate::normalize;
use crate::types::{IncidentWithLocation, Priority};

pub fn priority_label(priority: Priority) -> &'static str {
  match priority {
    Priority::High => "High",
    Priority::Medium => "Medium",
    Priority::Low => "Low",
  }
}

/// Hex colour conventionally used for a priority badge.
pub fn priority_color(priority: Priority) -> &'static str {
  match priority {
    Priority::High => "#f44336",
    Priority::Medium => "#ff9800",
    Priority::Low => "#2196f3",
  }
}

// Unparseable timestamps are echoed back unchanged by every formatter.

/// `1/22/2018, 11:25:18 AM`
pub fn format_date_time(raw: &str) -> String {
  format_with(raw, "%-m/%-d/%Y, %-I:%M:%S %p")
}

/// `1/22/2018, 11:25 AM`
pub fn format_date_time_short(raw: &str) -> String {
  format_with(raw, "%-m/%-d/%Y, %-I:%M %p")
}

/// `Jan 22, 2018`
pub fn format_date(raw: &str) -> String {
  format_with(raw, "%b %-d, %Y")
}

/// `11:25:18 AM`
pub fn format_time(raw: &str) -> String {
  format_with(raw, "%-I:%M:%S %p")
}

fn format_with(raw: &str, pattern: &str) -> String {
  match normalize::parse_datetime(raw) {
    Some(dt) => dt.format(pattern).to_string(),
    None => raw.to_string(),
  }
}

/// Distance from now, e.g. `3 days ago` or `in about 2 hours`.
pub fn format_relative_time(raw: &str) -> String {
  format_relative_time_from(raw, Utc::now())
}

/// [`format_relative_time`] against a fixed `now`.
pub fn format_relative_time_from(raw: &str, now: DateTime<Utc>) -> String {
  let Some(dt) = normalize::parse_datetime(raw) else {
    return raw.to_string();
  };
  let seconds = (now - dt).num_seconds();
  let distance = distance_in_words(seconds.unsigned_abs());
  if seconds >= 0 {
    format!("{} ago", distance)
  } else {
    format!("in {}", distance)
  }
}

fn distance_in_words(seconds: u64) -> String {
  const DAY: u64 = 1440;
  const MONTH: u64 = 43_200;
  const YEAR: u64 = 525_600;

  let minutes = (seconds + 30) / 60;
  match minutes {
    0 => "less than a minute".to_string(),
    1 => "1 minute".to_string(),
    2..=44 => format!("{} minutes", minutes),
    45..=89 => "about 1 hour".to_string(),
    90..=1439 => format!("about {} hours", (minutes + 30) / 60),
    1440..=2519 => "1 day".to_string(),
    2520..=43_199 => format!("{} days", (minutes + DAY / 2) / DAY),
    43_200..=86_399 => format!("about {} months", (minutes + MONTH / 2) / MONTH),
    _ if minutes < YEAR => format!("{} months", (minutes + MONTH / 2) / MONTH),
    _ => {
      let years = minutes / YEAR;
      let rest = minutes % YEAR;
      if rest < YEAR / 4 {
        format!("about {} {}", years, plural(years, "year"))
      } else if rest < YEAR * 3 / 4 {
        format!("over {} {}", years, plural(years, "year"))
      } else {
        format!("almost {} years", years + 1)
      }
    }
  }
}

fn plural(n: u64, unit: &str) -> String {
  if n == 1 {
    unit.to_string()
  } else {
    format!("{}s", unit)
  }
}

/// One aligned line per incident for terminal output.
pub fn format_row(item: &IncidentWithLocation) -> String {
  format!(
    "{:>4}  {:<6}  {:<24}  {:<20}  {}",
    item.id(),
    priority_label(item.priority()),
    format_date_time(&item.incident.datetime),
    item.incident.name,
    item.location_name,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Incident;

  #[test]
  fn labels_and_colors() {
    assert_eq!(priority_label(Priority::High), "High");
    assert_eq!(priority_label(Priority::Low), "Low");
    assert_eq!(priority_color(Priority::Medium), "#ff9800");
  }

  #[test]
  fn formats_in_utc() {
    assert_eq!(format_date("2018-01-22T11:25:18.000Z"), "Jan 22, 2018");
    assert_eq!(format_date_time("2018-01-22T11:25:18.000Z"), "1/22/2018, 11:25:18 AM");
    assert_eq!(format_date_time_short("2018-01-21T22:54:12.000Z"), "1/21/2018, 10:54 PM");
    assert_eq!(format_time("2018-01-22T07:13:00.000Z"), "7:13:00 AM");
  }

  #[test]
  fn garbage_is_echoed() {
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(format_relative_time("soon"), "soon");
  }

  #[test]
  fn relative_time_in_words() {
    let now = normalize::parse_datetime("2020-01-02T00:00:00Z").unwrap();
    let at = |raw: &str| format_relative_time_from(raw, now);
    assert_eq!(at("2020-01-01"), "1 day ago");
    assert_eq!(at("2020-01-01T23:59:50Z"), "less than a minute ago");
    assert_eq!(at("2020-01-01T23:55:00Z"), "5 minutes ago");
    assert_eq!(at("2020-01-01T23:00:00Z"), "about 1 hour ago");
    assert_eq!(at("2020-01-01T21:00:00Z"), "about 3 hours ago");
    assert_eq!(at("2019-12-26"), "7 days ago");
    assert_eq!(at("2019-11-15"), "about 2 months ago");
    assert_eq!(at("2018-01-02"), "about 2 years ago");
    assert_eq!(at("2020-01-02T02:00:00Z"), "in about 2 hours");
  }

  #[test]
  fn row_contains_label_and_location() {
    let item = IncidentWithLocation {
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
    let row = format_row(&item);
    assert!(row.starts_with("   5  High"));
    assert!(row.contains("1/22/2018, 11:25:18 AM"));
    assert!(row.ends_with("T2"));
  }
}
