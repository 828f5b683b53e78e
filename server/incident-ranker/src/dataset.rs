//! Built-in airport dataset served when no data file is given.

use std::convert::Infallible;

use crate::source::IncidentSource;
use crate::types::{Incident, Location, Priority};

/// Seven airport locations and five incidents, with a fixed per-location
/// lookup where a parent location also lists its children's incidents.
#[derive(Debug, Clone)]
pub struct StaticDataset {
  locations: Vec<Location>,
  incidents: Vec<Incident>,
}

impl Default for StaticDataset {
  fn default() -> Self {
    Self::new()
  }
}

impl StaticDataset {
  pub fn new() -> Self {
    Self {
      locations: airport_locations(),
      incidents: airport_incidents(),
    }
  }

  /// Incidents reported under `location_id`, in lookup order.
  ///
  /// A parent location lists its children's incidents too; unknown ids list
  /// nothing.
  pub fn incidents_for(&self, location_id: &str) -> Vec<Incident> {
    let picks: &[usize] = match location_id {
      "airport" => &[0, 1, 2, 3, 4],
      "airport/t1" => &[0, 1, 2],
      "airport/t1/lobby" => &[0, 1],
      "airport/t2" => &[3, 4],
      _ => &[],
    };
    picks.iter().map(|&i| self.incidents[i].clone()).collect()
  }
}

impl IncidentSource for StaticDataset {
  type Error = Infallible;

  fn locations(&self) -> Result<Vec<Location>, Self::Error> {
    Ok(self.locations.clone())
  }

  fn incidents_by_location(&self, location_id: &str) -> Result<Vec<Incident>, Self::Error> {
    Ok(self.incidents_for(location_id))
  }
}

fn airport_locations() -> Vec<Location> {
  vec![
    Location::new("airport", "Airport"),
    Location::new("airport/t1", "T1"),
    Location::new("airport/taxi_zone", "Taxi Zone"),
    Location::new("airport/carpark", "Carpark"),
    Location::new("airport/t1/lobby", "T1 Lobby"),
    Location::new("airport/t2", "T2"),
    Location::new("airport/t2/lobby", "T2 Lobby"),
  ]
}

fn airport_incidents() -> Vec<Incident> {
  let incident = |id, name: &str, priority, datetime: &str, location_id: &str, description: &str| Incident {
    id,
    name: name.to_string(),
    priority,
    datetime: datetime.to_string(),
    location_id: location_id.to_string(),
    description: Some(description.to_string()),
  };

  vec![
    incident(
      1,
      "Liquid Spill",
      Priority::Low,
      "2018-01-21T22:54:12.000Z",
      "airport/t1/lobby",
      "Small water spill near gate entrance, maintenance team notified for cleanup",
    ),
    incident(
      2,
      "Lost Property",
      Priority::Low,
      "2018-01-23T18:25:43.511Z",
      "airport/t1/lobby",
      "Black backpack found near seating area, handed to security office for safekeeping",
    ),
    incident(
      3,
      "Unattended Baggage",
      Priority::High,
      "2018-01-22T07:13:00.000Z",
      "airport/t1",
      "Suspicious unattended luggage reported, security team dispatched to investigate immediately",
    ),
    incident(
      4,
      "Theft",
      Priority::Medium,
      "2018-01-22T01:04:24.000Z",
      "airport/t2",
      "Passenger reported stolen wallet from shopping area, CCTV footage being reviewed",
    ),
    incident(
      5,
      "Fire",
      Priority::High,
      "2018-01-22T11:25:18.000Z",
      "airport/t2",
      "Smoke detected in electrical room, fire alarm activated, evacuation procedures initiated",
    ),
  ]
}
