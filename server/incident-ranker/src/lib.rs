//! Incident Ranker: one shared aggregation for every incident list consumer.
//!
//! Dedupes incidents by id (first occurrence wins), attaches location names
//! ("Unknown" when unmatched) and ranks by priority, then most recent first.
//!
//! No DB, no network; pure computation over in-memory records.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod filter;
pub mod logging;
pub mod normalize;
pub mod rank;
pub mod service;
pub mod source;
pub mod types;
pub mod view;

pub use config::Config;
pub use dataset::StaticDataset;
pub use error::RankError;
pub use rank::{rank_incidents, rank_incidents_for_location, UNKNOWN_LOCATION};
pub use service::{IncidentService, ServiceError};
pub use source::{IncidentSource, JsonFileSource};
pub use types::{Incident, IncidentWithLocation, Location, Priority, RankRequest};
pub use view::ViewState;
