//! Command-line arguments for the `incident-ranker` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::logging::Verbosity;

/// incident-ranker - dedupe, enrich and rank incident lists
///
/// Without `--data`, listings come from the built-in airport dataset.
#[derive(Debug, Parser)]
#[command(name = "incident-ranker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
  /// Increase verbosity (-v for debug, -vv for trace)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Suppress all log output except errors
  #[arg(short, long, global = true)]
  pub quiet: bool,

  #[command(subcommand)]
  pub command: Command,
}

impl Cli {
  pub fn verbosity(&self) -> Verbosity {
    Verbosity::from_flags(self.quiet, self.verbose)
  }
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Rank a `{incidents, locations, locationId?}` JSON document read from stdin
  Rank,

  /// List ranked incidents, optionally for one location and its children
  Incidents {
    /// Location id such as `airport/t1`; defaults to the root location
    #[arg(short, long, value_name = "ID")]
    location: Option<String>,

    /// Print aligned text rows instead of JSON
    #[arg(long)]
    pretty: bool,

    #[command(flatten)]
    data: DataArgs,
  },

  /// List the location directory
  Locations {
    #[command(flatten)]
    data: DataArgs,
  },

  /// Show one ranked incident by id
  Show {
    id: i64,

    #[command(flatten)]
    data: DataArgs,
  },
}

#[derive(Debug, Clone, Args)]
pub struct DataArgs {
  /// JSON file with `locations` and `incidents` arrays
  #[arg(short, long, value_name = "FILE", env = "INCIDENT_RANKER_DATA")]
  pub data: Option<PathBuf>,
}
