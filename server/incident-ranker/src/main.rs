//! Binary entrypoint.
//!
//! `rank` reads one JSON document from stdin and writes the ranked array to
//! stdout; invalid input produces an ErrorOutput object and exit status 1.
//! The listing commands read the built-in dataset or a `--data` file.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use incident_ranker::cli::{Cli, Command, DataArgs};
use incident_ranker::types::ErrorOutput;
use incident_ranker::{display, logging, rank};
use incident_ranker::{
  Config, IncidentService, IncidentSource, IncidentWithLocation, JsonFileSource, Location, RankError,
  RankRequest, StaticDataset,
};

fn main() -> ExitCode {
  let cli = Cli::parse();
  logging::init_logging(cli.verbosity());

  match run(cli) {
    Ok(code) => code,
    Err(e) => {
      let _ = writeln!(io::stderr(), "incident-ranker: {:#}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
  let config = Config::from_env().context("reading configuration")?;

  match cli.command {
    Command::Rank => rank_stdin(&config),
    Command::Incidents { location, pretty, data } => with_source(&data, config, |service| {
      let ranked = match &location {
        Some(id) => service.incidents_by_location(id)?,
        None => service.all_incidents()?,
      };
      if pretty {
        let mut out = io::stdout().lock();
        for item in &ranked {
          writeln!(out, "{}", display::format_row(item))?;
        }
        Ok(())
      } else {
        write_json(&ranked)
      }
    }),
    Command::Locations { data } => with_source(&data, config, |service| write_json(&service.locations()?)),
    Command::Show { id, data } => with_source(&data, config, |service| match service.incident_by_id(id)? {
      Some(item) => write_json(&item),
      None => anyhow::bail!("incident {} not found", id),
    }),
  }
}

fn rank_stdin(config: &Config) -> anyhow::Result<ExitCode> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw).context("reading stdin")?;

  let ranked = serde_json::from_str::<RankRequest>(&raw)
    .map_err(RankError::from)
    .and_then(|req| rank::rank_request(&req, config));

  match ranked {
    Ok(ranked) => {
      write_json(&ranked)?;
      Ok(ExitCode::SUCCESS)
    }
    Err(e) => {
      tracing::warn!(error = %e, "rejected rank request");
      write_json(&ErrorOutput::from(&e))?;
      Ok(ExitCode::FAILURE)
    }
  }
}

fn with_source<F>(data: &DataArgs, config: Config, f: F) -> anyhow::Result<ExitCode>
where
  F: FnOnce(&dyn Listing) -> anyhow::Result<()>,
{
  let listed = match &data.data {
    Some(path) => f(&IncidentService::new(JsonFileSource::new(path), config)),
    None => f(&IncidentService::new(StaticDataset::new(), config)),
  };
  listed.with_context(|| match &data.data {
    Some(path) => format!("listing from {}", path.display()),
    None => "listing from built-in dataset".to_string(),
  })?;
  Ok(ExitCode::SUCCESS)
}

/// Object-safe view of `IncidentService` so one closure serves every source.
trait Listing {
  fn all_incidents(&self) -> anyhow::Result<Vec<IncidentWithLocation>>;
  fn incidents_by_location(&self, id: &str) -> anyhow::Result<Vec<IncidentWithLocation>>;
  fn locations(&self) -> anyhow::Result<Vec<Location>>;
  fn incident_by_id(&self, id: i64) -> anyhow::Result<Option<IncidentWithLocation>>;
}

impl<S: IncidentSource> Listing for IncidentService<S> {
  fn all_incidents(&self) -> anyhow::Result<Vec<IncidentWithLocation>> {
    Ok(IncidentService::all_incidents(self)?)
  }

  fn incidents_by_location(&self, id: &str) -> anyhow::Result<Vec<IncidentWithLocation>> {
    Ok(IncidentService::incidents_by_location(self, id)?)
  }

  fn locations(&self) -> anyhow::Result<Vec<Location>> {
    Ok(IncidentService::locations(self)?)
  }

  fn incident_by_id(&self, id: i64) -> anyhow::Result<Option<IncidentWithLocation>> {
    Ok(IncidentService::incident_by_id(self, id)?)
  }
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
  let mut out = io::BufWriter::new(io::stdout().lock());
  serde_json::to_writer(&mut out, value)?;
  writeln!(out)?;
  out.flush()?;
  Ok(())
}
