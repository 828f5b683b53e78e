//! Tracing setup for the binary. Logs go to stderr; stdout carries JSON only.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
  /// Errors only.
  Quiet,
  #[default]
  Normal,
  Verbose,
  Trace,
}

impl Verbosity {
  pub fn from_flags(quiet: bool, verbose: u8) -> Self {
    if quiet {
      return Self::Quiet;
    }
    match verbose {
      0 => Self::Normal,
      1 => Self::Verbose,
      _ => Self::Trace,
    }
  }

  pub fn level(self) -> Level {
    match self {
      Self::Quiet => Level::ERROR,
      Self::Normal => Level::WARN,
      Self::Verbose => Level::DEBUG,
      Self::Trace => Level::TRACE,
    }
  }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbosity`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(verbosity: Verbosity) {
  let default_filter = format!("incident_ranker={}", verbosity.level());
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

  let subscriber = tracing_subscriber::registry().with(env_filter).with(
    fmt::layer()
      .with_writer(std::io::stderr)
      .with_target(true)
      .with_file(false)
      .with_line_number(false),
  );

  let _ = subscriber.try_init();
}
