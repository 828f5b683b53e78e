//! Structured error types for the incident ranker.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl RankError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  /// The offending field, when the error came from input validation.
  pub fn field(&self) -> Option<&str> {
    match self {
      Self::Validation { field, .. } => Some(field),
      _ => None,
    }
  }
}
