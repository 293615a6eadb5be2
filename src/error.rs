//! Error types.
//!
//! [RecordError] explains why a single node or connection produced no record; the pass
//! carries on. [ExtractError] is only raised by the file adapters and the job driver.

use std::path::PathBuf;
use thiserror::Error;

/// Reason a single graph record was left out of the output.
#[derive(Debug, Error)]
pub enum RecordError {
  /// The record's JSON did not match the expected shape.
  #[error("record {id} could not be decoded: {source}")]
  Decode {
    id: String,
    #[source]
    source: serde_json::Error,
  },

  /// A pole without latitude or longitude.
  #[error("pole {id} is missing coordinates")]
  MissingCoordinates { id: String },

  /// A connection with no usable endpoint ids.
  #[error("connection {id} is missing endpoint node ids")]
  MissingEndpoints { id: String },

  /// A connection endpoint that is not in the job's node table.
  #[error("connection {id} references unknown node {node_id}")]
  UnknownEndpoint { id: String, node_id: String },

  /// Both endpoints exist but at least one coordinate is absent.
  #[error("connection {id} has an endpoint without coordinates")]
  EndpointWithoutCoordinates { id: String },
}

impl RecordError {
  /// Missing-data skips are expected in field data; decode failures are not.
  pub fn is_skip(&self) -> bool {
    !matches!(self, RecordError::Decode { .. })
  }
}

/// Failure of the I/O layer around the engine.
#[derive(Debug, Error)]
pub enum ExtractError {
  #[error("I/O error on {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid JSON in {path}: {source}")]
  Json {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("job worker failed: {0}")]
  Join(#[from] tokio::task::JoinError),
}
