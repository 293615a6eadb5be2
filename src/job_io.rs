//! Loads job graphs and companion payloads from JSON files.

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use crate::error::ExtractError;
use crate::runner::JobInput;
use crate::types::{JobGraph, JobListing, UserMap, job_listings_from_payload, user_map_from_payload};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ExtractError> {
  let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  serde_json::from_slice(&bytes).map_err(|source| ExtractError::Json {
    path: path.to_path_buf(),
    source,
  })
}

/// Job id of a job file: its file stem (`jobs/abc123.json` → `abc123`).
pub fn job_id_from_path(path: &Path) -> String {
  path
    .file_stem()
    .map(|stem| stem.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Loads a job graph snapshot.
#[instrument(level = "trace")]
pub fn load_job_graph(path: &Path) -> Result<JobGraph, ExtractError> {
  read_json(path)
}

/// Loads a job file as a [JobInput], taking the listed name from `listings` when the job
/// id appears there.
#[instrument(level = "trace", skip(listings))]
pub fn load_job_input(path: &Path, listings: &[JobListing]) -> Result<JobInput, ExtractError> {
  let job_id = job_id_from_path(path);
  let listed_name = listings
    .iter()
    .find(|listing| listing.id == job_id)
    .map(|listing| listing.name.clone());
  Ok(JobInput {
    graph: load_job_graph(path)?,
    job_id,
    listed_name,
  })
}

/// Loads the user directory into a user id → display name map.
#[instrument(level = "trace")]
pub fn load_user_map(path: &Path) -> Result<UserMap, ExtractError> {
  let payload: IndexMap<String, Value> = read_json(path)?;
  Ok(user_map_from_payload(&payload))
}

/// Loads the job list, keeping file order.
#[instrument(level = "trace")]
pub fn load_job_listings(path: &Path) -> Result<Vec<JobListing>, ExtractError> {
  let payload: IndexMap<String, Value> = read_json(path)?;
  Ok(job_listings_from_payload(&payload))
}
