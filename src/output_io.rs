//! Writes extraction results: GeoJSON layers, summaries JSON and the status report CSV.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::ExtractError;
use crate::geojson::{anchor_features, connection_features, pole_features};
use crate::runner::JobExtraction;
use crate::types::{JobSummary, MrStatus};

pub const POLES_FILENAME: &str = "poles.geojson";
pub const ANCHORS_FILENAME: &str = "anchors.geojson";
pub const CONNECTIONS_FILENAME: &str = "connections.geojson";
pub const SUMMARIES_FILENAME: &str = "summaries.json";
pub const STATUS_REPORT_FILENAME: &str = "status_report.csv";

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExtractError + '_ {
  move |source| ExtractError::Io {
    path: path.to_path_buf(),
    source,
  }
}

fn ensure_parent(path: &Path) -> Result<(), ExtractError> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent).map_err(io_error(parent)),
    _ => Ok(()),
  }
}

/// Writes `value` to `path` as pretty JSON, creating parent directories.
#[instrument(level = "trace", skip(value))]
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExtractError> {
  let json = serde_json::to_string_pretty(value)?;
  ensure_parent(path)?;
  std::fs::write(path, json).map_err(io_error(path))
}

/// One status report row. Column names are the report headers.
#[derive(Debug, Serialize)]
struct StatusRow<'a> {
  #[serde(rename = "Job Name")]
  job_name: &'a str,
  #[serde(rename = "Conversation")]
  conversation: &'a str,
  #[serde(rename = "Project")]
  project: &'a str,
  #[serde(rename = "Utility")]
  utility: &'a str,
  #[serde(rename = "Job Status")]
  job_status: &'a str,
  #[serde(rename = "Assigned OSP")]
  assigned_osp: &'a str,
  #[serde(rename = "Last Edit")]
  last_edit: &'a str,
  #[serde(rename = "Field %")]
  field_pct: String,
  #[serde(rename = "Trace %")]
  trace_pct: String,
  #[serde(rename = "No MR")]
  no_mr: u64,
  #[serde(rename = "Comm MR")]
  comm_mr: u64,
  #[serde(rename = "Electric MR")]
  electric_mr: u64,
  #[serde(rename = "PCO Required")]
  pco_required: u64,
  #[serde(rename = "Pole Count")]
  pole_count: u64,
  #[serde(rename = "Comments")]
  comments: &'a str,
}

impl<'a> StatusRow<'a> {
  fn from_summary(s: &'a JobSummary) -> Self {
    Self {
      job_name: &s.job_name,
      conversation: &s.conversation,
      project: &s.project,
      utility: &s.utility,
      job_status: &s.job_status,
      assigned_osp: &s.assigned_osp,
      last_edit: &s.last_edit_time,
      field_pct: format!("{:.1}%", s.field_complete_pct),
      trace_pct: format!("{:.1}%", s.trace_complete_pct),
      no_mr: s.mr_count(MrStatus::NoMr),
      comm_mr: s.mr_count(MrStatus::CommMr),
      electric_mr: s.mr_count(MrStatus::ElectricMr),
      pco_required: s.mr_count(MrStatus::PcoRequired),
      pole_count: s.pole_count,
      comments: &s.comments,
    }
  }
}

/// Writes one CSV row per job, sorted by utility then job status.
#[instrument(level = "trace", skip(summaries))]
pub fn write_status_report(path: &Path, summaries: &[JobSummary]) -> Result<(), ExtractError> {
  let mut rows: Vec<StatusRow<'_>> = summaries.iter().map(StatusRow::from_summary).collect();
  rows.sort_by(|a, b| (a.utility, a.job_status).cmp(&(b.utility, b.job_status)));

  ensure_parent(path)?;
  let mut writer = csv::Writer::from_path(path)?;
  for row in &rows {
    writer.serialize(row)?;
  }
  writer.flush().map_err(io_error(path))
}

/// Writes every output file for `jobs` under `out_dir` and returns the paths written.
/// Records of all jobs are merged into one layer per record kind.
#[instrument(level = "trace", skip(jobs))]
pub fn write_outputs(out_dir: &Path, jobs: &[JobExtraction]) -> Result<Vec<PathBuf>, ExtractError> {
  let poles: Vec<_> = jobs.iter().flat_map(|j| j.poles.iter().cloned()).collect();
  let anchors: Vec<_> = jobs.iter().flat_map(|j| j.anchors.iter().cloned()).collect();
  let connections: Vec<_> = jobs.iter().flat_map(|j| j.connections.iter().cloned()).collect();
  let summaries: Vec<_> = jobs.iter().map(|j| j.summary.clone()).collect();

  let paths = [
    POLES_FILENAME,
    ANCHORS_FILENAME,
    CONNECTIONS_FILENAME,
    SUMMARIES_FILENAME,
    STATUS_REPORT_FILENAME,
  ]
  .map(|name| out_dir.join(name));

  write_json(&paths[0], &pole_features(&poles))?;
  write_json(&paths[1], &anchor_features(&anchors))?;
  write_json(&paths[2], &connection_features(&connections))?;
  write_json(&paths[3], &summaries)?;
  write_status_report(&paths[4], &summaries)?;

  info!(
    out_dir = %out_dir.display(),
    poles = poles.len(),
    anchors = anchors.len(),
    connections = connections.len(),
    jobs = summaries.len(),
    "outputs written"
  );
  Ok(paths.to_vec())
}
