//! Per-job status summary.

use std::collections::BTreeMap;

use serde::Serialize;

use super::MrStatus;

/// Per-job status summary produced after all records of a job are extracted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
  pub job_id: String,
  pub job_name: String,
  pub job_status: String,
  pub utility: String,
  pub mr_status_counts: BTreeMap<MrStatus, u64>,
  pub field_complete_pct: f64,
  pub trace_complete_pct: f64,
  pub most_recent_editor: String,
  pub last_edit_time: String,
  pub assigned_osp: String,
  pub conversation: String,
  pub project: String,
  pub comments: String,
  /// Number of pole records (sum of the MR histogram).
  pub pole_count: u64,
}

impl JobSummary {
  pub fn mr_count(&self, status: MrStatus) -> u64 {
    self.mr_status_counts.get(&status).copied().unwrap_or(0)
  }
}
