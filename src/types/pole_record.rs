//! Flat pole record produced by the pole extractor.

use serde::Serialize;

use super::MrStatus;

/// Field collection state of a pole (`field_completed.value`: 1 → yes, 2 → no).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldCompletion {
  #[serde(rename = "yes")]
  Yes,
  #[serde(rename = "no")]
  No,
  Unknown,
}

impl FieldCompletion {
  pub fn as_str(&self) -> &'static str {
    match self {
      FieldCompletion::Yes => "yes",
      FieldCompletion::No => "no",
      FieldCompletion::Unknown => "Unknown",
    }
  }
}

/// One pole, flattened for mapping and reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoleRecord {
  pub node_id: String,
  pub latitude: f64,
  pub longitude: f64,
  pub job_name: String,
  pub job_status: String,
  pub mr_status: MrStatus,
  /// Owning utility, from the pole tag.
  pub company: String,
  pub field_completed: FieldCompletion,
  pub pole_tag: String,
  pub scid: String,
  pub pole_class: String,
  pub pole_height: String,
  /// Point-of-attachment height, e.g. `22' 6"`.
  pub poa_height: Option<String>,
  pub last_editor: String,
  /// e.g. `2024-03-01 09:15 AM MST`.
  pub last_edit: Option<String>,
  pub conversation: String,
  pub project: String,
}
