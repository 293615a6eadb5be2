//! Flat anchor record produced by the anchor extractor.

use serde::Serialize;

/// Whether an anchor is proposed or already in the ground, read from its type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorStatus {
  New,
  Existing,
  Unknown,
}

impl AnchorStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      AnchorStatus::New => "new",
      AnchorStatus::Existing => "existing",
      AnchorStatus::Unknown => "unknown",
    }
  }
}

/// One anchor. Coordinates may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorRecord {
  pub node_id: String,
  pub latitude: Option<f64>,
  pub longitude: Option<f64>,
  pub anchor_spec: String,
  pub anchor_type: String,
  pub anchor_status: AnchorStatus,
  pub job_id: String,
}
