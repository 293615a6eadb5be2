//! Anchor extraction.
//!
//! The anchor check runs on its own chain, independent of pole classification, so a
//! node can be both a pole and an anchor. Unlike poles, anchors are emitted whether or
//! not they carry coordinates.

use tracing::{debug, info, instrument};

use crate::types::{AnchorRecord, AnchorStats, JobTables};

use super::attribute_resolver::{AttributeLookup, UNKNOWN};
use super::classify::{anchor_status, anchor_type_label, is_anchor_label};

const ANCHOR_SPEC: AttributeLookup<'static> =
  AttributeLookup::new(&["anchor_spec"], &["multi_added", "button_added"]);

/// Output of one anchor pass.
#[derive(Debug, Clone, Default)]
pub struct AnchorExtraction {
  pub records: Vec<AnchorRecord>,
  pub stats: AnchorStats,
}

/// Emits every decoded node whose anchor-chain label mentions "anchor".
#[instrument(level = "trace", skip(tables))]
pub fn extract_anchors(tables: &JobTables, job_id: &str) -> AnchorExtraction {
  let mut out = AnchorExtraction::default();
  let stats = &mut out.stats;

  for node in &tables.nodes {
    let label = anchor_type_label(&node.attributes);
    if !is_anchor_label(&label) {
      continue;
    }
    let status = anchor_status(&label);
    let record = AnchorRecord {
      node_id: node.id.clone(),
      latitude: node.latitude,
      longitude: node.longitude,
      anchor_spec: ANCHOR_SPEC.text_or(&node.attributes, UNKNOWN),
      anchor_type: label,
      anchor_status: status,
      job_id: job_id.to_string(),
    };
    stats.emitted += 1;
    stats.node_types.bump(record.anchor_type.as_str());
    stats.anchor_specs.bump(record.anchor_spec.as_str());
    stats.anchor_statuses.bump(status.as_str());
    out.records.push(record);
  }

  info!(emitted = stats.emitted, "anchor pass complete");
  debug!(
    node_types = ?stats.node_types,
    anchor_specs = ?stats.anchor_specs,
    anchor_statuses = ?stats.anchor_statuses,
    "anchor distributions"
  );
  out
}
