//! Counters and distributions gathered during one extraction pass.

use std::collections::BTreeMap;

use serde::Serialize;

/// Label → occurrence count, sorted by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Histogram(BTreeMap<String, u64>);

impl Histogram {
  pub fn bump(&mut self, label: impl Into<String>) {
    *self.0.entry(label.into()).or_insert(0) += 1;
  }

  pub fn get(&self, label: &str) -> u64 {
    self.0.get(label).copied().unwrap_or(0)
  }

  pub fn total(&self) -> u64 {
    self.0.values().sum()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.0.iter().map(|(k, v)| (k.as_str(), *v))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoleStats {
  pub total_nodes: u64,
  pub poles_seen: u64,
  pub emitted: u64,
  /// Poles without coordinates.
  pub skipped: u64,
  /// Nodes that could not be decoded (counted once per job, for all node passes).
  pub failed: u64,
  pub with_poa_height: u64,
  pub without_poa_height: u64,
  pub node_types: Histogram,
  pub pole_classes: Histogram,
  pub pole_heights: Histogram,
  /// Keyed by the compact `6'2"` form.
  pub poa_heights: Histogram,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnchorStats {
  pub emitted: u64,
  pub node_types: Histogram,
  pub anchor_specs: Histogram,
  pub anchor_statuses: Histogram,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionStats {
  pub total: u64,
  pub emitted: u64,
  pub skipped: u64,
  pub failed: u64,
  pub connection_types: Histogram,
  pub attachment_heights: Histogram,
  pub aerial_cables: u64,
  pub aerial_with_wire_spec: u64,
  pub aerial_with_mid_height: u64,
}

/// Statistics of all three extractors for one job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
  pub poles: PoleStats,
  pub anchors: AnchorStats,
  pub connections: ConnectionStats,
}
