//! Raw job graph snapshot plus the per-job lookup tables built from it.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::lenient;

use super::{GraphNode, JobMetadata, NodeCoordinates, Photo, Trace};

/// The `traces` section; only `trace_data` is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraceSection {
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub trace_data: IndexMap<String, Value>,
}

/// A full job snapshot as exported by the survey platform.
///
/// Nodes and connections stay as raw JSON so each record can be decoded (and fail)
/// on its own; see [crate::types::GraphNode::decode] and [crate::types::Connection::decode].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobGraph {
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub nodes: IndexMap<String, Value>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub connections: IndexMap<String, Value>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub photos: IndexMap<String, Value>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub traces: TraceSection,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub metadata: JobMetadata,
}

impl JobGraph {
  /// Coordinates of node `id`, or `None` when the node is not in the table.
  pub fn node_coordinates(&self, id: &str) -> Option<NodeCoordinates> {
    let raw = self.nodes.get(id)?;
    Some(NodeCoordinates::deserialize(raw).unwrap_or_default())
  }

  /// Job name: metadata name, then the top-level name, then `fallback`.
  pub fn resolve_name(&self, fallback: &str) -> String {
    [self.metadata.name.as_deref(), self.name.as_deref()]
      .into_iter()
      .flatten()
      .find(|n| !n.is_empty())
      .unwrap_or(fallback)
      .to_string()
  }

  /// Names of the top-level sections that carry data, for logging.
  pub fn available_sections(&self) -> Vec<&'static str> {
    let mut sections = Vec::new();
    if !self.nodes.is_empty() {
      sections.push("nodes");
    }
    if !self.connections.is_empty() {
      sections.push("connections");
    }
    if !self.photos.is_empty() {
      sections.push("photos");
    }
    if !self.traces.trace_data.is_empty() {
      sections.push("traces");
    }
    sections
  }
}

/// Photo id → decoded photo.
pub type PhotoTable = IndexMap<String, Photo>;

/// Trace id → decoded trace.
pub type TraceTable = IndexMap<String, Trace>;

/// Decoded nodes, photos and traces of one job, built once per pass.
///
/// Nodes that fail to decode are logged and counted in `failed_nodes`; photo and trace
/// entries that fail to decode are dropped.
#[derive(Debug, Clone, Default)]
pub struct JobTables {
  /// Decoded nodes in table order.
  pub nodes: Vec<GraphNode>,
  pub failed_nodes: u64,
  pub photos: PhotoTable,
  pub traces: TraceTable,
}

impl JobTables {
  pub fn build(graph: &JobGraph) -> Self {
    let mut nodes = Vec::with_capacity(graph.nodes.len());
    let mut failed_nodes = 0;
    for (id, raw) in &graph.nodes {
      match GraphNode::decode(id, raw) {
        Ok(node) => nodes.push(node),
        Err(e) => {
          warn!(node_id = %id, error = %e, "failed to process node");
          failed_nodes += 1;
        }
      }
    }
    Self {
      nodes,
      failed_nodes,
      photos: decode_table(&graph.photos, "photo"),
      traces: decode_table(&graph.traces.trace_data, "trace"),
    }
  }
}

fn decode_table<T>(raw: &IndexMap<String, Value>, kind: &str) -> IndexMap<String, T>
where
  T: for<'de> Deserialize<'de>,
{
  raw
    .iter()
    .filter_map(|(id, value)| match T::deserialize(value) {
      Ok(entry) => Some((id.clone(), entry)),
      Err(e) => {
        debug!(kind, id = %id, error = %e, "dropping undecodable entry");
        None
      }
    })
    .collect()
}
