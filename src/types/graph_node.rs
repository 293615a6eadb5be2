//! A node of the job graph (pole, anchor, reference point, ...).

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RecordError;
use crate::lenient;

use super::Attributes;

/// Association tag marking a node's primary photo.
pub const MAIN_ASSOCIATION: &str = "main";

/// A node of the job graph, decoded from one entry of the `nodes` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphNode {
  /// Key of the node in the `nodes` section.
  #[serde(skip)]
  pub id: String,
  #[serde(default, deserialize_with = "lenient::opt_f64")]
  pub latitude: Option<f64>,
  #[serde(default, deserialize_with = "lenient::opt_f64")]
  pub longitude: Option<f64>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub attributes: Attributes,
  /// Photo id → link metadata (e.g. `{"association": "main"}`).
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub photos: IndexMap<String, Value>,
}

impl GraphNode {
  /// Decodes the node stored under `id`.
  pub fn decode(id: &str, raw: &Value) -> Result<Self, RecordError> {
    let mut node = GraphNode::deserialize(raw).map_err(|source| RecordError::Decode {
      id: id.to_string(),
      source,
    })?;
    node.id = id.to_string();
    Ok(node)
  }

  /// Both coordinates, when present.
  pub fn position(&self) -> Option<(f64, f64)> {
    Some((self.latitude?, self.longitude?))
  }

  /// First linked photo whose association is `main`.
  pub fn main_photo_id(&self) -> Option<&str> {
    self
      .photos
      .iter()
      .find(|(_, link)| link.get("association").and_then(Value::as_str) == Some(MAIN_ASSOCIATION))
      .map(|(id, _)| id.as_str())
  }
}

/// Just the coordinates of a node, for endpoint lookups.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NodeCoordinates {
  #[serde(default, deserialize_with = "lenient::opt_f64")]
  pub latitude: Option<f64>,
  #[serde(default, deserialize_with = "lenient::opt_f64")]
  pub longitude: Option<f64>,
}

impl NodeCoordinates {
  pub fn position(&self) -> Option<(f64, f64)> {
    Some((self.latitude?, self.longitude?))
  }
}
