//! Connections (spans) between two graph nodes.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RecordError;
use crate::lenient;

use super::Attributes;

/// Nested endpoint reference, `{"id": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeRef {
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub id: Option<String>,
}

/// A measured section (midspan) of a connection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section {
  /// Height in inches.
  #[serde(default, deserialize_with = "lenient::opt_f64")]
  pub attachment_height: Option<f64>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub photos: IndexMap<String, Value>,
}

/// One entry of the job's `connections` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Connection {
  #[serde(skip)]
  pub id: String,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub node_id_1: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub node_id_2: Option<String>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub node_1: Option<NodeRef>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub node_2: Option<NodeRef>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub attributes: Attributes,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub sections: IndexMap<String, Section>,
}

impl Connection {
  /// Decodes the connection stored under `id`.
  pub fn decode(id: &str, raw: &Value) -> Result<Self, RecordError> {
    let mut connection = Connection::deserialize(raw).map_err(|source| RecordError::Decode {
      id: id.to_string(),
      source,
    })?;
    connection.id = id.to_string();
    Ok(connection)
  }

  /// Endpoint ids; the direct `node_id_*` fields win over nested `node_*.id`.
  pub fn endpoint_ids(&self) -> (Option<&str>, Option<&str>) {
    (
      pick_endpoint(self.node_id_1.as_deref(), self.node_1.as_ref()),
      pick_endpoint(self.node_id_2.as_deref(), self.node_2.as_ref()),
    )
  }
}

fn pick_endpoint<'a>(direct: Option<&'a str>, nested: Option<&'a NodeRef>) -> Option<&'a str> {
  direct
    .filter(|id| !id.is_empty())
    .or_else(|| nested.and_then(|r| r.id.as_deref()))
    .filter(|id| !id.is_empty())
}
