//! Traces: the logical wires and guys that photo measurements point at.

use serde::Deserialize;

use crate::lenient;

/// One entry of `traces.trace_data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trace {
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub company: Option<String>,
  #[serde(default, deserialize_with = "lenient::truthy")]
  pub proposed: bool,
  #[serde(rename = "_trace_type", default, deserialize_with = "lenient::opt_string")]
  pub trace_type: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub cable_type: Option<String>,
}
