//! Which traces count as "our" fiber network when matching attachments.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPANY: &str = "Clearnetworx";
pub const DEFAULT_CABLE_TYPE: &str = "Fiber Optic Com";
pub const DEFAULT_CABLE_TRACE_TYPE: &str = "cable";
pub const DEFAULT_GUY_TRACE_TYPE: &str = "down_guy";

/// Company and cable vocabulary of the network under report. Every matched trace must
/// also be `proposed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTargets {
  pub company: String,
  pub cable_type: String,
  pub cable_trace_type: String,
  pub guy_trace_type: String,
}

impl Default for MatchTargets {
  fn default() -> Self {
    Self {
      company: DEFAULT_COMPANY.to_string(),
      cable_type: DEFAULT_CABLE_TYPE.to_string(),
      cable_trace_type: DEFAULT_CABLE_TRACE_TYPE.to_string(),
      guy_trace_type: DEFAULT_GUY_TRACE_TYPE.to_string(),
    }
  }
}
