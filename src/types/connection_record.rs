//! Line feature produced by the connection extractor.

use serde::Serialize;

/// A `[longitude, latitude]` position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LonLat {
  pub longitude: f64,
  pub latitude: f64,
}

impl LonLat {
  pub fn new(latitude: f64, longitude: f64) -> Self {
    Self {
      longitude,
      latitude,
    }
  }
}

/// One connection between two located nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionRecord {
  pub connection_id: String,
  pub connection_type: String,
  pub attachment_height: Option<String>,
  pub wire_spec: Option<String>,
  /// Measured height of the matched fiber attachment on a section photo.
  pub mid_height: Option<String>,
  pub start: LonLat,
  pub end: LonLat,
  pub node_id_1: String,
  pub node_id_2: String,
}
