//! Survey photos and the attachment measurements recorded on them.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::lenient;

/// One measured wire or guy on a photo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttachmentEntry {
  /// Id of the trace this attachment belongs to.
  #[serde(rename = "_trace", default, deserialize_with = "lenient::opt_string")]
  pub trace: Option<String>,
  /// Measured height in inches.
  #[serde(rename = "_measured_height", default, deserialize_with = "lenient::opt_f64")]
  pub measured_height: Option<f64>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub wire_spec: Option<String>,
}

/// Measurement payload of a photo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoFirstData {
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub wire: IndexMap<String, AttachmentEntry>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub guying: IndexMap<String, AttachmentEntry>,
  /// Editor id → last edit, epoch milliseconds.
  #[serde(rename = "_editors", default, deserialize_with = "lenient::millis_map")]
  pub editors: IndexMap<String, i64>,
}

/// A photo from the job's `photos` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Photo {
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub association: Option<String>,
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  pub photofirst_data: PhotoFirstData,
}
