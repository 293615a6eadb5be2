//! Job-level metadata (`metadata` section of a job graph).

use serde::Deserialize;

use crate::lenient;

/// Job-level metadata. Strings that are absent read as `None`; defaults are applied
/// where the values are consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobMetadata {
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub job_status: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub conversation: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub project: Option<String>,
  #[serde(rename = "assigned_OSP", default, deserialize_with = "lenient::opt_string")]
  pub assigned_osp: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  pub comments: Option<String>,
}

impl JobMetadata {
  pub fn job_status(&self) -> &str {
    self.job_status.as_deref().unwrap_or("Unknown")
  }

  pub fn conversation(&self) -> &str {
    self.conversation.as_deref().unwrap_or("")
  }

  pub fn project(&self) -> &str {
    self.project.as_deref().unwrap_or("")
  }

  pub fn assigned_osp(&self) -> &str {
    self.assigned_osp.as_deref().unwrap_or("Unknown")
  }

  pub fn comments(&self) -> &str {
    self.comments.as_deref().unwrap_or("")
  }
}
