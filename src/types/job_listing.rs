//! Job list payload → job id, display name and status.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// One job from the job list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
  pub id: String,
  pub name: String,
  pub status: String,
}

#[derive(Debug, Default, Deserialize)]
struct ListedMetadata {
  #[serde(default, deserialize_with = "lenient::opt_string")]
  name: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  job_status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListedJob {
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  metadata: ListedMetadata,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  name: Option<String>,
}

/// Fallback display name for a job with no name anywhere.
pub fn default_job_name(job_id: &str) -> String {
  format!("Job {job_id}")
}

/// Parses the job list payload `{job_id: {metadata: {name, job_status}, name}}`, keeping
/// payload order. Non-object entries are ignored.
pub fn job_listings_from_payload(payload: &IndexMap<String, Value>) -> Vec<JobListing> {
  payload
    .iter()
    .filter(|(_, raw)| raw.is_object())
    .filter_map(|(id, raw)| {
      let job = ListedJob::deserialize(raw).ok()?;
      let name = [job.metadata.name, job.name]
        .into_iter()
        .flatten()
        .find(|n| !n.is_empty())
        .unwrap_or_else(|| default_job_name(id));
      Some(JobListing {
        id: id.clone(),
        name,
        status: job.metadata.job_status.unwrap_or_else(|| "Unknown".to_string()),
      })
    })
    .collect()
}
