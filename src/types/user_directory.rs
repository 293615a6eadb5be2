//! User directory payload → user id to display name map.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::lenient;

use super::UserMap;

/// Name shown for editors missing from the directory.
pub const UNKNOWN_USER: &str = "Unknown User";

#[derive(Debug, Default, Deserialize)]
struct UserName {
  #[serde(default, deserialize_with = "lenient::opt_string")]
  first: Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  last: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UserEntry {
  #[serde(default, deserialize_with = "lenient::null_as_default")]
  name: UserName,
  #[serde(default, deserialize_with = "lenient::opt_string")]
  email: Option<String>,
}

impl UserEntry {
  fn display_name(&self) -> String {
    let full = format!(
      "{} {}",
      self.name.first.as_deref().unwrap_or(""),
      self.name.last.as_deref().unwrap_or("")
    );
    let full = full.trim();
    if !full.is_empty() {
      return full.to_string();
    }
    self
      .email
      .clone()
      .filter(|e| !e.is_empty())
      .unwrap_or_else(|| UNKNOWN_USER.to_string())
  }
}

/// Builds the user map from the directory payload `{id: {name: {first, last}, email}}`.
/// Entries that are not objects are skipped.
pub fn user_map_from_payload(payload: &IndexMap<String, Value>) -> UserMap {
  payload
    .iter()
    .filter_map(|(id, raw)| {
      let entry = UserEntry::deserialize(raw).ok()?;
      Some((id.clone(), entry.display_name()))
    })
    .collect()
}
