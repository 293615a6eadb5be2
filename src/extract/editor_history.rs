//! Latest editor of a node, read from the `_editors` stamps of its photos.
//!
//! Display times use a fixed seven hour shift applied to the hour field only (no
//! daylight saving, no date rollover). Existing reports depend on these exact strings.

use chrono::{DateTime, NaiveDateTime, Timelike};
use indexmap::IndexMap;
use tracing::instrument;

use crate::types::{PhotoTable, UNKNOWN_USER, UserMap};

/// Suffix appended to every display time.
pub const TIME_ZONE_LABEL: &str = "MST";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %I:%M %p";
const MST_OFFSET_HOURS: u32 = 7;

/// The winning editor of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastEdit {
  pub editor: String,
  pub edited_at_ms: i64,
  /// `None` when the timestamp is outside the representable range.
  pub display_time: Option<String>,
}

/// Renders epoch milliseconds as `2024-03-01 09:15 AM MST`.
pub fn format_edit_time(epoch_ms: i64) -> Option<String> {
  let utc = DateTime::from_timestamp_millis(epoch_ms)?.naive_utc();
  let shifted = utc.with_hour((utc.hour() + 24 - MST_OFFSET_HOURS) % 24)?;
  Some(format!("{} {TIME_ZONE_LABEL}", shifted.format(DISPLAY_FORMAT)))
}

/// Parses a string produced by [format_edit_time] back into a comparable timestamp.
pub fn parse_edit_time(display: &str) -> Option<NaiveDateTime> {
  let bare = display.trim();
  let bare = bare.strip_suffix(TIME_ZONE_LABEL).unwrap_or(bare).trim_end();
  NaiveDateTime::parse_from_str(bare, DISPLAY_FORMAT).ok()
}

/// Scans the `_editors` stamps of every listed photo and returns the editor with the
/// latest stamp. Editors are keyed by display name, so two ids that map to the same
/// name (or both to "Unknown User") share one entry. On equal stamps the editor seen
/// first wins. Photo ids missing from the table are ignored.
#[instrument(level = "trace", skip_all)]
pub fn resolve_last_editor<'p>(
  photo_ids: impl IntoIterator<Item = &'p str>,
  photos: &PhotoTable,
  users: &UserMap,
) -> Option<LastEdit> {
  let mut latest: IndexMap<&str, i64> = IndexMap::new();
  for photo in photo_ids.into_iter().filter_map(|id| photos.get(id)) {
    for (editor_id, &stamp) in &photo.photofirst_data.editors {
      let name = users.get(editor_id).map_or(UNKNOWN_USER, String::as_str);
      let slot = latest.entry(name).or_insert(stamp);
      if stamp > *slot {
        *slot = stamp;
      }
    }
  }

  let mut best: Option<(&str, i64)> = None;
  for (name, stamp) in latest {
    if best.is_none_or(|(_, top)| stamp > top) {
      best = Some((name, stamp));
    }
  }
  best.map(|(editor, edited_at_ms)| LastEdit {
    editor: editor.to_string(),
    edited_at_ms,
    display_time: format_edit_time(edited_at_ms),
  })
}
