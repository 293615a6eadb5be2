//! Tests for last-editor resolution and the display time format.

use serde::Deserialize;
use serde_json::json;

use super::editor_history::{format_edit_time, parse_edit_time, resolve_last_editor};
use crate::types::{Photo, PhotoTable, UserMap};

// 2024-03-01 09:15:00 UTC
const MORNING_UTC_MS: i64 = 1_709_284_500_000;
// 2024-03-01 03:00:00 UTC
const EARLY_UTC_MS: i64 = 1_709_262_000_000;

fn photos(entries: &[(&str, serde_json::Value)]) -> PhotoTable {
  entries
    .iter()
    .map(|(id, editors)| {
      let photo = Photo::deserialize(&json!({ "photofirst_data": { "_editors": editors } })).unwrap();
      (id.to_string(), photo)
    })
    .collect()
}

fn users() -> UserMap {
  [("u1", "Alice Able"), ("u2", "Bob Baker")]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn format_subtracts_seven_hours_on_the_same_date() {
  assert_eq!(format_edit_time(MORNING_UTC_MS).as_deref(), Some("2024-03-01 02:15 AM MST"));
}

#[test]
fn format_wraps_the_hour_without_changing_the_date() {
  assert_eq!(format_edit_time(EARLY_UTC_MS).as_deref(), Some("2024-03-01 08:00 PM MST"));
}

#[test]
fn parse_reads_back_formatted_times() {
  let shown = format_edit_time(MORNING_UTC_MS).unwrap();
  let parsed = parse_edit_time(&shown).unwrap();
  assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-03-01 02:15");
  assert!(parse_edit_time("yesterday").is_none());
}

#[test]
fn later_editor_wins_regardless_of_photo_order() {
  let table = photos(&[
    ("p1", json!({ "u1": MORNING_UTC_MS - 60_000 })),
    ("p2", json!({ "u2": MORNING_UTC_MS })),
  ]);
  let users = users();
  for order in [["p1", "p2"], ["p2", "p1"]] {
    let last = resolve_last_editor(order, &table, &users).unwrap();
    assert_eq!(last.editor, "Bob Baker");
    assert_eq!(last.edited_at_ms, MORNING_UTC_MS);
    assert_eq!(last.display_time.as_deref(), Some("2024-03-01 02:15 AM MST"));
  }
}

#[test]
fn unknown_editor_ids_share_the_fallback_name() {
  let table = photos(&[("p1", json!({ "ghost": MORNING_UTC_MS, "u1": EARLY_UTC_MS }))]);
  let last = resolve_last_editor(["p1"], &table, &users()).unwrap();
  assert_eq!(last.editor, "Unknown User");
}

#[test]
fn equal_stamps_keep_the_first_editor() {
  let table = photos(&[("p1", json!({ "u1": MORNING_UTC_MS, "u2": MORNING_UTC_MS }))]);
  let last = resolve_last_editor(["p1"], &table, &users()).unwrap();
  assert_eq!(last.editor, "Alice Able");
}

#[test]
fn no_stamps_means_no_editor() {
  let table = photos(&[("p1", json!({}))]);
  assert!(resolve_last_editor(["p1", "missing"], &table, &users()).is_none());
  assert!(resolve_last_editor(std::iter::empty(), &table, &users()).is_none());
}

#[test]
fn non_numeric_stamps_are_ignored() {
  let table = photos(&[("p1", json!({ "u1": "soon", "u2": "1709284500000" }))]);
  let last = resolve_last_editor(["p1"], &table, &users()).unwrap();
  assert_eq!(last.editor, "Bob Baker");
}
