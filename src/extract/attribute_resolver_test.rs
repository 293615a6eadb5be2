//! Tests for `AttributeLookup`.

use proptest::prelude::*;
use serde_json::{Value, json};

use super::attribute_resolver::{AttributeLookup, UNKNOWN, resolve, resolve_text_or};
use crate::types::Attributes;

fn attrs(v: Value) -> Attributes {
  serde_json::from_value(v).unwrap()
}

#[test]
fn fields_outrank_sources() {
  let a = attrs(json!({
    "node_type": { "value": "from-node-type" },
    "pole_type": { "-Imported": "from-pole-type" }
  }));
  let found = resolve(&a, &["node_type", "pole_type"], &["-Imported", "value"]);
  assert_eq!(found, Some(&json!("from-node-type")));
}

#[test]
fn sources_are_tried_in_order() {
  let a = attrs(json!({ "node_type": { "value": "v", "button_added": "b" } }));
  let found = resolve(&a, &["node_type"], &["button_added", "value"]);
  assert_eq!(found, Some(&json!("b")));
}

#[test]
fn falsy_values_are_passed_over() {
  let a = attrs(json!({
    "node_type": { "-Imported": "", "button_added": null, "value": 0, "auto_calced": "pole" }
  }));
  let found = resolve(&a, &["node_type"], &["-Imported", "button_added", "value", "auto_calced"]);
  assert_eq!(found, Some(&json!("pole")));
}

#[test]
fn exhausted_chain_yields_default() {
  let a = attrs(json!({ "other": { "value": "x" } }));
  assert_eq!(resolve_text_or(&a, &["node_type"], &["value"], UNKNOWN), "Unknown");
  assert_eq!(resolve_text_or(&a, &["node_type"], &["value"], "fallback"), "fallback");
}

#[test]
fn non_object_attribute_is_skipped() {
  let a = attrs(json!({ "node_type": "pole", "pole_type": { "value": "pole" } }));
  assert_eq!(
    resolve(&a, &["node_type", "pole_type"], &["value"]),
    Some(&json!("pole"))
  );
}

#[test]
fn member_projection_reads_inside_source_object() {
  const COMPANY: AttributeLookup<'static> =
    AttributeLookup::new(&["pole_tag"], &["-Imported", "button_added"]).member("company");
  let a = attrs(json!({
    "pole_tag": {
      "-Imported": { "tagtext": "T1" },
      "button_added": { "company": "Rocky Mountain Power" }
    }
  }));
  assert_eq!(COMPANY.text(&a).as_deref(), Some("Rocky Mountain Power"));
}

#[test]
fn numbers_render_as_text() {
  let a = attrs(json!({ "pole_height": { "-Imported": 40 } }));
  assert_eq!(resolve_text_or(&a, &["pole_height"], &["-Imported"], UNKNOWN), "40");
}

fn slot_value() -> impl Strategy<Value = Option<String>> {
  prop_oneof![
    Just(None),
    Just(Some(String::new())),
    "[a-z]{1,6}".prop_map(Some),
  ]
}

proptest! {
  #[test]
  fn first_truthy_in_field_then_source_order(
    grid in proptest::collection::vec(proptest::collection::vec(slot_value(), 3), 3)
  ) {
    let fields = ["f0", "f1", "f2"];
    let sources = ["s0", "s1", "s2"];
    let mut map = serde_json::Map::new();
    for (fi, row) in grid.iter().enumerate() {
      let mut inner = serde_json::Map::new();
      for (si, cell) in row.iter().enumerate() {
        if let Some(text) = cell {
          inner.insert(sources[si].to_string(), Value::String(text.clone()));
        }
      }
      map.insert(fields[fi].to_string(), Value::Object(inner));
    }
    let a = attrs(Value::Object(map));

    let expected = grid
      .iter()
      .flatten()
      .flatten()
      .find(|s| !s.is_empty())
      .cloned();
    let got = resolve(&a, &fields, &sources).and_then(Value::as_str).map(str::to_string);
    prop_assert_eq!(got, expected);
  }
}
