//! Tests for `Connection`.

use serde_json::json;

use super::Connection;

#[test]
fn direct_endpoint_ids_take_priority() {
  let raw = json!({
    "node_id_1": "a",
    "node_id_2": "b",
    "node_1": { "id": "x" },
    "node_2": { "id": "y" }
  });
  let c = Connection::decode("c1", &raw).unwrap();
  assert_eq!(c.endpoint_ids(), (Some("a"), Some("b")));
}

#[test]
fn nested_endpoint_ids_fill_gaps() {
  let raw = json!({
    "node_id_1": "",
    "node_1": { "id": "x" },
    "node_2": { "id": "y" }
  });
  let c = Connection::decode("c2", &raw).unwrap();
  assert_eq!(c.endpoint_ids(), (Some("x"), Some("y")));
}

#[test]
fn missing_endpoints_are_none() {
  let c = Connection::decode("c3", &json!({ "node_1": null })).unwrap();
  assert_eq!(c.endpoint_ids(), (None, None));
}

#[test]
fn sections_keep_input_order() {
  let raw = json!({
    "sections": {
      "s9": { "attachment_height": null },
      "s1": { "attachment_height": 230, "photos": { "p1": true } }
    }
  });
  let c = Connection::decode("c4", &raw).unwrap();
  let keys: Vec<_> = c.sections.keys().map(String::as_str).collect();
  assert_eq!(keys, vec!["s9", "s1"]);
  assert_eq!(c.sections["s1"].attachment_height, Some(230.0));
  assert!(c.sections["s1"].photos.contains_key("p1"));
}
