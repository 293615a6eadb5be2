//! Tolerant field decoders for survey exports.
//!
//! Exported job graphs are loosely typed: heights arrive as numbers or numeric strings,
//! sections are sometimes `null`, ids are occasionally numbers. These helpers are used with
//! `#[serde(default, deserialize_with = "...")]` so one odd field never rejects a record.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a JSON value as a float: numbers as-is, numeric strings parsed, anything else `None`.
pub(crate) fn number_of(value: &Value) -> Option<f64> {
  match value {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }
}

/// Renders scalar JSON values as text. Objects, arrays and `null` yield `None`.
pub(crate) fn text_of(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => None,
  }
}

/// Loose truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are all "not set".
pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(a) => !a.is_empty(),
    Value::Object(o) => !o.is_empty(),
  }
}

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(number_of(&value))
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(text_of(&value))
}

pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(is_truthy(&value))
}

/// `null` (or a missing field, with `#[serde(default)]`) becomes `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Editor id → epoch milliseconds. Entries without a numeric timestamp are dropped.
pub(crate) fn millis_map<'de, D>(deserializer: D) -> Result<IndexMap<String, i64>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw: Option<IndexMap<String, Value>> = Option::deserialize(deserializer)?;
  Ok(
    raw
      .unwrap_or_default()
      .into_iter()
      .filter_map(|(editor, stamp)| {
        let ms = stamp
          .as_i64()
          .or_else(|| number_of(&stamp).map(|f| f as i64))?;
        Some((editor, ms))
      })
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::{is_truthy, number_of, text_of};
  use serde_json::json;

  #[test]
  fn truthiness_follows_loose_rules() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!(0.0)));
    assert!(!is_truthy(&json!("")));
    assert!(!is_truthy(&json!([])));
    assert!(!is_truthy(&json!({})));
    assert!(is_truthy(&json!("pole")));
    assert!(is_truthy(&json!(2)));
    assert!(is_truthy(&json!({"company": "X"})));
  }

  #[test]
  fn number_of_accepts_numeric_strings() {
    assert_eq!(number_of(&json!(74)), Some(74.0));
    assert_eq!(number_of(&json!(" 12.5 ")), Some(12.5));
    assert_eq!(number_of(&json!("tall")), None);
    assert_eq!(number_of(&json!(null)), None);
  }

  #[test]
  fn text_of_renders_scalars_only() {
    assert_eq!(text_of(&json!("T-100")).as_deref(), Some("T-100"));
    assert_eq!(text_of(&json!(40)).as_deref(), Some("40"));
    assert_eq!(text_of(&json!(true)).as_deref(), Some("true"));
    assert_eq!(text_of(&json!({"a": 1})), None);
  }
}
