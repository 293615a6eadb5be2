//! Ordered fallback lookup over multiply-encoded attributes.
//!
//! A logical field may be stored under several attribute names and, within each, under
//! several source tags (`-Imported`, `button_added`, `value`, ...). Every extractor reads
//! attributes through [AttributeLookup] so the precedence policy is the same everywhere:
//! fields in order, then source tags in order, first truthy value wins.

use serde_json::Value;

use crate::lenient::{is_truthy, text_of};
use crate::types::Attributes;

/// Literal used when a lookup exhausts its chain.
pub const UNKNOWN: &str = "Unknown";

/// A field/source fallback chain, optionally projecting a member of the found object.
#[derive(Debug, Clone, Copy)]
pub struct AttributeLookup<'a> {
  fields: &'a [&'a str],
  sources: &'a [&'a str],
  member: Option<&'a str>,
}

impl<'a> AttributeLookup<'a> {
  pub const fn new(fields: &'a [&'a str], sources: &'a [&'a str]) -> Self {
    Self {
      fields,
      sources,
      member: None,
    }
  }

  /// Reads `member` of the object stored under each field/source pair instead of the
  /// value itself (e.g. `pole_tag` → `-Imported` → `company`).
  pub const fn member(self, member: &'a str) -> Self {
    Self {
      member: Some(member),
      ..self
    }
  }

  /// All present values in precedence order, truthy or not.
  pub fn candidates<'v>(self, attrs: &'v Attributes) -> impl Iterator<Item = &'v Value> {
    self.fields.iter().flat_map(move |field| {
      let slot = attrs.get(*field);
      self.sources.iter().filter_map(move |source| {
        let value = slot?.get(*source)?;
        match self.member {
          Some(member) => value.get(member),
          None => Some(value),
        }
      })
    })
  }

  /// First truthy value in precedence order.
  pub fn find<'v>(self, attrs: &'v Attributes) -> Option<&'v Value> {
    self.candidates(attrs).find(|v| is_truthy(v))
  }

  /// First truthy value, rendered as text.
  pub fn text(self, attrs: &Attributes) -> Option<String> {
    self.find(attrs).and_then(text_of)
  }

  /// First truthy value as text, or `default`.
  pub fn text_or(self, attrs: &Attributes, default: &str) -> String {
    self.text(attrs).unwrap_or_else(|| default.to_string())
  }
}

/// One-shot form of [AttributeLookup::find].
pub fn resolve<'v>(attrs: &'v Attributes, fields: &[&str], sources: &[&str]) -> Option<&'v Value> {
  AttributeLookup::new(fields, sources).find(attrs)
}

/// One-shot form of [AttributeLookup::text_or].
pub fn resolve_text_or(attrs: &Attributes, fields: &[&str], sources: &[&str], default: &str) -> String {
  AttributeLookup::new(fields, sources).text_or(attrs, default)
}
