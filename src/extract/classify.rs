//! Pole / anchor / other classification of graph nodes.
//!
//! Anchor detection and anchor status are substring heuristics over free-form type
//! labels. They are kept behind [is_anchor_label] and [anchor_status] so they can be replaced by
//! an explicit vocabulary once the upstream labels are stable.

use crate::types::{AnchorStatus, Attributes};

use super::attribute_resolver::{AttributeLookup, UNKNOWN};

pub(crate) const POLE_TYPE: AttributeLookup<'static> = AttributeLookup::new(
  &["node_type", "pole_type"],
  &["-Imported", "button_added", "value", "auto_calced"],
);

pub(crate) const ANCHOR_TYPE: AttributeLookup<'static> = AttributeLookup::new(
  &["node_type", "anchor_type"],
  &["button_added", "-Imported", "value", "auto_calced"],
);

/// Exact (case-sensitive) pole type label.
pub const POLE_LABEL: &str = "pole";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
  Pole,
  Anchor,
  Other,
}

/// Kind of a node plus the raw type label it was decided on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
  pub kind: NodeKind,
  /// The matched type string, `"Unknown"` when no type is recorded.
  pub type_label: String,
}

/// Resolved pole-chain type label, or `"Unknown"`.
pub fn pole_type_label(attrs: &Attributes) -> String {
  POLE_TYPE.text_or(attrs, UNKNOWN)
}

/// Resolved anchor-chain type label, or `"Unknown"`.
pub fn anchor_type_label(attrs: &Attributes) -> String {
  ANCHOR_TYPE.text_or(attrs, UNKNOWN)
}

pub fn is_pole(attrs: &Attributes) -> bool {
  pole_type_label(attrs) == POLE_LABEL
}

/// True when the label mentions "anchor" in any case.
pub fn is_anchor_label(label: &str) -> bool {
  label.to_lowercase().contains("anchor")
}

/// Single-kind view of a node: poles are decided first, and a node that is not a pole is
/// an anchor when its anchor-chain label mentions "anchor". The extractors run the two
/// checks independently ([is_pole], [is_anchor_label]), so a node can yield both records.
pub fn classify(attrs: &Attributes) -> Classification {
  let pole_label = pole_type_label(attrs);
  if pole_label == POLE_LABEL {
    return Classification {
      kind: NodeKind::Pole,
      type_label: pole_label,
    };
  }
  let anchor_label = anchor_type_label(attrs);
  if is_anchor_label(&anchor_label) {
    return Classification {
      kind: NodeKind::Anchor,
      type_label: anchor_label,
    };
  }
  Classification {
    kind: NodeKind::Other,
    type_label: pole_label,
  }
}

/// Best-effort status from the anchor label: "new" is checked before "existing".
pub fn anchor_status(type_label: &str) -> AnchorStatus {
  let lower = type_label.to_lowercase();
  if lower.contains("new") {
    AnchorStatus::New
  } else if lower.contains("existing") {
    AnchorStatus::Existing
  } else {
    AnchorStatus::Unknown
  }
}
