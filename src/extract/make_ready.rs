//! Make-ready decision table.

use crate::types::{Attributes, MrStatus};

use super::attribute_resolver::{AttributeLookup, UNKNOWN};

const MR_STATE: AttributeLookup<'static> = AttributeLookup::new(&["mr_state"], &["auto_calced"]);

/// Derives the MR status. First matching row wins:
///
/// | proposed_pole_spec | mr_state      | warning | status       |
/// |--------------------|---------------|---------|--------------|
/// | present            | any           | any     | PCO Required |
/// | absent             | `No MR`       | absent  | No MR        |
/// | absent             | `MR Resolved` | absent  | Comm MR      |
/// | absent             | `MR Resolved` | present | Electric MR  |
/// | absent             | other         | any     | Unknown      |
///
/// Presence means the attribute key exists, whatever its value.
pub fn derive_mr_status(attrs: &Attributes) -> MrStatus {
  if attrs.contains_key("proposed_pole_spec") {
    return MrStatus::PcoRequired;
  }
  let mr_state = MR_STATE.text_or(attrs, UNKNOWN);
  let has_warning = attrs.contains_key("warning");
  match (mr_state.as_str(), has_warning) {
    ("No MR", false) => MrStatus::NoMr,
    ("MR Resolved", false) => MrStatus::CommMr,
    ("MR Resolved", true) => MrStatus::ElectricMr,
    _ => MrStatus::Unknown,
  }
}
