//! Make-ready (MR) status of a pole.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Make-ready status of a pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MrStatus {
  #[serde(rename = "No MR")]
  NoMr,
  #[serde(rename = "Comm MR")]
  CommMr,
  #[serde(rename = "Electric MR")]
  ElectricMr,
  #[serde(rename = "PCO Required")]
  PcoRequired,
  Unknown,
}

impl MrStatus {
  pub const ALL: [MrStatus; 5] = [
    MrStatus::NoMr,
    MrStatus::CommMr,
    MrStatus::ElectricMr,
    MrStatus::PcoRequired,
    MrStatus::Unknown,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MrStatus::NoMr => "No MR",
      MrStatus::CommMr => "Comm MR",
      MrStatus::ElectricMr => "Electric MR",
      MrStatus::PcoRequired => "PCO Required",
      MrStatus::Unknown => "Unknown",
    }
  }
}

impl fmt::Display for MrStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
