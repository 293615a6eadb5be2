//! Inches → feet/inches strings.

/// A height rendered two ways: `display` for record fields (`6' 2"`) and `sort_key` for
/// histogram buckets (`6'2"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeetInches {
  pub display: String,
  pub sort_key: String,
}

/// Converts a length in inches. Fractional inches are truncated; negative input is not
/// meaningful for survey heights and is not special-cased.
pub fn to_feet_inches(total_inches: Option<f64>) -> Option<FeetInches> {
  let total = total_inches?;
  let feet = (total / 12.0).floor() as i64;
  let inches = (total % 12.0).floor() as i64;
  Some(FeetInches {
    display: format!("{feet}' {inches}\""),
    sort_key: format!("{feet}'{inches}\""),
  })
}
