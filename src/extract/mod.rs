//! Extraction engine: pure functions from one job graph to records and a summary.

mod anchors;
mod attribute_resolver;
#[cfg(test)]
mod attribute_resolver_test;
mod classify;
mod connections;
mod editor_history;
#[cfg(test)]
mod editor_history_test;
mod height;
mod make_ready;
mod poles;
mod summary;
mod trace_matcher;

pub use anchors::{AnchorExtraction, extract_anchors};
pub use attribute_resolver::{AttributeLookup, UNKNOWN, resolve, resolve_text_or};
pub use classify::{
  Classification, NodeKind, POLE_LABEL, anchor_status, anchor_type_label, classify, is_anchor_label, is_pole,
  pole_type_label,
};
pub use connections::{AERIAL_CABLE, ConnectionExtraction, extract_connections};
pub use editor_history::{LastEdit, TIME_ZONE_LABEL, format_edit_time, parse_edit_time, resolve_last_editor};
pub use height::{FeetInches, to_feet_inches};
pub use make_ready::derive_mr_status;
pub use poles::{JobContext, PoleExtraction, extract_poles, field_completion, resolve_company};
pub use summary::{
  field_completion_pct, most_recent_edit, mr_status_counts, resolve_utility, summarize_job, trace_completion_pct,
};
pub use trace_matcher::{Attachment, AttachmentKind, AttachmentQuery, find_attachment, find_in_photos};
