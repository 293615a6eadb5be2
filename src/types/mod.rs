//! Job graph inputs, extracted records and pass statistics.
//!
//! Inputs decode from the survey platform's JSON export with order-preserving maps, so
//! every "first match" rule in [crate::extract] follows document order.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

mod anchor_record;
mod connection;
#[cfg(test)]
mod connection_test;
mod connection_record;
mod extraction_stats;
mod graph_node;
mod job_graph;
mod job_listing;
mod job_metadata;
mod job_summary;
mod match_targets;
mod mr_status;
mod photo;
mod pole_record;
mod trace;
mod user_directory;

pub use anchor_record::{AnchorRecord, AnchorStatus};
pub use connection::{Connection, NodeRef, Section};
pub use connection_record::{ConnectionRecord, LonLat};
pub use extraction_stats::{AnchorStats, ConnectionStats, ExtractionStats, Histogram, PoleStats};
pub use graph_node::{GraphNode, MAIN_ASSOCIATION, NodeCoordinates};
pub use job_graph::{JobGraph, JobTables, PhotoTable, TraceSection, TraceTable};
pub use job_listing::{JobListing, default_job_name, job_listings_from_payload};
pub use job_metadata::JobMetadata;
pub use job_summary::JobSummary;
pub use match_targets::MatchTargets;
pub use mr_status::MrStatus;
pub use photo::{AttachmentEntry, Photo, PhotoFirstData};
pub use pole_record::{FieldCompletion, PoleRecord};
pub use trace::Trace;
pub use user_directory::{UNKNOWN_USER, user_map_from_payload};

/// Attribute name → `{source tag → value}` (e.g. `node_type` → `{"-Imported": "pole"}`).
pub type Attributes = IndexMap<String, Value>;

/// User id → display name.
pub type UserMap = HashMap<String, String>;
