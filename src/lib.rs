//! # polegraph-extract
//!
//! Extraction and classification engine for pole-attachment survey job graphs.
//!
//! ## Architecture
//!
//! The engine (`extract` module) is a set of pure functions from one decoded job graph
//! to flat records:
//!
//! - poles with make-ready status, utility, point-of-attachment height and last editor
//! - anchors with spec and best-effort status
//! - connections as two-point lines with span heights
//!
//! plus a per-job summary. [runner] composes these into one pass per job and runs many
//! jobs in parallel. [job_io] and [output_io] are the file adapters used by the
//! `extract_jobs` binary.

pub mod error;
pub mod extract;
pub mod geojson;
pub mod job_io;
mod lenient;
pub mod output_io;
#[cfg(test)]
mod output_io_test;
pub mod runner;
pub mod types;

pub use error::{ExtractError, RecordError};
pub use job_io::{job_id_from_path, load_job_graph, load_job_input, load_job_listings, load_user_map};
pub use output_io::{write_outputs, write_status_report};
pub use runner::{JobExtraction, JobInput, extract_job, extract_jobs};
pub use types::{
  AnchorRecord, ConnectionRecord, ExtractionStats, JobGraph, JobSummary, MatchTargets, MrStatus, PoleRecord, UserMap,
};
