//! Per-job pass and multi-job driver.
//!
//! - [extract_job]: runs every extractor over one job graph and builds its summary.
//! - [extract_jobs]: runs many jobs in parallel, one blocking task per job, keeping
//!   input order.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::error::ExtractError;
use crate::extract::{JobContext, extract_anchors, extract_connections, extract_poles, summarize_job};
use crate::types::{
  AnchorRecord, ConnectionRecord, ExtractionStats, JobGraph, JobSummary, JobTables, MatchTargets, PoleRecord,
  UserMap,
};

/// One job to extract.
#[derive(Debug, Clone, Default)]
pub struct JobInput {
  pub job_id: String,
  /// Name from the job list, used when the graph carries no name of its own.
  pub listed_name: Option<String>,
  pub graph: JobGraph,
}

/// Everything one pass produces for a job.
#[derive(Debug, Clone)]
pub struct JobExtraction {
  pub job_id: String,
  pub poles: Vec<PoleRecord>,
  pub anchors: Vec<AnchorRecord>,
  pub connections: Vec<ConnectionRecord>,
  pub summary: JobSummary,
  pub stats: ExtractionStats,
}

/// Runs the pole, anchor and connection extractors over one job and summarizes it.
/// Never fails: unusable records are counted in the returned stats.
#[instrument(level = "trace", skip(input, users, targets), fields(job_id = %input.job_id))]
pub fn extract_job(input: &JobInput, users: &UserMap, targets: &MatchTargets) -> JobExtraction {
  let graph = &input.graph;
  let ctx = JobContext::from_graph(&input.job_id, graph, input.listed_name.as_deref());
  info!(job_name = %ctx.job_name, sections = ?graph.available_sections(), "extracting job");

  let tables = JobTables::build(graph);
  debug!(photos = tables.photos.len(), traces = tables.traces.len(), "lookup tables built");

  let poles = extract_poles(&tables, &ctx, users, targets);
  let anchors = extract_anchors(&tables, &input.job_id);
  let connections = extract_connections(graph, &tables, targets);
  let summary = summarize_job(graph, &tables, &poles.records, &ctx);

  JobExtraction {
    job_id: input.job_id.clone(),
    poles: poles.records,
    anchors: anchors.records,
    connections: connections.records,
    summary,
    stats: ExtractionStats {
      poles: poles.stats,
      anchors: anchors.stats,
      connections: connections.stats,
    },
  }
}

/// Extracts all jobs in parallel. Results come back in input order; the only error is a
/// worker task that panicked or was cancelled.
pub async fn extract_jobs(
  inputs: Vec<JobInput>,
  users: Arc<UserMap>,
  targets: Arc<MatchTargets>,
) -> Result<Vec<JobExtraction>, ExtractError> {
  let handles = inputs.into_iter().map(|input| {
    let users = Arc::clone(&users);
    let targets = Arc::clone(&targets);
    tokio::task::spawn_blocking(move || extract_job(&input, &users, &targets))
  });
  let results = futures::future::join_all(handles).await;
  let extractions = results.into_iter().collect::<Result<Vec<_>, _>>()?;
  info!(jobs = extractions.len(), "all jobs extracted");
  Ok(extractions)
}
