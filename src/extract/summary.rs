//! Per-job status summary.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::{info, instrument};

use crate::lenient::is_truthy;
use crate::types::{
  Connection, FieldCompletion, GraphNode, JobGraph, JobSummary, JobTables, MrStatus, PoleRecord,
};

use super::attribute_resolver::UNKNOWN;
use super::classify::is_pole;
use super::connections::{AERIAL_CABLE, CONNECTION_TYPE};
use super::editor_history::parse_edit_time;
use super::poles::{JobContext, field_completion, resolve_company};

fn percent(part: u64, whole: u64) -> f64 {
  if whole == 0 {
    0.0
  } else {
    part as f64 / whole as f64 * 100.0
  }
}

/// Share of pole nodes marked field complete. Counted over every decoded node, so poles
/// without coordinates still count. 0 when the job has no poles.
pub fn field_completion_pct(nodes: &[GraphNode]) -> f64 {
  let (mut complete, mut poles) = (0, 0);
  for node in nodes {
    if !is_pole(&node.attributes) {
      continue;
    }
    poles += 1;
    if field_completion(&node.attributes) == FieldCompletion::Yes {
      complete += 1;
    }
  }
  percent(complete, poles)
}

/// Share of aerial cable connections whose `tracing_complete.auto` is set. 0 when the
/// job has no aerial cables.
pub fn trace_completion_pct(graph: &JobGraph) -> f64 {
  let (mut complete, mut aerial) = (0, 0);
  for (id, raw) in &graph.connections {
    let Ok(connection) = Connection::decode(id, raw) else {
      continue;
    };
    let attrs = &connection.attributes;
    if CONNECTION_TYPE.text_or(attrs, UNKNOWN) != AERIAL_CABLE {
      continue;
    }
    aerial += 1;
    let traced = attrs
      .get("tracing_complete")
      .and_then(|t| t.get("auto"))
      .is_some_and(is_truthy);
    if traced {
      complete += 1;
    }
  }
  percent(complete, aerial)
}

/// Editor and display time of the pole with the latest parseable edit time. Ties keep
/// the pole seen first.
pub fn most_recent_edit(poles: &[PoleRecord]) -> Option<(&str, &str)> {
  let mut best: Option<(NaiveDateTime, &str, &str)> = None;
  for pole in poles {
    let Some(shown) = pole.last_edit.as_deref() else {
      continue;
    };
    let Some(at) = parse_edit_time(shown) else {
      continue;
    };
    if best.is_none_or(|(top, _, _)| at > top) {
      best = Some((at, pole.last_editor.as_str(), shown));
    }
  }
  best.map(|(_, editor, shown)| (editor, shown))
}

/// Company of the first node, in table order, that names one.
pub fn resolve_utility(nodes: &[GraphNode]) -> Option<String> {
  nodes.iter().find_map(|node| resolve_company(&node.attributes))
}

/// Pole records per MR status. Statuses with no poles are absent.
pub fn mr_status_counts(poles: &[PoleRecord]) -> BTreeMap<MrStatus, u64> {
  let mut counts = BTreeMap::new();
  for pole in poles {
    *counts.entry(pole.mr_status).or_insert(0) += 1;
  }
  counts
}

/// Builds the summary of one job. Always produced, even for a job with no poles.
#[instrument(level = "trace", skip_all, fields(job_id = %ctx.job_id))]
pub fn summarize_job(
  graph: &JobGraph,
  tables: &JobTables,
  poles: &[PoleRecord],
  ctx: &JobContext,
) -> JobSummary {
  let (most_recent_editor, last_edit_time) = most_recent_edit(poles).unwrap_or((UNKNOWN, UNKNOWN));
  let mr_status_counts = mr_status_counts(poles);
  let summary = JobSummary {
    job_id: ctx.job_id.clone(),
    job_name: ctx.job_name.clone(),
    job_status: ctx.job_status.clone(),
    utility: resolve_utility(&tables.nodes).unwrap_or_else(|| UNKNOWN.to_string()),
    pole_count: mr_status_counts.values().sum(),
    mr_status_counts,
    field_complete_pct: field_completion_pct(&tables.nodes),
    trace_complete_pct: trace_completion_pct(graph),
    most_recent_editor: most_recent_editor.to_string(),
    last_edit_time: last_edit_time.to_string(),
    assigned_osp: graph.metadata.assigned_osp().to_string(),
    conversation: ctx.conversation.clone(),
    project: ctx.project.clone(),
    comments: graph.metadata.comments().to_string(),
  };
  info!(
    job_name = %summary.job_name,
    utility = %summary.utility,
    pole_count = summary.pole_count,
    field_complete_pct = summary.field_complete_pct,
    trace_complete_pct = summary.trace_complete_pct,
    "job summary"
  );
  summary
}
