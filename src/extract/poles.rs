//! Pole extraction: one flat record per located pole.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::RecordError;
use crate::lenient::{is_truthy, text_of};
use crate::types::{
  Attributes, FieldCompletion, GraphNode, JobGraph, JobTables, MatchTargets, PoleRecord, PoleStats,
  UserMap, default_job_name,
};

use super::attribute_resolver::{AttributeLookup, UNKNOWN};
use super::classify::{POLE_LABEL, pole_type_label};
use super::editor_history::resolve_last_editor;
use super::height::{FeetInches, to_feet_inches};
use super::make_ready::derive_mr_status;
use super::trace_matcher::{AttachmentQuery, find_attachment};

const POLE_TAG_COMPANY: AttributeLookup<'static> =
  AttributeLookup::new(&["pole_tag"], &["-Imported", "button_added"]).member("company");
const POLE_TAG_TEXT: AttributeLookup<'static> =
  AttributeLookup::new(&["pole_tag"], &["-Imported"]).member("tagtext");
const SCID: AttributeLookup<'static> = AttributeLookup::new(&["scid"], &["auto_button"]);
const POLE_CLASS: AttributeLookup<'static> = AttributeLookup::new(&["pole_class"], &["-Imported"]);
const POLE_HEIGHT: AttributeLookup<'static> = AttributeLookup::new(&["pole_height"], &["-Imported"]);

/// Job-level values stamped on every pole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobContext {
  pub job_id: String,
  pub job_name: String,
  pub job_status: String,
  pub conversation: String,
  pub project: String,
}

impl JobContext {
  /// Name: metadata name, then the graph's own name, then `listed_name`, then `Job {id}`.
  pub fn from_graph(job_id: &str, graph: &JobGraph, listed_name: Option<&str>) -> Self {
    let fallback = listed_name
      .filter(|n| !n.is_empty())
      .map_or_else(|| default_job_name(job_id), str::to_string);
    Self {
      job_id: job_id.to_string(),
      job_name: graph.resolve_name(&fallback),
      job_status: graph.metadata.job_status().to_string(),
      conversation: graph.metadata.conversation().to_string(),
      project: graph.metadata.project().to_string(),
    }
  }
}

/// Output of one pole pass.
#[derive(Debug, Clone, Default)]
pub struct PoleExtraction {
  pub records: Vec<PoleRecord>,
  pub stats: PoleStats,
}

/// Owning utility of a pole: `pole_tag` company under `-Imported` or `button_added`,
/// else the first `pole_tag` entry that has a `company` key at all.
pub fn resolve_company(attrs: &Attributes) -> Option<String> {
  POLE_TAG_COMPANY.text(attrs).or_else(|| {
    attrs
      .get("pole_tag")?
      .as_object()?
      .values()
      .find_map(|entry| entry.get("company"))
      .filter(|company| is_truthy(company))
      .and_then(text_of)
  })
}

/// `field_completed.value`: 1 → yes, 2 → no, anything else (strings included) unknown.
pub fn field_completion(attrs: &Attributes) -> FieldCompletion {
  let value = attrs
    .get("field_completed")
    .and_then(|f| f.get("value"))
    .and_then(Value::as_f64);
  match value {
    Some(v) if v == 1.0 => FieldCompletion::Yes,
    Some(v) if v == 2.0 => FieldCompletion::No,
    _ => FieldCompletion::Unknown,
  }
}

/// Point-of-attachment height of the fiber network on the node's main photo.
fn poa_height(node: &GraphNode, tables: &JobTables, targets: &MatchTargets) -> Option<FeetInches> {
  let photo = tables.photos.get(node.main_photo_id()?)?;
  let attachment = find_attachment(photo, &tables.traces, &AttachmentQuery::pole(targets))?;
  to_feet_inches(Some(attachment.measured_height))
}

fn pole_record(
  node: &GraphNode,
  tables: &JobTables,
  ctx: &JobContext,
  users: &UserMap,
  targets: &MatchTargets,
) -> Result<(PoleRecord, Option<FeetInches>), RecordError> {
  let (latitude, longitude) = node
    .position()
    .ok_or_else(|| RecordError::MissingCoordinates { id: node.id.clone() })?;
  let attrs = &node.attributes;
  let poa = poa_height(node, tables, targets);
  let last_edit = resolve_last_editor(node.photos.keys().map(String::as_str), &tables.photos, users);
  let (last_editor, last_edit) = match last_edit {
    Some(edit) => (edit.editor, edit.display_time),
    None => (UNKNOWN.to_string(), None),
  };

  let record = PoleRecord {
    node_id: node.id.clone(),
    latitude,
    longitude,
    job_name: ctx.job_name.clone(),
    job_status: ctx.job_status.clone(),
    mr_status: derive_mr_status(attrs),
    company: resolve_company(attrs).unwrap_or_else(|| UNKNOWN.to_string()),
    field_completed: field_completion(attrs),
    pole_tag: POLE_TAG_TEXT.text_or(attrs, UNKNOWN),
    scid: SCID.text_or(attrs, UNKNOWN),
    pole_class: POLE_CLASS.text_or(attrs, UNKNOWN),
    pole_height: POLE_HEIGHT.text_or(attrs, UNKNOWN),
    poa_height: poa.as_ref().map(|h| h.display.clone()),
    last_editor,
    last_edit,
    conversation: ctx.conversation.clone(),
    project: ctx.project.clone(),
  };
  Ok((record, poa))
}

/// Extracts every pole with coordinates. Poles without coordinates are logged, counted
/// and skipped; nodes that failed to decode are taken from `tables.failed_nodes`.
#[instrument(level = "trace", skip_all, fields(job_id = %ctx.job_id))]
pub fn extract_poles(
  tables: &JobTables,
  ctx: &JobContext,
  users: &UserMap,
  targets: &MatchTargets,
) -> PoleExtraction {
  let mut out = PoleExtraction::default();
  let stats = &mut out.stats;
  stats.failed = tables.failed_nodes;
  stats.total_nodes = tables.nodes.len() as u64 + tables.failed_nodes;

  for node in &tables.nodes {
    let label = pole_type_label(&node.attributes);
    let is_pole = label == POLE_LABEL;
    stats.node_types.bump(label);
    if !is_pole {
      continue;
    }
    stats.poles_seen += 1;

    match pole_record(node, tables, ctx, users, targets) {
      Ok((record, poa)) => {
        stats.emitted += 1;
        stats.pole_classes.bump(record.pole_class.as_str());
        stats.pole_heights.bump(record.pole_height.as_str());
        match poa {
          Some(height) => {
            stats.with_poa_height += 1;
            stats.poa_heights.bump(height.sort_key);
          }
          None => stats.without_poa_height += 1,
        }
        out.records.push(record);
      }
      Err(e) => {
        warn!(node_id = %node.id, error = %e, "skipping pole");
        stats.skipped += 1;
      }
    }
  }

  info!(
    total_nodes = stats.total_nodes,
    poles_seen = stats.poles_seen,
    emitted = stats.emitted,
    skipped = stats.skipped,
    failed = stats.failed,
    with_poa_height = stats.with_poa_height,
    without_poa_height = stats.without_poa_height,
    "pole pass complete"
  );
  debug!(node_types = ?stats.node_types, pole_classes = ?stats.pole_classes, "pole distributions");
  debug!(pole_heights = ?stats.pole_heights, poa_heights = ?stats.poa_heights, "height distributions");
  out
}
