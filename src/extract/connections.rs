//! Connection extraction: one line record per span whose endpoints are both located.

use tracing::{debug, info, instrument, warn};

use crate::error::RecordError;
use crate::types::{
  Connection, ConnectionRecord, ConnectionStats, JobGraph, JobTables, LonLat, MatchTargets,
};

use super::attribute_resolver::{AttributeLookup, UNKNOWN};
use super::height::{FeetInches, to_feet_inches};
use super::trace_matcher::{AttachmentQuery, find_in_photos};

/// Connection type label of an aerial fiber span.
pub const AERIAL_CABLE: &str = "aerial cable";

pub(crate) const CONNECTION_TYPE: AttributeLookup<'static> =
  AttributeLookup::new(&["connection_type"], &["button_added", "value"]);

/// Output of one connection pass.
#[derive(Debug, Clone, Default)]
pub struct ConnectionExtraction {
  pub records: Vec<ConnectionRecord>,
  pub stats: ConnectionStats,
}

fn endpoint(graph: &JobGraph, connection_id: &str, node_id: &str) -> Result<LonLat, RecordError> {
  let coordinates = graph
    .node_coordinates(node_id)
    .ok_or_else(|| RecordError::UnknownEndpoint {
      id: connection_id.to_string(),
      node_id: node_id.to_string(),
    })?;
  let (latitude, longitude) = coordinates
    .position()
    .ok_or_else(|| RecordError::EndpointWithoutCoordinates {
      id: connection_id.to_string(),
    })?;
  Ok(LonLat::new(latitude, longitude))
}

/// Builds the record for one decoded connection, or the reason it has none. The
/// converted attachment height is returned alongside for bucketing.
fn connection_record(
  connection: &Connection,
  graph: &JobGraph,
  tables: &JobTables,
  query: &AttachmentQuery<'_>,
) -> Result<(ConnectionRecord, Option<FeetInches>), RecordError> {
  let (Some(node_1), Some(node_2)) = connection.endpoint_ids() else {
    return Err(RecordError::MissingEndpoints {
      id: connection.id.clone(),
    });
  };
  let start = endpoint(graph, &connection.id, node_1)?;
  let end = endpoint(graph, &connection.id, node_2)?;

  let attachment_height = to_feet_inches(
    connection
      .sections
      .values()
      .find_map(|section| section.attachment_height),
  );
  let section_photos = connection
    .sections
    .values()
    .flat_map(|section| section.photos.keys().map(String::as_str));
  let attachment = find_in_photos(section_photos, &tables.photos, &tables.traces, query);

  let record = ConnectionRecord {
    connection_id: connection.id.clone(),
    connection_type: CONNECTION_TYPE.text_or(&connection.attributes, UNKNOWN),
    attachment_height: attachment_height.as_ref().map(|h| h.display.clone()),
    wire_spec: attachment.as_ref().and_then(|a| a.wire_spec.clone()),
    mid_height: attachment
      .as_ref()
      .and_then(|a| to_feet_inches(Some(a.measured_height)))
      .map(|h| h.display),
    start,
    end,
    node_id_1: node_1.to_string(),
    node_id_2: node_2.to_string(),
  };
  Ok((record, attachment_height))
}

/// Extracts every connection whose two endpoints resolve to located nodes. Other
/// connections are logged, counted and skipped.
#[instrument(level = "trace", skip_all)]
pub fn extract_connections(
  graph: &JobGraph,
  tables: &JobTables,
  targets: &MatchTargets,
) -> ConnectionExtraction {
  let query = AttachmentQuery::span(targets);
  let mut out = ConnectionExtraction::default();
  let stats = &mut out.stats;

  for (id, raw) in &graph.connections {
    stats.total += 1;
    let result = Connection::decode(id, raw)
      .and_then(|connection| connection_record(&connection, graph, tables, &query));
    let (record, attachment_height) = match result {
      Ok(found) => found,
      Err(e) if e.is_skip() => {
        warn!(connection_id = %id, error = %e, "skipping connection");
        stats.skipped += 1;
        continue;
      }
      Err(e) => {
        warn!(connection_id = %id, error = %e, "failed to process connection");
        stats.failed += 1;
        continue;
      }
    };

    stats.emitted += 1;
    stats.connection_types.bump(record.connection_type.as_str());
    if let Some(height) = attachment_height {
      stats.attachment_heights.bump(height.sort_key);
    }
    if record.connection_type == AERIAL_CABLE {
      stats.aerial_cables += 1;
      if record.wire_spec.is_some() {
        stats.aerial_with_wire_spec += 1;
      }
      if record.mid_height.is_some() {
        stats.aerial_with_mid_height += 1;
      }
    }
    out.records.push(record);
  }

  info!(
    total = stats.total,
    emitted = stats.emitted,
    skipped = stats.skipped,
    failed = stats.failed,
    aerial_cables = stats.aerial_cables,
    aerial_with_wire_spec = stats.aerial_with_wire_spec,
    aerial_with_mid_height = stats.aerial_with_mid_height,
    "connection pass complete"
  );
  debug!(
    connection_types = ?stats.connection_types,
    attachment_heights = ?stats.attachment_heights,
    "connection distributions"
  );
  out
}

