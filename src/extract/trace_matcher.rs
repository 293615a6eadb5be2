//! Find the measured attachment of the reported network on a photo.
//!
//! A photo lists measured wires and guys, each pointing at a trace. The matcher returns
//! the first entry (in photo order) whose trace belongs to the target company, is
//! proposed, has the wanted type, and carries a measured height.

use indexmap::IndexMap;
use tracing::instrument;

use crate::types::{AttachmentEntry, MatchTargets, Photo, PhotoTable, Trace, TraceTable};

/// Which traces qualify. `None` type fields are not checked; a `None` guy trace type
/// disables the guy fallback entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentQuery<'a> {
  pub company: &'a str,
  pub cable_type: &'a str,
  pub cable_trace_type: Option<&'a str>,
  pub guy_trace_type: Option<&'a str>,
}

impl<'a> AttachmentQuery<'a> {
  /// Pole query: fiber cable by trace and cable type, falling back to down guys.
  pub fn pole(targets: &'a MatchTargets) -> Self {
    Self {
      company: &targets.company,
      cable_type: &targets.cable_type,
      cable_trace_type: Some(&targets.cable_trace_type),
      guy_trace_type: Some(&targets.guy_trace_type),
    }
  }

  /// Span query: fiber cable by cable type only, no guy fallback.
  pub fn span(targets: &'a MatchTargets) -> Self {
    Self {
      company: &targets.company,
      cable_type: &targets.cable_type,
      cable_trace_type: None,
      guy_trace_type: None,
    }
  }

  fn owns(&self, trace: &Trace) -> bool {
    trace.proposed && trace.company.as_deref() == Some(self.company)
  }

  pub fn accepts_wire(&self, trace: &Trace) -> bool {
    self.owns(trace)
      && trace.cable_type.as_deref() == Some(self.cable_type)
      && self
        .cable_trace_type
        .is_none_or(|t| trace.trace_type.as_deref() == Some(t))
  }

  pub fn accepts_guy(&self, trace: &Trace) -> bool {
    match self.guy_trace_type {
      Some(t) => self.owns(trace) && trace.trace_type.as_deref() == Some(t),
      None => false,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
  Wire,
  Guy,
}

/// The matched attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
  pub kind: AttachmentKind,
  pub trace_id: String,
  /// Inches.
  pub measured_height: f64,
  /// Only wires carry a spec.
  pub wire_spec: Option<String>,
}

fn first_match(
  entries: &IndexMap<String, AttachmentEntry>,
  traces: &TraceTable,
  kind: AttachmentKind,
  accepts: impl Fn(&Trace) -> bool,
) -> Option<Attachment> {
  entries.values().find_map(|entry| {
    let trace_id = entry.trace.as_deref()?;
    let trace = traces.get(trace_id)?;
    if !accepts(trace) {
      return None;
    }
    let measured_height = entry.measured_height?;
    Some(Attachment {
      kind,
      trace_id: trace_id.to_string(),
      measured_height,
      wire_spec: match kind {
        AttachmentKind::Wire => entry.wire_spec.clone().filter(|s| !s.is_empty()),
        AttachmentKind::Guy => None,
      },
    })
  })
}

/// Scans the photo's wires, then (if the query allows) its guys.
pub fn find_attachment(photo: &Photo, traces: &TraceTable, query: &AttachmentQuery<'_>) -> Option<Attachment> {
  let data = &photo.photofirst_data;
  first_match(&data.wire, traces, AttachmentKind::Wire, |t| query.accepts_wire(t)).or_else(|| {
    first_match(&data.guying, traces, AttachmentKind::Guy, |t| {
      query.accepts_guy(t)
    })
  })
}

/// Scans photos in the given order and stops at the first match. Ids missing from the
/// photo table are skipped.
#[instrument(level = "trace", skip_all)]
pub fn find_in_photos<'p>(
  photo_ids: impl IntoIterator<Item = &'p str>,
  photos: &PhotoTable,
  traces: &TraceTable,
  query: &AttachmentQuery<'_>,
) -> Option<Attachment> {
  photo_ids
    .into_iter()
    .filter_map(|id| photos.get(id))
    .find_map(|photo| find_attachment(photo, traces, query))
}
