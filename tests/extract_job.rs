//! End-to-end tests of one extraction pass through the public API.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use polegraph_extract::types::{AnchorStatus, FieldCompletion, LonLat};
use polegraph_extract::{
  JobGraph, JobInput, MatchTargets, MrStatus, UserMap, extract_job, extract_jobs, load_job_input, load_job_listings,
  load_user_map,
};
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

#[test]
fn two_node_job_produces_one_record_of_each_kind() {
  let graph: JobGraph = serde_json::from_value(json!({
    "nodes": {
      "pole": {
        "latitude": 40.0, "longitude": -105.0,
        "attributes": { "node_type": { "-Imported": "pole" }, "field_completed": { "value": 1 } }
      },
      "anchor": {
        "latitude": 40.001, "longitude": -105.001,
        "attributes": { "node_type": { "button_added": "existing anchor" } }
      }
    },
    "connections": {
      "span": { "node_id_1": "pole", "node_id_2": "anchor" }
    }
  }))
  .unwrap();
  let input = JobInput {
    job_id: "job-1".into(),
    listed_name: None,
    graph,
  };
  let out = extract_job(&input, &UserMap::new(), &MatchTargets::default());

  assert_eq!(out.poles.len(), 1);
  assert_eq!(out.poles[0].field_completed, FieldCompletion::Yes);
  assert_eq!(out.anchors.len(), 1);
  assert_eq!(out.anchors[0].anchor_status, AnchorStatus::Existing);
  assert_eq!(out.connections.len(), 1);
  assert_eq!(out.connections[0].start, LonLat::new(40.0, -105.0));
  assert_eq!(out.connections[0].end, LonLat::new(40.001, -105.001));
  assert_eq!(out.summary.field_complete_pct, 100.0);
  assert_eq!(out.summary.trace_complete_pct, 0.0);
  assert_eq!(out.summary.pole_count, 1);
}

#[test]
fn fixture_job_end_to_end() {
  let users = load_user_map(&fixture("users.json")).unwrap();
  let listings = load_job_listings(&fixture("jobs.json")).unwrap();
  let input = load_job_input(&fixture("two_node_job.json"), &listings).unwrap();
  assert_eq!(input.job_id, "two_node_job");
  assert_eq!(input.listed_name.as_deref(), Some("Listed Oak Street"));

  let out = extract_job(&input, &users, &MatchTargets::default());

  let pole = &out.poles[0];
  assert_eq!(pole.job_name, "Oak Street Extension");
  assert_eq!(pole.mr_status, MrStatus::NoMr);
  assert_eq!(pole.company, "Front Range Power");
  assert_eq!(pole.pole_tag, "XC-2231");
  assert_eq!(pole.poa_height.as_deref(), Some("22' 6\""));
  assert_eq!(pole.last_editor, "Dana Reyes");
  assert_eq!(pole.last_edit.as_deref(), Some("2024-03-01 02:15 AM MST"));

  let anchor = &out.anchors[0];
  assert_eq!(anchor.anchor_spec, "8\" Helix");
  assert_eq!(anchor.anchor_status, AnchorStatus::New);
  assert_eq!(anchor.job_id, "two_node_job");

  let span = &out.connections[0];
  assert_eq!(span.connection_type, "aerial cable");
  assert_eq!(span.attachment_height.as_deref(), Some("19' 0\""));
  assert_eq!(span.mid_height.as_deref(), Some("18' 6\""));
  assert_eq!(span.wire_spec.as_deref(), Some("6M EHS + 144ct"));

  let summary = &out.summary;
  assert_eq!(summary.utility, "Front Range Power");
  assert_eq!(summary.field_complete_pct, 100.0);
  assert_eq!(summary.trace_complete_pct, 100.0);
  assert_eq!(summary.most_recent_editor, "Dana Reyes");
  assert_eq!(summary.assigned_osp, "Acme OSP");
  assert_eq!(summary.comments, "Ready for review");
}

#[test]
fn bad_records_do_not_stop_the_job() {
  let listings = load_job_listings(&fixture("jobs.json")).unwrap();
  let input = load_job_input(&fixture("unnamed_job.json"), &listings).unwrap();
  let out = extract_job(&input, &UserMap::new(), &MatchTargets::default());

  assert_eq!(out.summary.job_name, "Job unnamed_job");
  assert_eq!(out.poles.len(), 1);
  assert_eq!(out.poles[0].mr_status, MrStatus::PcoRequired);
  assert_eq!(out.stats.poles.skipped, 1);
  assert_eq!(out.stats.poles.failed, 1);
  assert!(out.connections.is_empty());
  assert_eq!(out.stats.connections.skipped, 1);
  assert_eq!(out.summary.field_complete_pct, 0.0);
  assert_eq!(out.summary.mr_count(MrStatus::PcoRequired), 1);
}

#[test]
fn document_order_and_dual_role_nodes_survive_a_pass() {
  let graph: JobGraph = serde_json::from_str(
    r#"{
      "nodes": {
        "p9": {
          "latitude": 40.0, "longitude": -105.0,
          "attributes": { "node_type": { "-Imported": "pole", "button_added": "new anchor" } },
          "photos": { "ph": { "association": "main" } }
        },
        "p1": "broken"
      },
      "photos": { "ph": { "photofirst_data": { "wire": {
        "z_first": { "_trace": "t", "_measured_height": 300 },
        "a_second": { "_trace": "t", "_measured_height": 100 }
      } } } },
      "traces": { "trace_data": {
        "t": { "company": "Clearnetworx", "proposed": true, "_trace_type": "cable", "cable_type": "Fiber Optic Com" }
      } }
    }"#,
  )
  .unwrap();
  let input = JobInput {
    job_id: "dual".into(),
    listed_name: None,
    graph,
  };
  let out = extract_job(&input, &UserMap::new(), &MatchTargets::default());

  assert_eq!(out.poles.len(), 1);
  assert_eq!(out.poles[0].poa_height.as_deref(), Some("25' 0\""));
  assert_eq!(out.anchors.len(), 1);
  assert_eq!(out.anchors[0].node_id, "p9");
  assert_eq!(out.anchors[0].anchor_status, AnchorStatus::New);
  assert_eq!(out.stats.poles.failed, 1);
  assert_eq!(out.stats.poles.total_nodes, 2);
}

#[tokio::test]
async fn parallel_jobs_match_sequential_passes() {
  let users = load_user_map(&fixture("users.json")).unwrap();
  let inputs: Vec<JobInput> = ["two_node_job.json", "unnamed_job.json"]
    .iter()
    .map(|name| load_job_input(&fixture(name), &[]).unwrap())
    .collect();
  let targets = MatchTargets::default();
  let sequential: Vec<_> = inputs.iter().map(|i| extract_job(i, &users, &targets)).collect();

  let parallel = extract_jobs(inputs, Arc::new(users), Arc::new(targets)).await.unwrap();
  assert_eq!(parallel.len(), sequential.len());
  for (p, s) in parallel.iter().zip(&sequential) {
    assert_eq!(p.job_id, s.job_id);
    assert_eq!(p.poles, s.poles);
    assert_eq!(p.anchors, s.anchors);
    assert_eq!(p.connections, s.connections);
    assert_eq!(p.summary, s.summary);
    assert_eq!(p.stats, s.stats);
  }
}
