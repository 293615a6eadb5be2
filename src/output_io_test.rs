//! Tests for `output_io`.

use std::collections::BTreeMap;
use std::fs;

use crate::output_io::{STATUS_REPORT_FILENAME, write_json, write_outputs, write_status_report};
use crate::runner::{JobInput, extract_job};
use crate::types::{JobGraph, JobSummary, MatchTargets, MrStatus, UserMap};

fn summary(name: &str, utility: &str, status: &str) -> JobSummary {
  JobSummary {
    job_id: name.to_lowercase(),
    job_name: name.into(),
    job_status: status.into(),
    utility: utility.into(),
    mr_status_counts: BTreeMap::from([(MrStatus::NoMr, 2), (MrStatus::PcoRequired, 1)]),
    field_complete_pct: 66.666,
    trace_complete_pct: 0.0,
    most_recent_editor: "Ann Lee".into(),
    last_edit_time: "2024-03-01 02:15 AM MST".into(),
    assigned_osp: "Acme".into(),
    conversation: "C".into(),
    project: "P".into(),
    comments: "needs, review".into(),
    pole_count: 3,
  }
}

#[test]
fn status_report_rows_are_sorted_and_formatted() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join("report.csv");
  let summaries = [
    summary("Zeta", "Utility B", "Active"),
    summary("Beta", "Utility A", "Pending"),
    summary("Alpha", "Utility A", "Active"),
  ];
  write_status_report(&path, &summaries).unwrap();

  let mut reader = csv::Reader::from_path(&path).unwrap();
  let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
  assert_eq!(
    headers,
    [
      "Job Name", "Conversation", "Project", "Utility", "Job Status", "Assigned OSP", "Last Edit", "Field %",
      "Trace %", "No MR", "Comm MR", "Electric MR", "PCO Required", "Pole Count", "Comments",
    ]
  );
  let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
  let names: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
  assert_eq!(names, ["Alpha", "Beta", "Zeta"]);
  assert_eq!(&rows[0][7], "66.7%");
  assert_eq!(&rows[0][8], "0.0%");
  assert_eq!(&rows[0][9], "2");
  assert_eq!(&rows[0][10], "0");
  assert_eq!(&rows[0][12], "1");
  assert_eq!(&rows[0][13], "3");
  assert_eq!(&rows[0][14], "needs, review");
}

#[test]
fn write_json_creates_parent_directories() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("a").join("b").join("out.json");
  write_json(&path, &vec![1, 2, 3]).unwrap();
  let back: Vec<i32> = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
  assert_eq!(back, [1, 2, 3]);
}

#[test]
fn write_outputs_writes_every_layer() {
  let dir = tempfile::tempdir().unwrap();
  let graph: JobGraph = serde_json::from_value(serde_json::json!({
    "nodes": { "n1": { "latitude": 1.0, "longitude": 2.0, "attributes": { "node_type": { "-Imported": "pole" } } } }
  }))
  .unwrap();
  let job = extract_job(
    &JobInput {
      job_id: "j1".into(),
      listed_name: None,
      graph,
    },
    &UserMap::new(),
    &MatchTargets::default(),
  );
  let paths = write_outputs(dir.path(), &[job]).unwrap();
  assert_eq!(paths.len(), 5);
  assert!(paths.iter().all(|p| p.exists()));
  assert!(paths.iter().any(|p| p.ends_with(STATUS_REPORT_FILENAME)));

  let poles: serde_json::Value = serde_json::from_slice(&fs::read(&paths[0]).unwrap()).unwrap();
  assert_eq!(poles["features"].as_array().unwrap().len(), 1);
  assert_eq!(poles["features"][0]["properties"]["mr_status"], "Unknown");

  let summaries: serde_json::Value = serde_json::from_slice(&fs::read(&paths[3]).unwrap()).unwrap();
  assert_eq!(summaries[0]["job_name"], "Job j1");
  assert_eq!(summaries[0]["mr_status_counts"]["Unknown"], 1);
}
