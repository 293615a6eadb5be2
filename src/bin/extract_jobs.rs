//! CLI: extract poles, anchors and connections from survey job graph exports.
//!
//! Usage: `extract_jobs [OPTIONS] <job-file>...`
//! Example: extract_jobs --users users.json --out-dir out jobs/*.json
//!
//! Each job file's stem is its job id. Writes GeoJSON layers, `summaries.json` and
//! `status_report.csv` under the output directory.
//!
//! Set RUST_LOG=polegraph_extract=debug for per-pass distributions.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use polegraph_extract::{
  MatchTargets, UserMap, extract_jobs, load_job_input, load_job_listings, load_user_map, write_outputs,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const OUT_DIR: &str = "out";

/// Extract pole, anchor and connection records from job graph exports.
#[derive(Parser, Debug)]
#[command(name = "extract_jobs")]
#[command(after_help = r#"Every option can also be set through its environment variable.

Examples:
  extract_jobs jobs/abc123.json
  extract_jobs --users users.json --job-list jobs.json --out-dir /tmp/out jobs/*.json"#)]
struct Args {
  /// User directory JSON (`{id: {name: {first, last}, email}}`).
  #[arg(long, value_name = "FILE", env = "POLEGRAPH_USERS")]
  users: Option<PathBuf>,

  /// Job list JSON, used for job names missing from the graphs.
  #[arg(long, value_name = "FILE", env = "POLEGRAPH_JOB_LIST")]
  job_list: Option<PathBuf>,

  /// Directory for the output files.
  #[arg(long, value_name = "DIR", env = "POLEGRAPH_OUT_DIR", default_value = OUT_DIR)]
  out_dir: PathBuf,

  /// Company whose proposed fiber is measured.
  #[arg(long, env = "POLEGRAPH_TARGET_COMPANY")]
  company: Option<String>,

  /// Cable type of the measured fiber.
  #[arg(long, env = "POLEGRAPH_CABLE_TYPE")]
  cable_type: Option<String>,

  /// Job graph JSON files.
  #[arg(value_name = "job-file", required = true)]
  jobs: Vec<PathBuf>,
}

fn exit_with(message: &str, err: impl std::fmt::Display) -> ! {
  error!(error = %err, "{message}");
  eprintln!("{message}: {err}");
  process::exit(1);
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();
  info!(jobs = args.jobs.len(), out_dir = %args.out_dir.display(), "extract_jobs starting");

  let users = match &args.users {
    Some(path) => load_user_map(path).unwrap_or_else(|e| exit_with("Error loading users", e)),
    None => UserMap::new(),
  };
  let listings = match &args.job_list {
    Some(path) => load_job_listings(path).unwrap_or_else(|e| exit_with("Error loading job list", e)),
    None => Vec::new(),
  };

  let defaults = MatchTargets::default();
  let targets = MatchTargets {
    company: args.company.clone().unwrap_or(defaults.company),
    cable_type: args.cable_type.clone().unwrap_or(defaults.cable_type),
    ..MatchTargets::default()
  };
  info!(company = %targets.company, cable_type = %targets.cable_type, users = users.len(), "options");

  let mut inputs = Vec::with_capacity(args.jobs.len());
  for path in &args.jobs {
    match load_job_input(path, &listings) {
      Ok(input) => inputs.push(input),
      Err(e) => exit_with("Error loading job", e),
    }
  }

  let jobs = extract_jobs(inputs, Arc::new(users), Arc::new(targets))
    .await
    .unwrap_or_else(|e| exit_with("Extraction error", e));
  let paths = write_outputs(&args.out_dir, &jobs).unwrap_or_else(|e| exit_with("Error writing outputs", e));

  println!("Extracted {} job(s).", jobs.len());
  for job in &jobs {
    println!(
      "  {}: {} poles, {} anchors, {} connections ({} skipped, {} failed)",
      job.summary.job_name,
      job.poles.len(),
      job.anchors.len(),
      job.connections.len(),
      job.stats.poles.skipped + job.stats.connections.skipped,
      job.stats.poles.failed + job.stats.connections.failed,
    );
  }
  for path in paths {
    println!("  wrote {}", path.display());
  }
}
