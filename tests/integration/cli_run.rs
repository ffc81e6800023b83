#![cfg(unix)]

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use prodbuild::{config::CONFIG_ENV_KEY, lib::fs::compute_sha256};
use serde_json::Value;

use crate::common::{FakeProject, BINARY_PATH, CLIENT_MARKER, SERVER_MARKER};

fn run_prodbuild(project_root: &Path, extra_args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .arg("--project-root")
        .arg(project_root)
        .args(extra_args)
        .env_remove(CONFIG_ENV_KEY)
        .env_remove("RUST_LOG")
        .output()
        .expect("prodbuild should start")
}

fn trailing_json(stdout: &str) -> Value {
    let start = stdout.find('{').expect("stdout should contain a JSON payload");
    serde_json::from_str(&stdout[start..]).expect("payload should be valid JSON")
}

#[test]
fn success_prints_status_lines_in_order() {
    let project = FakeProject::succeeding();

    let output = run_prodbuild(project.root(), &[]);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "Creating production build...",
            "Building client...",
            "Building server...",
            "Assembling dist...",
            "Build completed successfully!",
        ]
    );
    assert!(project.dist().join("start.js").is_file());
}

#[test]
fn sub_build_exit_code_becomes_process_exit_code() {
    let project = FakeProject::new("exit 5", &format!("echo server >> {SERVER_MARKER}"));

    let output = run_prodbuild(project.root(), &[]);

    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.lines().collect::<Vec<_>>(),
        vec!["client build exited abnormally (exit=Some(5))"]
    );
    assert!(!project.root().join(SERVER_MARKER).exists());
    assert!(!project.dist().exists());
}

#[test]
fn dry_run_prints_plan_without_side_effects() {
    let project = FakeProject::succeeding();

    let output = run_prodbuild(project.root(), &["--dry-run"]);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let payload = trailing_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(payload["status"], "planned");
    assert_eq!(payload["dist_dir"], "dist");
    assert_eq!(payload["steps"].as_array().map(Vec::len), Some(2));
    assert!(!project.root().join(CLIENT_MARKER).exists());
    assert!(!project.dist().exists());
}

#[test]
fn json_flag_reports_file_digests() {
    let project = FakeProject::succeeding();

    let output = run_prodbuild(project.root(), &["--json"]);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let payload = trailing_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(payload["status"], "completed");
    let launcher = &payload["files"][1];
    assert_eq!(launcher["path"], "dist/start.js");
    let expected = compute_sha256(&project.dist().join("start.js")).expect("digest");
    assert_eq!(launcher["sha256"].as_str(), Some(expected.as_str()));
}

#[test]
fn explicit_missing_config_fails_before_any_step() {
    let project = FakeProject::succeeding();
    let missing = project.root().join("nope.toml");

    let output = run_prodbuild(
        project.root(),
        &["--config", missing.to_str().expect("utf-8 path")],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.toml"), "stderr: {stderr}");
    assert!(!project.root().join(CLIENT_MARKER).exists());
}

#[test]
fn invalid_config_fails_before_any_step() {
    let project = FakeProject::succeeding();
    fs::write(project.config_path(), "[dist]\ndir = \"../outside\"\n").expect("can rewrite config");

    let output = run_prodbuild(project.root(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("dist.dir"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["Creating production build..."]
    );
    assert!(!project.root().join(CLIENT_MARKER).exists());
}

#[test]
fn missing_project_root_is_reported_before_any_step() {
    let project = FakeProject::succeeding();
    let missing = project.root().join("does-not-exist");

    let output = run_prodbuild(&missing, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.lines().collect::<Vec<_>>(),
        vec![format!("project root {} is not a directory", missing.display())]
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn dry_run_stdout_is_only_the_plan() {
    let project = FakeProject::succeeding();

    let output = run_prodbuild(project.root(), &["--dry-run"]);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: Value = serde_json::from_str(&stdout).expect("stdout is one JSON document");
    assert_eq!(payload["status"], "planned");
}
