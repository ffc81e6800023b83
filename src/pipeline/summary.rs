//! Machine-readable report of a build run.
use serde::Serialize;

/// Outcome recorded in a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    /// Dry run: nothing was executed or written.
    Planned,
    Completed,
}

/// One sub-build as executed (or as it would be executed).
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: &'static str,
    pub command: String,
    pub exit_code: Option<i32>,
    pub duration_ms: u128,
}

/// One managed file in the output tree.
#[derive(Debug, Clone, Serialize)]
pub struct DistFileReport {
    /// Path relative to the project root.
    pub path: String,
    pub bytes: Option<u64>,
    pub sha256: Option<String>,
}

/// Summary printed by `--json` and `--dry-run`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub run_id: String,
    pub status: SummaryStatus,
    pub project_root: String,
    pub dist_dir: String,
    pub steps: Vec<StepReport>,
    pub files: Vec<DistFileReport>,
    pub finished_at: String,
    pub duration_ms: u128,
}

impl BuildSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
