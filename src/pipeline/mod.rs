//! The production build pipeline: two sub-builds, then output tree assembly.
use std::{fmt, path::PathBuf};

use crate::config::{BuildCommand, BuildConfig};

pub mod assemble;
pub mod exit;
pub mod runner;
pub mod steps;
pub mod summary;

pub use assemble::{
    assemble_dist, planned_files, LAUNCHER_FILE, LAUNCHER_SCRIPT, MANIFEST_FILE, SERVER_ENTRY,
};
pub use exit::RunExit;
pub use runner::{plan_build, run_build, status, START_MESSAGE, SUCCESS_MESSAGE};
pub use steps::run_step;
pub use summary::{BuildSummary, DistFileReport, StepReport, SummaryStatus};

/// Which sub-build a step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Client,
    Server,
}

impl StepKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StepKind::Client => "client",
            StepKind::Server => "server",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sub-build invocation.
#[derive(Debug, Clone)]
pub struct BuildStep {
    pub kind: StepKind,
    pub command: BuildCommand,
}

/// Everything a run needs, resolved against the project root.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub project_root: PathBuf,
    /// Client first, then server.
    pub steps: Vec<BuildStep>,
    pub dist_dir: PathBuf,
}

impl BuildPlan {
    pub fn from_config(project_root: PathBuf, config: &BuildConfig) -> Self {
        let steps = vec![
            BuildStep {
                kind: StepKind::Client,
                command: config.build.client.clone(),
            },
            BuildStep {
                kind: StepKind::Server,
                command: config.build.server.clone(),
            },
        ];
        let dist_dir = project_root.join(&config.dist.dir);
        Self {
            project_root,
            steps,
            dist_dir,
        }
    }
}
