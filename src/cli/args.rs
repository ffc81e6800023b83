//! CLI argument definitions and `BuildProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_path, resolve_project_root, BuildProfile};

/// Command-line arguments. Every flag is optional; a bare invocation runs the default build.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Build the client and server, then assemble a deployable dist/ directory",
    long_about = None
)]
pub struct BuildArgs {
    /// Path to prodbuild.toml (overrides PRODBUILD_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Project root (defaults to the current directory).
    #[arg(long = "project-root")]
    pub project_root: Option<PathBuf>,
    /// Print the planned run as JSON without running anything.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Print a JSON summary after a successful run.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl BuildArgs {
    /// Build a `BuildProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> Result<BuildProfile> {
        let project_root = resolve_project_root(self.project_root)?;
        let (config_path, config_source) =
            resolve_config_path(self.config_override, &project_root)?;

        Ok(BuildProfile {
            project_root,
            config_path,
            config_source,
            dry_run: self.dry_run,
            json: self.json,
        })
    }
}
