//! CLI entrypoint module structure.
use crate::{
    config::BuildConfig,
    lib::errors::PackError,
    pipeline::{plan_build, run_build, status, BuildPlan, START_MESSAGE},
};

pub mod args;
pub mod profile;

pub use args::BuildArgs;
pub use profile::{resolve_config_path, resolve_project_root, BuildProfile, ConfigSource};

/// Load configuration for `profile` and run (or plan) the build.
///
/// Returns the JSON payload to print, if the profile asked for one.
pub async fn execute_build(profile: &BuildProfile) -> Result<Option<String>, PackError> {
    if !profile.dry_run {
        status(START_MESSAGE);
    }
    let config = BuildConfig::load(
        profile.config_path.clone(),
        profile.config_source.is_required(),
    )?;
    let plan = BuildPlan::from_config(profile.project_root.clone(), &config);

    if profile.dry_run {
        return Ok(Some(plan_build(&plan).to_json()?));
    }

    let summary = run_build(&plan).await?;
    if profile.json {
        return Ok(Some(summary.to_json()?));
    }
    Ok(None)
}
