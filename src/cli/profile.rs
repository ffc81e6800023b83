//! BuildProfile and config/project-root resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};

use crate::{
    config::{CONFIG_ENV_KEY, DEFAULT_CONFIG_FILE},
    lib::paths::resolve_against,
};

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    /// Explicitly named files must exist; the default one may be absent.
    pub const fn is_required(&self) -> bool {
        !matches!(self, ConfigSource::Default)
    }
}

/// Resolved run profile.
#[derive(Debug, Clone)]
pub struct BuildProfile {
    pub project_root: PathBuf,
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub dry_run: bool,
    pub json: bool,
}

/// Resolve the project root: CLI override (relative to cwd) or the current directory.
///
/// The root must be an existing directory; sub-builds run inside it.
pub fn resolve_project_root(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    let root = match override_path {
        Some(path) => resolve_against(&cwd, path),
        None => cwd,
    };
    ensure!(
        root.is_dir(),
        "project root {} is not a directory",
        root.display()
    );
    Ok(root)
}

/// Resolve config path in the order: CLI override → env var → `<project_root>/prodbuild.toml`.
pub fn resolve_config_path(
    override_path: Option<PathBuf>,
    project_root: &Path,
) -> Result<(PathBuf, ConfigSource)> {
    resolve_config_path_from(
        override_path,
        env::var_os(CONFIG_ENV_KEY).map(PathBuf::from),
        project_root,
    )
}

fn resolve_config_path_from(
    override_path: Option<PathBuf>,
    env_path: Option<PathBuf>,
    project_root: &Path,
) -> Result<(PathBuf, ConfigSource)> {
    let explicit = override_path
        .map(|path| (path, ConfigSource::Cli))
        .or_else(|| {
            env_path
                .filter(|path| !path.as_os_str().is_empty())
                .map(|path| (path, ConfigSource::Env))
        });

    match explicit {
        Some((path, source)) => {
            let cwd = env::current_dir().context("failed to obtain current directory")?;
            Ok((resolve_against(&cwd, path), source))
        }
        None => Ok((project_root.join(DEFAULT_CONFIG_FILE), ConfigSource::Default)),
    }
}
