use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths::is_contained_relative};

pub const DEFAULT_DIST_DIR: &str = "dist";

/// Output tree settings.
#[derive(Debug, Clone)]
pub struct DistSection {
    /// Output directory, relative to the project root.
    pub dir: PathBuf,
}

impl Default for DistSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDistSection {
    pub dir: Option<PathBuf>,
}

pub fn parse_dist_section(
    raw: Option<RawDistSection>,
    path: &Path,
) -> Result<DistSection, ConfigError> {
    let dist_raw = raw.unwrap_or_default();
    let dir = dist_raw
        .dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
    validate_dist_dir(path, &dir)?;
    Ok(DistSection { dir })
}

fn validate_dist_dir(path: &Path, dir: &Path) -> Result<(), ConfigError> {
    if is_contained_relative(dir) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "dist.dir",
        message: format!(
            "Use a relative path inside the project root: {}",
            dir.display()
        ),
    })
}
