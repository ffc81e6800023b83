//! Load and validate build configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use crate::lib::errors::ConfigError;

pub mod build;
pub mod dist;
pub mod telemetry;

pub use build::{
    parse_build_section, BuildCommand, BuildSection, RawBuildSection, DEFAULT_CLIENT_COMMAND,
    DEFAULT_SERVER_COMMAND,
};
pub use dist::{parse_dist_section, DistSection, RawDistSection, DEFAULT_DIST_DIR};

pub const CONFIG_ENV_KEY: &str = "PRODBUILD_CONFIG_PATH";
pub const DEFAULT_CONFIG_FILE: &str = "prodbuild.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub build: BuildSection,
    pub dist: DistSection,
    pub source_path: PathBuf,
    /// False when the built-in defaults were used because no file was present.
    pub from_file: bool,
}

#[derive(Debug, Deserialize)]
struct RawBuildConfig {
    build: Option<RawBuildSection>,
    dist: Option<RawDistSection>,
}

impl BuildConfig {
    /// Built-in defaults, reported as coming from `path`.
    pub fn defaults(path: PathBuf) -> Self {
        Self {
            build: BuildSection::default(),
            dist: DistSection::default(),
            source_path: path,
            from_file: false,
        }
    }

    /// Load `path`, falling back to defaults when it is absent and was not explicitly requested.
    pub fn load(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        if !required && !path.exists() {
            telemetry::log_defaults_used(&path);
            let config = Self::defaults(path);
            telemetry::log_loaded(&config);
            return Ok(config);
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "prodbuild::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(
            config::File::from(path.clone()).format(config::FileFormat::Toml),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            info!(
                target: "prodbuild::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawBuildConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            info!(
                target: "prodbuild::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            info!(
                target: "prodbuild::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawBuildConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let build = parse_build_section(raw.build, &path)?;
        let dist = parse_dist_section(raw.dist, &path)?;

        Ok(Self {
            build,
            dist,
            source_path: path,
            from_file: true,
        })
    }
}
