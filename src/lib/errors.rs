use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::pipeline::StepKind;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures of an external sub-build.
#[derive(Debug, Error)]
pub enum BuildStepError {
    #[error("Failed to launch {step} build `{program}`: {source}")]
    Spawn {
        step: StepKind,
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{step} build exited abnormally (exit={exit_code:?})")]
    Failed {
        step: StepKind,
        exit_code: Option<i32>,
    },
}

impl BuildStepError {
    /// Exit code reported by the child, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            BuildStepError::Spawn { .. } => None,
            BuildStepError::Failed { exit_code, .. } => *exit_code,
        }
    }
}

/// Errors occurring while assembling the output directory.
#[derive(Debug, Error)]
pub enum DistError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to copy manifest {from} to {to}: {source}")]
    CopyManifest {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write launcher {path}: {source}")]
    WriteLauncher {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O failed for file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any failure that aborts a build run.
#[derive(Debug, Error)]
pub enum PackError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Step(#[from] BuildStepError),
    #[error(transparent)]
    Dist(#[from] DistError),
    #[error("Failed to render build summary: {0}")]
    Summary(#[from] serde_json::Error),
}
