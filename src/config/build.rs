use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_CLIENT_COMMAND: &[&str] = &["npm", "run", "build:client"];
pub const DEFAULT_SERVER_COMMAND: &[&str] = &["npm", "run", "build:server"];

/// A sub-build invocation: program plus arguments, executed without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    fn from_defaults(argv: &[&str]) -> Self {
        let mut parts = argv.iter().map(|part| part.to_string());
        Self {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
        }
    }
}

/// Sub-build commands, in execution order.
#[derive(Debug, Clone)]
pub struct BuildSection {
    pub client: BuildCommand,
    pub server: BuildCommand,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            client: BuildCommand::from_defaults(DEFAULT_CLIENT_COMMAND),
            server: BuildCommand::from_defaults(DEFAULT_SERVER_COMMAND),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawBuildSection {
    pub client: Option<Vec<String>>,
    pub server: Option<Vec<String>>,
}

pub fn parse_build_section(
    raw: Option<RawBuildSection>,
    path: &Path,
) -> Result<BuildSection, ConfigError> {
    let build_raw = raw.unwrap_or_default();
    let defaults = BuildSection::default();

    let client = match build_raw.client {
        Some(argv) => parse_command(argv, "build.client", path)?,
        None => defaults.client,
    };
    let server = match build_raw.server {
        Some(argv) => parse_command(argv, "build.server", path)?,
        None => defaults.server,
    };

    Ok(BuildSection { client, server })
}

fn parse_command(
    argv: Vec<String>,
    field: &'static str,
    path: &Path,
) -> Result<BuildCommand, ConfigError> {
    let mut argv = argv.into_iter();
    let program = argv.next().ok_or_else(|| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: "Provide at least the program to run".into(),
    })?;
    if program.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "The program name cannot be blank".into(),
        });
    }

    Ok(BuildCommand {
        program,
        args: argv.collect(),
    })
}
