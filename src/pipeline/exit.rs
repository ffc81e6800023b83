use std::process::ExitCode;

use anyhow::Error;

use crate::lib::errors::PackError;

/// Bundles a run error message with the process exit code.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    code: u8,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            code: 1,
        }
    }

    /// A failing sub-build's exit code is passed through; everything else exits with 1.
    pub fn from_pack_error(err: PackError) -> Self {
        let code = match &err {
            PackError::Step(step) => step
                .exit_code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(1),
            PackError::Config(_) | PackError::Dist(_) | PackError::Summary(_) => 1,
        };
        Self {
            message: err.to_string(),
            code,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.code)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u8 {
        self.code
    }
}

impl From<PackError> for RunExit {
    fn from(err: PackError) -> Self {
        Self::from_pack_error(err)
    }
}
