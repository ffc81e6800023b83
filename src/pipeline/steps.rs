//! Runs one sub-build to completion with inherited output streams.
use std::{path::Path, time::Instant};

use tracing::info;

use crate::lib::{
    errors::BuildStepError,
    process::{build_sub_build_command, render_command_line, SubBuildCommandConfig},
};

use super::{BuildStep, StepReport};

/// Run `step` inside `project_root` and wait for it to exit.
///
/// Any exit other than success is an error; the caller must not continue.
pub async fn run_step(step: &BuildStep, project_root: &Path) -> Result<StepReport, BuildStepError> {
    let command_line = render_command_line(&step.command.program, &step.command.args);
    let mut command = build_sub_build_command(SubBuildCommandConfig {
        program: &step.command.program,
        args: &step.command.args,
        working_dir: project_root,
    });

    info!(
        target: "prodbuild::pipeline",
        step = %step.kind,
        command = %command_line,
        cwd = %project_root.display(),
        "Starting sub-build"
    );

    let started_at = Instant::now();
    let status = command.status().await.map_err(|source| {
        info!(
            target: "prodbuild::pipeline",
            step = %step.kind,
            program = %step.command.program,
            reason = %source,
            "Failed to launch sub-build"
        );
        BuildStepError::Spawn {
            step: step.kind,
            program: step.command.program.clone(),
            source,
        }
    })?;
    let duration_ms = started_at.elapsed().as_millis();

    if !status.success() {
        info!(
            target: "prodbuild::pipeline",
            step = %step.kind,
            exit_code = ?status.code(),
            duration_ms = duration_ms,
            "Sub-build failed"
        );
        return Err(BuildStepError::Failed {
            step: step.kind,
            exit_code: status.code(),
        });
    }

    info!(
        target: "prodbuild::pipeline",
        step = %step.kind,
        exit_code = ?status.code(),
        duration_ms = duration_ms,
        "Sub-build finished"
    );

    Ok(StepReport {
        step: step.kind.as_str(),
        command: command_line,
        exit_code: status.code(),
        duration_ms,
    })
}
