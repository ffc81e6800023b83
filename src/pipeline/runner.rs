//! Drives a build run from first sub-build to final status line.
use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

use crate::lib::{
    errors::PackError, fs::display_relative, process::render_command_line, telemetry::RunSpan,
};

use super::{
    assemble_dist, planned_files, run_step, BuildPlan, BuildSummary, DistFileReport, StepReport,
    SummaryStatus,
};

pub const START_MESSAGE: &str = "Creating production build...";
pub const SUCCESS_MESSAGE: &str = "Build completed successfully!";

/// Run both sub-builds in order, then assemble the output tree.
///
/// Stops at the first failure; nothing after the failing step runs.
pub async fn run_build(plan: &BuildPlan) -> Result<BuildSummary, PackError> {
    let run = RunSpan::start(Uuid::new_v4(), false);
    let span = run.span().clone();
    let result = execute(plan, &run).instrument(span).await;
    run.finish(if result.is_ok() { "completed" } else { "failed" });
    result
}

async fn execute(plan: &BuildPlan, run: &RunSpan) -> Result<BuildSummary, PackError> {
    let mut steps = Vec::with_capacity(plan.steps.len());
    for step in &plan.steps {
        status(&format!("Building {}...", step.kind));
        steps.push(run_step(step, &plan.project_root).await?);
    }

    status(&format!(
        "Assembling {}...",
        display_relative(&plan.project_root, &plan.dist_dir)
    ));
    let files = assemble_dist(&plan.project_root, &plan.dist_dir)?;

    status(SUCCESS_MESSAGE);
    Ok(summarize(plan, run, SummaryStatus::Completed, steps, files))
}

/// Describe what `run_build` would do without spawning or writing anything.
pub fn plan_build(plan: &BuildPlan) -> BuildSummary {
    let run = RunSpan::start(Uuid::new_v4(), true);
    let steps = plan
        .steps
        .iter()
        .map(|step| StepReport {
            step: step.kind.as_str(),
            command: render_command_line(&step.command.program, &step.command.args),
            exit_code: None,
            duration_ms: 0,
        })
        .collect();
    let files = planned_files(&plan.project_root, &plan.dist_dir);
    let summary = summarize(plan, &run, SummaryStatus::Planned, steps, files);
    run.finish("planned");
    summary
}

fn summarize(
    plan: &BuildPlan,
    run: &RunSpan,
    status: SummaryStatus,
    steps: Vec<StepReport>,
    files: Vec<DistFileReport>,
) -> BuildSummary {
    BuildSummary {
        run_id: run.run_id().to_string(),
        status,
        project_root: plan.project_root.to_string_lossy().to_string(),
        dist_dir: display_relative(&plan.project_root, &plan.dist_dir),
        steps,
        files,
        finished_at: Utc::now().to_rfc3339(),
        duration_ms: run.elapsed_ms(),
    }
}

/// Print a user-facing status line on stdout.
pub fn status(message: &str) {
    println!("{message}");
}
