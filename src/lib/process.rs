//! Shared helpers for building sub-build commands.

use std::{path::Path, process::Stdio};

use tokio::process::Command;

pub struct SubBuildCommandConfig<'a> {
    pub program: &'a str,
    pub args: &'a [String],
    pub working_dir: &'a Path,
}

/// Build a command whose standard streams are shared with this process.
pub fn build_sub_build_command(config: SubBuildCommandConfig<'_>) -> Command {
    let mut command = Command::new(config.program);
    command.kill_on_drop(true);
    command.current_dir(config.working_dir);
    command.args(config.args);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Render a program and its arguments as a single display line.
pub fn render_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
