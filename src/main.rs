//! Entry point for prodbuild.
use std::process::ExitCode;

use clap::Parser;
use prodbuild::{
    cli::{execute_build, BuildArgs},
    lib::telemetry,
    pipeline::RunExit,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = BuildArgs::parse();
    let profile = args.into_profile().map_err(RunExit::from_error)?;

    if let Some(payload) = execute_build(&profile).await? {
        println!("{payload}");
    }
    Ok(())
}
