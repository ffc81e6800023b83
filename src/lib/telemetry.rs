//! Telemetry initialization and build-run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Directive used when `RUST_LOG` is unset; status lines already go to stdout.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a build run.
pub struct RunSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl RunSpan {
    /// Start a run span.
    pub fn start(run_id: Uuid, dry_run: bool) -> Self {
        let span = info_span!(target: "prodbuild::pipeline", "build_run", %run_id, dry_run);
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Milliseconds since the span started.
    pub fn elapsed_ms(&self) -> u128 {
        self.started_at.elapsed().as_millis()
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.elapsed_ms();
        let _entered = self.span.enter();
        info!(
            target: "prodbuild::pipeline",
            run_id = %self.run_id,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed build run"
        );
    }
}
