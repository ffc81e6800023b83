use std::path::Path;

use tracing::{debug, info};

use super::{BuildConfig, CONFIG_ENV_KEY};

pub fn log_defaults_used(path: &Path) {
    debug!(
        target: "prodbuild::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &BuildConfig) {
    info!(
        target: "prodbuild::config",
        path = %config.source_path.display(),
        from_file = config.from_file,
        client = %config.build.client.program,
        server = %config.build.server.program,
        dist_dir = %config.dist.dir.display(),
        "Configuration resolved"
    );
}
