//! Materializes the output tree: manifest copy plus launcher stub.
use std::path::Path;

use tracing::info;

use crate::lib::{
    errors::DistError,
    fs::{compute_sha256, copy_manifest, display_relative, ensure_dir, file_len, write_launcher},
};

use super::DistFileReport;

/// Manifest copied verbatim from the project root.
pub const MANIFEST_FILE: &str = "package.json";
/// Generated launcher, written next to the manifest.
pub const LAUNCHER_FILE: &str = "start.js";
/// Server entry the launcher loads, relative to the output tree.
pub const SERVER_ENTRY: &str = "./server/index.js";
/// Launcher content. The shebang must stay on the first line.
pub const LAUNCHER_SCRIPT: &str = "#!/usr/bin/env node\nrequire('./server/index.js');\n";

/// Ensure `dist_dir` exists, copy the manifest and write the launcher.
///
/// Files other than the two managed ones are never touched.
pub fn assemble_dist(project_root: &Path, dist_dir: &Path) -> Result<Vec<DistFileReport>, DistError> {
    if ensure_dir(dist_dir)? {
        info!(
            target: "prodbuild::dist",
            path = %dist_dir.display(),
            "Created output directory"
        );
    }

    let manifest_source = project_root.join(MANIFEST_FILE);
    let manifest_target = dist_dir.join(MANIFEST_FILE);
    copy_manifest(&manifest_source, &manifest_target)?;

    let launcher = dist_dir.join(LAUNCHER_FILE);
    write_launcher(&launcher, LAUNCHER_SCRIPT)?;

    [manifest_target, launcher]
        .iter()
        .map(|path| -> Result<DistFileReport, DistError> {
            let report = DistFileReport {
                path: display_relative(project_root, path),
                bytes: Some(file_len(path)?),
                sha256: Some(compute_sha256(path)?),
            };
            info!(
                target: "prodbuild::dist",
                path = %report.path,
                bytes = report.bytes,
                sha256 = report.sha256.as_deref().unwrap_or_default(),
                "Wrote output file"
            );
            Ok(report)
        })
        .collect()
}

/// The files `assemble_dist` would write, without touching the filesystem.
pub fn planned_files(project_root: &Path, dist_dir: &Path) -> Vec<DistFileReport> {
    [MANIFEST_FILE, LAUNCHER_FILE]
        .iter()
        .map(|name| DistFileReport {
            path: display_relative(project_root, &dist_dir.join(name)),
            bytes: None,
            sha256: None,
        })
        .collect()
}
