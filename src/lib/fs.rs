//! Filesystem primitives used while assembling the output directory.

use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};

use sha2::{Digest, Sha256};

use crate::lib::errors::DistError;

/// Unix permission bits applied to the generated launcher.
#[cfg(unix)]
const LAUNCHER_PERMISSIONS: u32 = 0o755;

/// Create `dir` and any missing parents. Existing directories are left untouched.
///
/// Returns `true` when the directory had to be created.
pub fn ensure_dir(dir: &Path) -> Result<bool, DistError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| DistError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Copy `from` over `to` byte-for-byte, replacing any previous copy.
pub fn copy_manifest(from: &Path, to: &Path) -> Result<u64, DistError> {
    fs::copy(from, to).map_err(|source| DistError::CopyManifest {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Write the launcher script and mark it executable where the platform supports it.
pub fn write_launcher(path: &Path, content: &str) -> Result<(), DistError> {
    let launcher_error = |source| DistError::WriteLauncher {
        path: path.to_path_buf(),
        source,
    };
    fs::write(path, content.as_bytes()).map_err(launcher_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(LAUNCHER_PERMISSIONS))
            .map_err(launcher_error)?;
    }

    Ok(())
}

/// Return the SHA256 of any file as a hex string.
pub fn compute_sha256(path: &Path) -> Result<String, DistError> {
    let mut file = File::open(path).map_err(|source| DistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer).map_err(|source| DistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Size of a file in bytes.
pub fn file_len(path: &Path) -> Result<u64, DistError> {
    fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|source| DistError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Render `path` relative to `base` with forward slashes, for reports.
pub fn display_relative(base: &Path, path: &Path) -> String {
    let relative: PathBuf = path.strip_prefix(base).unwrap_or(path).to_path_buf();
    relative.to_string_lossy().replace('\\', "/")
}
