//! Shared helpers reused across modules (e.g., path validation).

use std::path::{Component, Path, PathBuf};

/// Returns true if the path is non-empty, relative, and never climbs out via `..`.
pub fn is_contained_relative(path: &Path) -> bool {
    if path.as_os_str().is_empty() || path.has_root() {
        return false;
    }
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
