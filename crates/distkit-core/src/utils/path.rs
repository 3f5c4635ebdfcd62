//! Path utilities for manifest-relative file access.
//!
//! Paths named in a manifest (like the readme) must stay inside the
//! manifest's own directory; these helpers reject anything that escapes it.

use crate::error::{DistError, DistResult};
use std::path::{Component, Path, PathBuf};

/// Check if a relative path stays within its base directory
pub fn is_safe_path(path: &Path) -> bool {
    if path.is_absolute() {
        return false;
    }

    let mut depth = 0i32;
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            },
            Component::Normal(_) => {
                depth += 1;
            },
            _ => return false,
        }
    }

    true
}

/// Resolve `.` and `..` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut kept: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                kept.pop();
            },
            other => kept.push(other),
        }
    }

    kept.iter().collect()
}

/// Join a relative path onto a base directory, rejecting traversal
pub fn safe_join(base: &Path, path: &Path) -> DistResult<PathBuf> {
    if !is_safe_path(path) {
        return Err(DistError::PathEscape {
            path: path.display().to_string(),
        });
    }

    Ok(base.join(normalize(path)))
}
