//! Path identity for deduplicating library roots
//!
//! Two references name the same dependency when their canonical absolute
//! filesystem paths are equal. References may be plain paths or root URLs
//! (`jar://…!/`, `file://…`), and the files they point at do not have to exist.

use std::path::{Component, Path, PathBuf};

use normpath::PathExt;

use crate::library::url::{decode_path, presentable_path};

/// Canonical absolute path for a root reference, or `None` if it is malformed.
pub fn canonical_path(reference: &str) -> Option<PathBuf> {
    canonicalize(&decode_path(presentable_path(reference)?)?)
}

/// Canonical absolute form of a plain filesystem path.
///
/// Existing paths are resolved through the filesystem. For paths that do not
/// exist, the longest existing ancestor is resolved and the remaining
/// components are appended lexically, so symlinked prefixes (e.g. /var ->
/// /private/var on macOS) still line up with resolved paths.
pub fn canonicalize(path: &Path) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        return None;
    }
    let absolute = std::path::absolute(path).ok()?;

    if let Ok(norm) = absolute.normalize() {
        return Some(dunce::simplified(norm.as_path()).to_path_buf());
    }

    let cleaned = lexical_clean(&absolute);
    let mut current = cleaned.as_path();
    let mut components = Vec::new();

    while !current.exists() {
        match (current.file_name(), current.parent()) {
            (Some(file_name), Some(parent)) => {
                components.push(file_name);
                current = parent;
            }
            _ => return Some(cleaned.clone()),
        }
    }

    let mut result = dunce::canonicalize(current).unwrap_or_else(|_| current.to_path_buf());
    for component in components.iter().rev() {
        result.push(component);
    }
    Some(result)
}

/// Drop `.` and fold `..` without touching the filesystem
fn lexical_clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if cleaned.file_name().is_some() {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// True iff both references canonicalize to the same path.
///
/// A reference that cannot be canonicalized never matches anything.
pub fn same_file(a: &str, b: &str) -> bool {
    match (canonical_path(a), canonical_path(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Whether an existing root reference points at the candidate file.
pub fn is_same_dependency(candidate: &Path, existing_root: &str) -> bool {
    match (canonicalize(candidate), canonical_path(existing_root)) {
        (Some(candidate), Some(existing)) => candidate == existing,
        _ => false,
    }
}
