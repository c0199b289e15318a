//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_artifact, sample_record};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let jar = write_artifact(temp.path(), "repo/acme-core-1.0.jar");
//!     let record = sample_record(Some(jar), DependencyKind::Classes);
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::{ArtifactDescriptor, DependencyKind, DependencyRecord, ModuleRevisionId};

/// Absolute base for temp dirs, so a relative TMPDIR never lands them in the repo.
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            std::env::var("TEMP")
                .or_else(|_| std::env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Write a small placeholder artifact at `relative` under `base`.
///
/// Parent directories are created as needed. Returns the absolute path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_artifact(base: &Path, relative: &str) -> PathBuf {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, b"PK\x03\x04").expect("Failed to write artifact");
    path
}

/// Record for `acme#core;1.0` with the given file and kind.
#[must_use]
pub fn sample_record(local_file: Option<PathBuf>, kind: DependencyKind) -> DependencyRecord {
    let artifact_type = match kind {
        DependencyKind::Classes => "jar",
        DependencyKind::Sources => "source",
        DependencyKind::Javadoc => "javadoc",
    };
    DependencyRecord::new(
        ArtifactDescriptor::new(
            ModuleRevisionId::new("acme", "core", "1.0"),
            "core",
            artifact_type,
            "jar",
        ),
        local_file,
        kind,
    )
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_write_artifact_creates_parents() {
        let temp = create_temp_dir();
        let jar = write_artifact(temp.path(), "deep/nested/lib.jar");
        assert!(jar.is_file());
    }
}
