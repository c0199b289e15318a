//! Idempotent registration of dependency records into a library model
//!
//! For each record the engine decides, in order:
//! 1. no local file: skip with a warning
//! 2. local file not on disk: skip with a warning
//! 3. already present under the record's category (by path identity): skip, info only
//! 4. otherwise: add one root and report it
//!
//! Only step 4 mutates the model. The existence check in step 2 and the
//! canonicalization in step 3 are separate filesystem observations; a file
//! deleted in between is handled by the lexical fallback in
//! [`path_identity`](crate::path_identity) and is never an error.

use std::path::{Path, PathBuf};

use crate::diagnostics::{DiagnosticEvent, Diagnostics, WarningReason};
use crate::domain::DependencyRecord;
use crate::library::{LibraryModel, RootUrl};
use crate::path_identity;

/// Why a record was not registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The resolver supplied no local file
    Unresolved,
    /// The local file does not exist
    Vanished,
    /// An equal root is already registered
    Duplicate,
}

/// Result of one registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered { url: RootUrl },
    Skipped(SkipReason),
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered { .. })
    }

    /// Unresolved and vanished records are warnings; duplicates are expected
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            RegistrationOutcome::Skipped(SkipReason::Unresolved | SkipReason::Vanished)
        )
    }
}

/// Applies the registration algorithm and reports each decision
#[derive(Debug, Clone, Default)]
pub struct RegistrationEngine {
    diagnostics: Diagnostics,
}

impl RegistrationEngine {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Register `record` into `library` unless it is missing or already present.
    pub fn register(
        &self,
        record: &DependencyRecord,
        library: &mut dyn LibraryModel,
    ) -> RegistrationOutcome {
        let Some(local_file) = record.local_file() else {
            self.warn(record, WarningReason::Unresolved, None);
            return RegistrationOutcome::Skipped(SkipReason::Unresolved);
        };

        let artifact_path = absolute_path(local_file);
        if record.is_missing() {
            self.warn(record, WarningReason::Vanished, Some(artifact_path));
            return RegistrationOutcome::Skipped(SkipReason::Vanished);
        }

        let category = record.root_category();
        if is_already_registered(local_file, &*library, record) {
            self.diagnostics.emit(&DiagnosticEvent::SkipInfo {
                path: artifact_path,
                library: library.name().to_string(),
                kind: record.kind(),
            });
            return RegistrationOutcome::Skipped(SkipReason::Duplicate);
        }

        let url = RootUrl::for_file(local_file);
        self.diagnostics.emit(&DiagnosticEvent::Registered {
            path: artifact_path,
            url: url.clone(),
            kind: record.kind(),
            library: library.name().to_string(),
        });
        library.add_root(url.clone(), category);
        RegistrationOutcome::Registered { url }
    }

    fn warn(&self, record: &DependencyRecord, reason: WarningReason, path: Option<PathBuf>) {
        self.diagnostics.emit(&DiagnosticEvent::SkipWarning {
            reason,
            descriptor: record.descriptor().clone(),
            kind: record.kind(),
            path,
        });
    }
}

fn is_already_registered(
    local_file: &Path,
    library: &dyn LibraryModel,
    record: &DependencyRecord,
) -> bool {
    library
        .roots(record.root_category())
        .iter()
        .any(|root| path_identity::is_same_dependency(local_file, root.as_str()))
}

fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
