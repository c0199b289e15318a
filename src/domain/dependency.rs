//! Dependency records and the kinds that route them to root categories

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::artifact::ArtifactDescriptor;

/// Partition of a library model that a root belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootCategory {
    Classes,
    Sources,
    Documentation,
}

impl RootCategory {
    pub const ALL: [RootCategory; 3] = [
        RootCategory::Classes,
        RootCategory::Sources,
        RootCategory::Documentation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RootCategory::Classes => "classes",
            RootCategory::Sources => "sources",
            RootCategory::Documentation => "documentation",
        }
    }
}

impl fmt::Display for RootCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a resolved artifact contributes to a library
///
/// Each kind targets exactly one [`RootCategory`] and carries a short label
/// used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Compiled classes (a jar on the classpath)
    Classes,
    /// Source archives attached for navigation
    Sources,
    /// API documentation archives
    Javadoc,
}

impl DependencyKind {
    pub const ALL: [DependencyKind; 3] = [
        DependencyKind::Classes,
        DependencyKind::Sources,
        DependencyKind::Javadoc,
    ];

    pub fn root_category(self) -> RootCategory {
        match self {
            DependencyKind::Classes => RootCategory::Classes,
            DependencyKind::Sources => RootCategory::Sources,
            DependencyKind::Javadoc => RootCategory::Documentation,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DependencyKind::Classes => "jar",
            DependencyKind::Sources => "source",
            DependencyKind::Javadoc => "javadoc",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A resolved artifact paired with its local file and kind
///
/// Built once per artifact per sync pass and consumed by a single registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    descriptor: ArtifactDescriptor,
    local_file: Option<PathBuf>,
    kind: DependencyKind,
}

impl DependencyRecord {
    pub fn new(
        descriptor: ArtifactDescriptor,
        local_file: Option<PathBuf>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            descriptor,
            local_file,
            kind,
        }
    }

    pub fn descriptor(&self) -> &ArtifactDescriptor {
        &self.descriptor
    }

    pub fn local_file(&self) -> Option<&Path> {
        self.local_file.as_deref()
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    pub fn root_category(&self) -> RootCategory {
        self.kind.root_category()
    }

    /// True when there is no local file or it is not an existing file right now.
    ///
    /// Any error while checking counts as missing.
    pub fn is_missing(&self) -> bool {
        self.local_file.as_deref().is_none_or(|path| !path.is_file())
    }
}
