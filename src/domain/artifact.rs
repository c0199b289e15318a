//! Artifact identity as reported by the resolver

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coordinates of the module that owns an artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRevisionId {
    pub organization: String,
    pub name: String,
    pub revision: String,
}

impl ModuleRevisionId {
    pub fn new(
        organization: impl Into<String>,
        name: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
            revision: revision.into(),
        }
    }
}

impl fmt::Display for ModuleRevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{};{}", self.organization, self.name, self.revision)
    }
}

/// Identity of one resolved artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactDescriptor {
    module: ModuleRevisionId,
    name: String,
    artifact_type: String,
    extension: String,
}

impl ArtifactDescriptor {
    pub fn new(
        module: ModuleRevisionId,
        name: impl Into<String>,
        artifact_type: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            module,
            name: name.into(),
            artifact_type: artifact_type.into(),
            extension: extension.into(),
        }
    }

    /// Owning module coordinates
    pub fn module(&self) -> &ModuleRevisionId {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Artifact type as declared by the resolver (e.g. "jar", "source")
    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}!{}.{}({})",
            self.module, self.name, self.extension, self.artifact_type
        )
    }
}
