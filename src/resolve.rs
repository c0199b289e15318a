//! Resolution reports written by the external resolver
//!
//! A report lists, per module, every resolved artifact with its coordinates,
//! type and (when resolution produced one) local file. Reports are YAML or
//! JSON, chosen by file extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ArtifactTypes;
use crate::domain::{ArtifactDescriptor, DependencyRecord, ModuleRevisionId};
use crate::error::{Result, report_parse_failed, report_read_failed};

/// Whole resolver output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    #[serde(default)]
    pub modules: Vec<ModuleReport>,
}

/// Artifacts resolved for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReport {
    pub name: String,

    /// Library to sync into; the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    #[serde(default)]
    pub artifacts: Vec<ResolvedArtifact>,
}

/// One artifact as reported by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    pub organization: String,
    pub module: String,
    pub revision: String,
    pub name: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default = "default_ext")]
    pub ext: String,
    /// Local file; absent when the artifact could not be resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_ext() -> String {
    "jar".to_string()
}

impl ResolvedArtifact {
    pub fn descriptor(&self) -> ArtifactDescriptor {
        ArtifactDescriptor::new(
            ModuleRevisionId::new(&self.organization, &self.module, &self.revision),
            &self.name,
            &self.artifact_type,
            &self.ext,
        )
    }
}

impl ResolutionReport {
    /// Load a report, picking JSON for `.json` files and YAML otherwise
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| report_read_failed(path.display().to_string(), e.to_string()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed: std::result::Result<Self, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|reason| report_parse_failed(path.display().to_string(), reason))
    }

    /// Every entry for `module`; resolvers may list a module more than once
    pub fn entries<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a ModuleReport> {
        self.modules.iter().filter(move |m| m.name == module)
    }
}

impl ModuleReport {
    /// Dependency records for this module, in report order.
    ///
    /// Relative artifact paths are resolved against `base_dir`. Artifacts whose
    /// type is not mapped to a kind are left out.
    pub fn records(&self, types: &ArtifactTypes, base_dir: &Path) -> Vec<DependencyRecord> {
        self.artifacts
            .iter()
            .filter_map(|artifact| {
                let Some(kind) = types.kind_for(&artifact.artifact_type) else {
                    debug!(
                        "Ignoring {} artifact {} of module {}",
                        artifact.artifact_type, artifact.name, self.name
                    );
                    return None;
                };
                let local_file = artifact.path.as_ref().map(|p| {
                    if p.is_relative() {
                        base_dir.join(p)
                    } else {
                        p.clone()
                    }
                });
                Some(DependencyRecord::new(artifact.descriptor(), local_file, kind))
            })
            .collect()
    }
}
