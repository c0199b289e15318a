//! Configuration (rootsync.yaml) data structures
//!
//! Decides which artifact types count as classes, sources or javadoc, and the
//! name given to libraries created for modules that have none yet.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::DependencyKind;
use crate::error::{Result, config_invalid, config_not_found, config_parse_failed, config_read_failed};

/// Config file looked up in the current directory when none is given
pub const CONFIG_FILE: &str = "rootsync.yaml";

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "ROOTSYNC_CONFIG";

const DEFAULT_LIBRARY_NAME: &str = "resolved";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name for libraries created by a sync
    pub library_name: String,

    pub artifact_types: ArtifactTypes,
}

/// Artifact types mapped onto each dependency kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactTypes {
    pub classes: Vec<String>,
    pub sources: Vec<String>,
    pub javadoc: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            artifact_types: ArtifactTypes::default(),
        }
    }
}

impl Default for ArtifactTypes {
    fn default() -> Self {
        fn owned(types: &[&str]) -> Vec<String> {
            types.iter().map(ToString::to_string).collect()
        }

        Self {
            classes: owned(&["jar", "bundle", "ejb", "maven-plugin"]),
            sources: owned(&["source", "sources", "src"]),
            javadoc: owned(&["javadoc", "doc", "docs"]),
        }
    }
}

impl ArtifactTypes {
    fn lists(&self) -> [(DependencyKind, &[String]); 3] {
        [
            (DependencyKind::Classes, self.classes.as_slice()),
            (DependencyKind::Sources, self.sources.as_slice()),
            (DependencyKind::Javadoc, self.javadoc.as_slice()),
        ]
    }

    /// Kind for an artifact type, matched case-insensitively
    pub fn kind_for(&self, artifact_type: &str) -> Option<DependencyKind> {
        self.lists().into_iter().find_map(|(kind, types)| {
            types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(artifact_type))
                .then_some(kind)
        })
    }
}

impl Config {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path, or `rootsync.yaml` in `dir`.
    ///
    /// An explicit path must exist. Without one, a missing default file means
    /// default settings.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(config_not_found(path.display().to_string()));
            }
            return Self::from_file(path);
        }

        let default_path: PathBuf = dir.join(CONFIG_FILE);
        if default_path.exists() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.library_name.trim().is_empty() {
            return Err(config_invalid("library_name cannot be empty"));
        }

        let lists = self.artifact_types.lists();
        for (i, (kind, types)) in lists.iter().enumerate() {
            for artifact_type in *types {
                let clash = lists[i + 1..].iter().find(|(_, other)| {
                    other.iter().any(|t| t.eq_ignore_ascii_case(artifact_type))
                });
                if let Some((other_kind, _)) = clash {
                    return Err(config_invalid(format!(
                        "artifact type '{artifact_type}' is listed for both {kind} and {other_kind}"
                    )));
                }
            }
        }

        Ok(())
    }
}
