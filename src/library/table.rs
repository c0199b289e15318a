//! Library table (rootsync.library.yaml) data structures
//!
//! Holds one library per module. This is the host model the CLI syncs into;
//! embedders with their own model implement [`LibraryModel`] directly.
//!
//! [`LibraryModel`]: super::LibraryModel

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::Library;
use crate::error::{Result, library_read_failed, library_write_failed};

/// Default file name of the library table
pub const LIBRARY_TABLE_FILE: &str = "rootsync.library.yaml";

/// Persisted set of per-module libraries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryTable {
    #[serde(default)]
    pub modules: Vec<ModuleLibrary>,
}

/// The library attached to one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleLibrary {
    pub module: String,
    pub library: Library,
}

impl LibraryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from `path`; a missing file yields an empty table
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| library_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content)
            .map_err(|e| library_read_failed(path.display().to_string(), e.to_string()))
    }

    /// Write the table to `path` through a temp file in the same directory
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |e: &dyn std::fmt::Display| {
            library_write_failed(path.display().to_string(), e.to_string())
        };

        let yaml = self.to_yaml().map_err(|e| write_err(&e))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| write_err(&e))?;
        file.write_all(yaml.as_bytes()).map_err(|e| write_err(&e))?;
        file.persist(path).map_err(|e| write_err(&e.error))?;
        Ok(())
    }

    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Find a module's library
    pub fn find(&self, module: &str) -> Option<&Library> {
        self.modules
            .iter()
            .find(|m| m.module == module)
            .map(|m| &m.library)
    }

    /// Library for `module`, created with `library_name` if the module has none yet
    pub fn library_mut(&mut self, module: &str, library_name: &str) -> &mut Library {
        let pos = match self.modules.iter().position(|m| m.module == module) {
            Some(pos) => pos,
            None => {
                self.modules.push(ModuleLibrary {
                    module: module.to_string(),
                    library: Library::new(library_name),
                });
                self.modules.len() - 1
            }
        };
        &mut self.modules[pos].library
    }
}
