//! Host library models
//!
//! [`LibraryModel`] is the seam registration writes through. [`Library`] is the
//! in-memory model used by the CLI and in tests; [`LibraryTable`] persists one
//! library per module to YAML.

pub mod table;
pub mod url;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::RootCategory;

pub use table::{LibraryTable, ModuleLibrary};
pub use url::RootUrl;

/// A mutable, per-module library that roots are appended to
pub trait LibraryModel {
    /// Library name, used in diagnostics
    fn name(&self) -> &str;

    /// Existing roots under `category`, in insertion order
    fn roots(&self, category: RootCategory) -> &[RootUrl];

    /// Append a root under `category`
    fn add_root(&mut self, url: RootUrl, category: RootCategory);
}

/// In-memory library model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    roots: BTreeMap<RootCategory, Vec<RootUrl>>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roots: BTreeMap::new(),
        }
    }

    /// Total number of roots across all categories
    pub fn root_count(&self) -> usize {
        self.roots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.root_count() == 0
    }
}

impl LibraryModel for Library {
    fn name(&self) -> &str {
        &self.name
    }

    fn roots(&self, category: RootCategory) -> &[RootUrl] {
        self.roots.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    fn add_root(&mut self, url: RootUrl, category: RootCategory) {
        self.roots.entry(category).or_default().push(url);
    }
}
