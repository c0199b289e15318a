//! Domain models for rootsync
//!
//! Pure data describing resolved artifacts and the records registered from them.
//! Nothing in here touches the filesystem except [`DependencyRecord::is_missing`].

pub mod artifact;
pub mod dependency;

pub use artifact::{ArtifactDescriptor, ModuleRevisionId};
pub use dependency::{DependencyKind, DependencyRecord, RootCategory};
