//! rootsync - resolved dependency synchronization
//!
//! Registers artifacts produced by an external dependency resolver into
//! per-module library models, routing each to its root category and never
//! adding the same file twice.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod library;
pub mod path_identity;
pub mod registration;
pub mod resolve;
pub mod sync;

#[cfg(test)]
mod test_fixtures;

pub use diagnostics::{DiagnosticEvent, DiagnosticSink, Diagnostics};
pub use domain::{ArtifactDescriptor, DependencyKind, DependencyRecord, ModuleRevisionId, RootCategory};
pub use library::{Library, LibraryModel, LibraryTable, RootUrl};
pub use registration::{RegistrationEngine, RegistrationOutcome, SkipReason};
pub use sync::{CancellationToken, SyncPass, SyncReport};
