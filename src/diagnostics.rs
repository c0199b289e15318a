//! Diagnostic events emitted while registering dependencies
//!
//! Events describe what registration decided; they never influence it. Sinks
//! return nothing, so a sink cannot fail a registration. The [`Diagnostics`]
//! context is created by whoever drives a sync pass and handed to the engine.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{ArtifactDescriptor, DependencyKind};
use crate::library::RootUrl;

/// Why a record produced a skip warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningReason {
    /// The resolver supplied no local file
    Unresolved,
    /// A local file was supplied but does not exist
    Vanished,
}

/// One diagnostic event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    SkipWarning {
        reason: WarningReason,
        descriptor: ArtifactDescriptor,
        kind: DependencyKind,
        path: Option<PathBuf>,
    },
    SkipInfo {
        path: PathBuf,
        library: String,
        kind: DependencyKind,
    },
    Registered {
        path: PathBuf,
        url: RootUrl,
        kind: DependencyKind,
        library: String,
    },
}

impl DiagnosticEvent {
    pub fn is_warning(&self) -> bool {
        matches!(self, DiagnosticEvent::SkipWarning { .. })
    }

    /// Human readable message for this event
    pub fn message(&self) -> String {
        match self {
            DiagnosticEvent::SkipWarning {
                reason: WarningReason::Unresolved,
                descriptor,
                kind,
                ..
            } => format!(
                "Not registering external {kind} dependency for module {} as the file does not seem to exist",
                descriptor.module()
            ),
            DiagnosticEvent::SkipWarning {
                reason: WarningReason::Vanished,
                kind,
                path,
                ..
            } => format!(
                "Not registering external {kind} file dependency as the file does not seem to exist: {}",
                path.as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default()
            ),
            DiagnosticEvent::SkipInfo {
                path,
                library,
                kind,
            } => format!(
                "Not re-registering external {kind} file dependency {} as it is already part of the {library} library",
                path.display()
            ),
            DiagnosticEvent::Registered { path, kind, .. } => format!(
                "Registering external {kind} file dependency: {}",
                path.display()
            ),
        }
    }
}

/// Receiver for diagnostic events
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: &DiagnosticEvent);
}

/// Forwards events to `tracing`: warnings at WARN, everything else at INFO
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, event: &DiagnosticEvent) {
        if event.is_warning() {
            tracing::warn!("{}", event.message());
        } else {
            tracing::info!("{}", event.message());
        }
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _event: &DiagnosticEvent) {}
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events collected so far
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn warning_count(&self) -> usize {
        self.events().iter().filter(|e| e.is_warning()).count()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, event: &DiagnosticEvent) {
        // A poisoned lock only loses the event
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Observability context injected into a sync pass
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Context that forwards to `tracing`
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    /// Context that drops everything
    pub fn disabled() -> Self {
        Self::new(Arc::new(NullSink))
    }

    pub fn emit(&self, event: &DiagnosticEvent) {
        self.sink.emit(event);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::tracing()
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}
