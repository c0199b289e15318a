//! Sync passes: registering a module's records in resolver order
//!
//! Records for one library are registered strictly one after another, since
//! each duplicate check depends on everything registered before it. Different
//! modules have different libraries and can be synced concurrently with
//! [`sync_modules`].

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info};

use crate::diagnostics::Diagnostics;
use crate::domain::DependencyRecord;
use crate::library::LibraryModel;
use crate::registration::{RegistrationEngine, RegistrationOutcome, SkipReason};

/// Cooperative cancellation shared between a pass and whoever may abort it.
///
/// Cloning shares the state; cancelling any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Counts of what one pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub registered: usize,
    pub duplicates: usize,
    pub unresolved: usize,
    pub vanished: usize,
    /// The pass stopped before reaching the last record
    pub cancelled: bool,
    /// The pass panicked; counts are lost
    pub failed: bool,
}

impl SyncReport {
    pub fn processed(&self) -> usize {
        self.registered + self.duplicates + self.unresolved + self.vanished
    }

    pub fn warnings(&self) -> usize {
        self.unresolved + self.vanished
    }

    fn record(&mut self, outcome: &RegistrationOutcome) {
        match outcome {
            RegistrationOutcome::Registered { .. } => self.registered += 1,
            RegistrationOutcome::Skipped(SkipReason::Duplicate) => self.duplicates += 1,
            RegistrationOutcome::Skipped(SkipReason::Unresolved) => self.unresolved += 1,
            RegistrationOutcome::Skipped(SkipReason::Vanished) => self.vanished += 1,
        }
    }

    /// Add another report's counts into this one
    pub fn merge(&mut self, other: &SyncReport) {
        self.registered += other.registered;
        self.duplicates += other.duplicates;
        self.unresolved += other.unresolved;
        self.vanished += other.vanished;
        self.cancelled |= other.cancelled;
        self.failed |= other.failed;
    }
}

/// One synchronization pass against one library model
#[derive(Debug, Clone, Default)]
pub struct SyncPass {
    engine: RegistrationEngine,
    cancel: CancellationToken,
}

impl SyncPass {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self {
            engine: RegistrationEngine::new(diagnostics),
            cancel: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Register `records` in order, stopping early if cancelled.
    ///
    /// Whatever was registered before cancellation stays in the model.
    pub fn run<I>(&self, records: I, library: &mut dyn LibraryModel) -> SyncReport
    where
        I: IntoIterator<Item = DependencyRecord>,
    {
        let mut report = SyncReport::default();

        for record in records {
            if self.cancel.is_cancelled() {
                debug!("Sync of {} library cancelled", library.name());
                report.cancelled = true;
                break;
            }
            let outcome = self.engine.register(&record, library);
            report.record(&outcome);
        }

        info!(
            "Synced {} library: {} registered, {} already present, {} skipped",
            library.name(),
            report.registered,
            report.duplicates,
            report.warnings()
        );
        report
    }
}

/// Run one pass per (records, library) pair on scoped threads.
///
/// Reports come back in input order. A pass that panics yields a report with
/// `failed` set; the other passes are unaffected.
pub fn sync_modules<L>(pass: &SyncPass, jobs: Vec<(Vec<DependencyRecord>, &mut L)>) -> Vec<SyncReport>
where
    L: LibraryModel + Send,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .into_iter()
            .map(|(records, library)| {
                let name = library.name().to_string();
                (name, scope.spawn(move || pass.run(records, library)))
            })
            .collect();

        handles
            .into_iter()
            .map(|(name, handle)| {
                handle.join().unwrap_or_else(|payload| {
                    error!("Sync of {} library panicked: {}", name, panic_message(&*payload));
                    SyncReport {
                        failed: true,
                        ..SyncReport::default()
                    }
                })
            })
            .collect()
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
