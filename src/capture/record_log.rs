//! The shared, append-only record log.
//!
//! `PacketLog` is the single point of contention between the capture paths
//! (one producer thread per direction, possibly more) and any consumer that
//! renders or exports records. It is an explicit, constructible store:
//! orchestration code creates one and hands it to every collaborator rather
//! than anyone reaching for process-global state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{info, trace};

use crate::formatting::hex::hex_dump;

use super::types::PacketRecord;

/// Append preview length for TRACE logging.
const TRACE_PREVIEW_BYTES: usize = 16;

/// Ordered, lock-protected collection of captured records.
///
/// Records appear in the order their `append` calls acquired the lock and
/// are never reordered or edited afterwards. Consumers observe whole
/// records only; the lock is held for the duration of each mutation or
/// read, and nothing inside a critical section performs I/O or blocks.
#[derive(Debug, Default)]
pub struct PacketLog {
    records: Mutex<Vec<PacketRecord>>,
}

impl PacketLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    // A panicking appender must not strand the log, so poison is shed and
    // the inner state reused. Every record in it was fully inserted.
    fn lock(&self) -> MutexGuard<'_, Vec<PacketRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends one record to the end of the log.
    pub fn append(&self, record: PacketRecord) {
        trace!(
            "logged {} {} ({} bytes): {}",
            record.direction().tag(),
            record.resolved_name(),
            record.original_size(),
            hex_dump(record.payload(), Some(TRACE_PREVIEW_BYTES)),
        );
        self.lock().push(record);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clones the current sequence in insertion order.
    pub fn snapshot(&self) -> Vec<PacketRecord> {
        self.lock().clone()
    }

    /// Runs `f` over the current records while holding the lock, avoiding a
    /// clone when the caller only needs to read. `f` must not block.
    pub fn with_records<R>(&self, f: impl FnOnce(&[PacketRecord]) -> R) -> R {
        f(&self.lock())
    }

    /// Removes every record as one atomic step.
    pub fn clear(&self) {
        let mut records = self.lock();
        let dropped = records.len();
        records.clear();
        info!("cleared packet log ({dropped} records)");
    }
}
