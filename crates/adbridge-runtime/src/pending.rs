//! Durable single-slot store for the latest unconsumed reward.

use adbridge_event::RewardOutcome;
use parking_lot::Mutex;
use tracing::debug;

/// Overwrite-latest slot for the last unconsumed rewarded outcome.
///
/// A host callback handle can go stale across a pause/resume boundary
/// while the SDK's asynchronous reward notification still arrives.
/// This slot is the recovery path that does not depend on callback
/// validity: the dispatch engine writes it before attempting delivery,
/// and the host polls it out-of-band once per frame or on demand.
#[derive(Debug, Default)]
pub struct PendingResultStore {
    slot: Mutex<Option<RewardOutcome>>,
}

impl PendingResultStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Overwrites the slot with a newer outcome.
    pub fn update(&self, outcome: RewardOutcome) {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            debug!("overwriting unconsumed pending reward");
        }
        *slot = Some(outcome);
    }

    /// Atomically reads and clears the slot.
    #[must_use]
    pub fn poll_and_consume(&self) -> Option<RewardOutcome> {
        self.slot.lock().take()
    }

    /// Empties the slot. Teardown only.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}
