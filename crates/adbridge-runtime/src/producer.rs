//! Producer-facing surface for SDK bindings.

use crate::queue::EventQueue;
use adbridge_event::Event;
use std::sync::Arc;
use tracing::debug;

/// Cheap-to-clone handle an SDK binding uses to push events into the
/// bridge.
///
/// Callable from any thread, including concurrently; never blocks the
/// caller beyond the queue's short critical section and never fails.
/// This is the only bridge surface producer threads may touch: handles
/// and registry state stay with the consumer thread.
#[derive(Debug, Clone)]
pub struct ProducerHandle {
    queue: Arc<EventQueue>,
}

impl ProducerHandle {
    pub(crate) fn new(queue: Arc<EventQueue>) -> Self {
        Self { queue }
    }

    /// Reports the outcome of SDK initialization.
    pub fn on_init_result(&self, success: bool, error_reason: Option<String>) {
        debug!("producer: init result success={success}");
        self.queue.enqueue(Event::init_result(success, error_reason));
    }

    /// Reports an interstitial lifecycle event.
    pub fn on_interstitial_event(&self, name: &str, success: bool, error_reason: Option<String>) {
        debug!("producer: interstitial {name}");
        self.queue.enqueue(Event::interstitial(name, success, error_reason));
    }

    /// Reports a rewarded lifecycle event.
    ///
    /// `rewarded` marks a `closed` event that followed a completed
    /// reward; `amount`/`currency` accompany `reward` events.
    pub fn on_rewarded_event(
        &self,
        name: &str,
        success: bool,
        error_reason: Option<String>,
        rewarded: bool,
        amount: f64,
        currency: Option<String>,
    ) {
        debug!("producer: rewarded {name}");
        self.queue.enqueue(Event::rewarded(
            name,
            success,
            error_reason,
            rewarded,
            amount,
            currency,
        ));
    }
}
