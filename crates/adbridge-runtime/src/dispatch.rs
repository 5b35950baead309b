//! The per-event dispatch state machine.
//!
//! One engine instance serves one bridge. Each frame, the consumer
//! thread drains a snapshot of the queue and runs every event through
//! [`DispatchEngine::dispatch`]:
//!
//! ```text
//! event ──► handle registered? ──no──► drop (nobody listening)
//!               │ yes (checkout)
//!               ▼
//!          reward-bearing? ──yes──► PendingResultStore::update
//!               │                      (before delivery: durable even
//!               ▼                       if the callback is stale)
//!          ConsumerAdapter::invoke
//!               │
//!    ┌──────────┼───────────────┐
//!    ▼          ▼               ▼
//! SetupFailure  ExecutionError  Delivered
//!    │          └──────┬────────┘
//!    │                 ▼
//!    │          terminal? ──yes──► release handle
//!    │                 │ no
//!    │                 ▼
//!    │          restore handle
//!    │
//!    ├─ Init: drop event, release handle (no later point to deliver to)
//!    ├─ retry_count < 120: restore handle, requeue with retry_count + 1
//!    └─ budget exhausted: restore handle, drop and log
//! ```
//!
//! Retrying by requeue means "try again on a later drain cycle", which
//! gives a paused or mid-teardown host a frame to recover without
//! introducing timers into the core.

use crate::adapter::{ConsumerAdapter, DeliveryOutcome};
use crate::pending::PendingResultStore;
use crate::queue::EventQueue;
use crate::registry::ChannelRegistry;
use adbridge_event::Event;
use adbridge_types::Channel;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Maximum number of requeues for one logical event.
///
/// At one drain per host frame this is roughly two seconds of retries
/// at 60 fps; past it the host has moved on and the event is dropped.
pub const RETRY_LIMIT: u32 = 120;

/// Drains the queue and drives every event through delivery, handle
/// lifecycle and the pending-reward side effect.
///
/// All methods are consumer-thread-only. Delivery happens with no
/// registry lock held (see [`ChannelRegistry`]'s checkout protocol),
/// so a callback may re-enter the bridge and trigger the next show.
#[derive(Debug)]
pub struct DispatchEngine<C: ConsumerAdapter> {
    queue: Arc<EventQueue>,
    pending: Arc<PendingResultStore>,
    registry: ChannelRegistry<C::Handle>,
    consumer: C,
}

impl<C: ConsumerAdapter> DispatchEngine<C> {
    /// Creates an engine over shared queue and pending-store state.
    #[must_use]
    pub fn new(queue: Arc<EventQueue>, pending: Arc<PendingResultStore>, consumer: C) -> Self {
        Self {
            queue,
            pending,
            registry: ChannelRegistry::new(),
            consumer,
        }
    }

    /// Returns the consumer adapter.
    #[must_use]
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Returns `true` if the channel currently has a live handle.
    #[must_use]
    pub fn is_registered(&self, channel: Channel) -> bool {
        self.registry.is_registered(channel)
    }

    /// Registers a callback handle for a channel, releasing the
    /// previous occupant (last-registration-wins).
    pub fn register(&self, channel: Channel, handle: C::Handle) {
        if let Some(previous) = self.registry.register(channel, handle) {
            debug!("{channel}: replacing registered callback");
            self.consumer.release(previous);
        }
    }

    /// Drains one snapshot and dispatches every drained event in
    /// arrival order.
    pub fn run_cycle(&self) {
        for event in self.queue.drain_snapshot() {
            self.dispatch(event);
        }
    }

    /// Runs one event through the state machine.
    pub fn dispatch(&self, event: Event) {
        let Some(handle) = self.registry.take(event.channel) else {
            debug!(
                "{}: dropping '{}', no callback registered",
                event.channel, event.name
            );
            return;
        };

        if let Some(outcome) = event.reward_outcome() {
            self.pending.update(outcome);
        }

        match self.consumer.invoke(&handle, &event) {
            DeliveryOutcome::SetupFailure => self.on_setup_failure(event, handle),
            DeliveryOutcome::ExecutionError(message) => {
                error!(
                    "{}: callback for '{}' raised: {message}",
                    event.channel, event.name
                );
                self.finish_delivered(event, handle);
            }
            DeliveryOutcome::Delivered => self.finish_delivered(event, handle),
        }
    }

    fn on_setup_failure(&self, event: Event, handle: C::Handle) {
        if event.channel == Channel::Init {
            // An init callback has no meaningful later point to
            // deliver to.
            warn!("init: callback could not be entered, dropping result");
            self.consumer.release(handle);
        } else if event.retry_count < RETRY_LIMIT {
            debug!(
                "{}: setup failure for '{}', requeueing (retry {})",
                event.channel,
                event.name,
                event.retry_count + 1
            );
            self.restore(event.channel, handle);
            self.queue.enqueue(event.with_retry());
        } else {
            warn!(
                "{}: '{}' permanently failed after {RETRY_LIMIT} retries, dropping",
                event.channel, event.name
            );
            self.restore(event.channel, handle);
        }
    }

    fn finish_delivered(&self, event: Event, handle: C::Handle) {
        if event.is_terminal() {
            debug!("{}: '{}' is terminal, releasing callback", event.channel, event.name);
            self.consumer.release(handle);
        } else {
            self.restore(event.channel, handle);
        }
    }

    fn restore(&self, channel: Channel, handle: C::Handle) {
        if let Some(stale) = self.registry.restore(channel, handle) {
            // The callback registered a replacement while checked out.
            debug!("{channel}: callback replaced during delivery, releasing stale handle");
            self.consumer.release(stale);
        }
    }

    /// Releases every live handle. Teardown only.
    pub fn release_all(&self) {
        for handle in self.registry.take_all() {
            self.consumer.release(handle);
        }
    }
}
