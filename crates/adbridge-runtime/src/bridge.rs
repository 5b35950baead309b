//! Host-facing bridge facade.

use crate::adapter::{ConsumerAdapter, InitParams, SdkBinding};
use crate::dispatch::DispatchEngine;
use crate::error::BridgeError;
use crate::pending::PendingResultStore;
use crate::producer::ProducerHandle;
use crate::queue::EventQueue;
use adbridge_event::{Event, RewardOutcome};
use adbridge_types::Channel;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Fixed error tag synthesized when the SDK refuses an init trigger.
const INIT_REFUSED_TAG: &str = "sdk_initialize_failed";
/// Fixed error tag synthesized when the SDK refuses a show trigger.
const SHOW_REFUSED_TAG: &str = "sdk_show_failed";

/// The one bridge instance of a process.
///
/// Ties together the queue, the dispatch engine, the SDK binding and
/// the producer surface. Created at process start, torn down once at
/// process end; pass it explicitly rather than stashing it in a
/// global.
///
/// # Threading
///
/// Every method here is consumer-thread-only. Producer threads get
/// their own surface via [`producer`](Self::producer).
///
/// # Example
///
/// ```
/// use adbridge_runtime::{Bridge, ConsumerAdapter, DeliveryOutcome,
///     InitParams, UnsupportedSdk};
/// use adbridge_runtime::Event;
///
/// struct NullConsumer;
/// impl ConsumerAdapter for NullConsumer {
///     type Handle = ();
///     fn invoke(&self, _: &(), _: &Event) -> DeliveryOutcome {
///         DeliveryOutcome::Delivered
///     }
///     fn release(&self, _: ()) {}
/// }
///
/// let bridge = Bridge::new(NullConsumer, UnsupportedSdk);
/// bridge.init(InitParams::new("app-key"), ()).unwrap();
/// bridge.update(); // delivers the synthesized init_failed event
/// ```
pub struct Bridge<C: ConsumerAdapter, S: SdkBinding> {
    queue: Arc<EventQueue>,
    pending: Arc<PendingResultStore>,
    engine: DispatchEngine<C>,
    sdk: S,
    shut_down: AtomicBool,
}

impl<C: ConsumerAdapter, S: SdkBinding> Bridge<C, S> {
    /// Creates a bridge over the given consumer adapter and SDK
    /// binding.
    #[must_use]
    pub fn new(consumer: C, sdk: S) -> Self {
        let queue = Arc::new(EventQueue::new());
        let pending = Arc::new(PendingResultStore::new());
        Self {
            engine: DispatchEngine::new(Arc::clone(&queue), Arc::clone(&pending), consumer),
            queue,
            pending,
            sdk,
            shut_down: AtomicBool::new(false),
        }
    }

    /// Returns a producer surface for the SDK binding.
    ///
    /// Cheap to clone; the only bridge object producer threads may
    /// hold.
    #[must_use]
    pub fn producer(&self) -> ProducerHandle {
        ProducerHandle::new(Arc::clone(&self.queue))
    }

    /// Returns the consumer adapter.
    #[must_use]
    pub fn consumer(&self) -> &C {
        self.engine.consumer()
    }

    /// Starts SDK initialization, registering `handle` to receive the
    /// (single) init result event.
    ///
    /// If the SDK refuses the call, a terminal `init_failed` event
    /// with a fixed error tag is enqueued instead, so the callback
    /// always fires with a consistent shape.
    ///
    /// # Errors
    ///
    /// [`BridgeError::MissingAppKey`] if `params.app_key` is empty,
    /// before the queue is touched; [`BridgeError::ShutDown`] after
    /// teardown.
    pub fn init(&self, params: InitParams, handle: C::Handle) -> Result<(), BridgeError> {
        self.check_live()?;
        if params.app_key.is_empty() {
            return Err(BridgeError::MissingAppKey);
        }

        self.engine.register(Channel::Init, handle);
        if !self.sdk.initialize(&params) {
            warn!("sdk refused initialize, synthesizing init_failed");
            self.queue
                .enqueue(Event::init_result(false, Some(INIT_REFUSED_TAG.to_string())));
        }
        Ok(())
    }

    /// Starts showing an ad, registering `handle` to receive the show
    /// lifecycle events up to and including the terminal one.
    ///
    /// An SDK refusal enqueues a terminal `show_failed` event with a
    /// fixed error tag.
    ///
    /// # Errors
    ///
    /// [`BridgeError::NotShowable`] for the Init channel;
    /// [`BridgeError::ShutDown`] after teardown.
    pub fn show(&self, channel: Channel, handle: C::Handle) -> Result<(), BridgeError> {
        self.check_live()?;
        if !channel.is_showable() {
            return Err(BridgeError::NotShowable(channel));
        }

        self.engine.register(channel, handle);
        if !self.sdk.show(channel) {
            warn!("sdk refused show on {channel}, synthesizing show_failed");
            self.queue.enqueue(Event::show_refused(channel, SHOW_REFUSED_TAG));
        }
        Ok(())
    }

    /// Synchronously queries ad availability for a showable channel.
    ///
    /// Goes straight to the SDK binding; never touches the queue.
    /// `false` for Init, and always `false` after shutdown.
    #[must_use]
    pub fn is_available(&self, channel: Channel) -> bool {
        !self.is_shut_down() && channel.is_showable() && self.sdk.is_available(channel)
    }

    /// Atomically reads and clears the pending rewarded outcome.
    ///
    /// The durable recovery path for rewards whose callback delivery
    /// failed or whose handle went stale; poll once per frame or on
    /// demand.
    #[must_use]
    pub fn poll_rewarded_result(&self) -> Option<RewardOutcome> {
        self.pending.poll_and_consume()
    }

    /// Drains one queue snapshot and dispatches every event.
    ///
    /// Must be called once per consumer-thread cycle (frame tick).
    /// No-op after shutdown.
    pub fn update(&self) {
        if self.is_shut_down() {
            return;
        }
        self.engine.run_cycle();
    }

    /// Tears the bridge down: stops drains and triggers, releases all
    /// live handles exactly once, discards queued events and any
    /// pending reward.
    ///
    /// Idempotent; the second call is a no-op.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("bridge shutting down");
        self.engine.release_all();
        self.queue.clear();
        self.pending.clear();
    }

    /// Returns `true` once [`shutdown`](Self::shutdown) has run.
    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    fn check_live(&self) -> Result<(), BridgeError> {
        if self.is_shut_down() {
            Err(BridgeError::ShutDown)
        } else {
            Ok(())
        }
    }
}
