//! adbridge runtime - the cross-thread event bridge core.
//!
//! This crate bridges asynchronous callbacks fired from a
//! multi-threaded native ad SDK into a single-threaded scripting host
//! that may only be entered from one designated `update()` point in
//! its frame loop.
//!
//! # Architecture
//!
//! ```text
//! SDK callback threads (any number, any time)
//!        │ ProducerHandle::on_*_event → Event
//!        ▼
//! ┌──────────────┐
//! │  EventQueue  │  thread-safe FIFO, drained once per frame
//! └──────────────┘
//!        │ drain_snapshot (frame-loop thread only)
//!        ▼
//! ┌────────────────────────────────────────────────┐
//! │  DispatchEngine                                │
//! │   ├─ ChannelRegistry   (one handle / channel)  │
//! │   ├─ ConsumerAdapter   (host invocation)       │
//! │   └─ PendingResultStore (durable reward slot)  │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`queue`] - [`EventQueue`](queue::EventQueue): multi-producer
//!   FIFO with snapshot draining.
//! - [`registry`] - [`ChannelRegistry`](registry::ChannelRegistry):
//!   at-most-one callback handle per channel, last-registration-wins.
//! - [`dispatch`] - [`DispatchEngine`](dispatch::DispatchEngine): the
//!   per-event state machine with retry-by-requeue.
//! - [`pending`] - [`PendingResultStore`](pending::PendingResultStore):
//!   single-slot poll-and-consume reward fallback.
//! - [`adapter`] - the external seams: [`ConsumerAdapter`],
//!   [`SdkBinding`], [`DeliveryOutcome`].
//! - [`producer`] - [`ProducerHandle`]: the surface SDK bindings push
//!   events through, callable from any thread.
//! - [`bridge`] - [`Bridge`]: the host-facing facade tying it all
//!   together.
//!
//! # Threading contract
//!
//! [`ProducerHandle`] is the only type producer threads may touch.
//! Everything else ([`Bridge::update`], trigger calls, polling) belongs
//! to the single consumer thread. The queue and the pending slot are
//! the two cross-thread critical sections; registry slots are locked
//! only so a dispatched callback can re-enter the bridge (for example
//! to trigger the next show) without deadlocking.

pub mod adapter;
pub mod bridge;
pub mod dispatch;
pub mod pending;
pub mod producer;
pub mod queue;
pub mod registry;

mod error;

pub use adapter::{ConsumerAdapter, DeliveryOutcome, InitParams, SdkBinding, UnsupportedSdk};
pub use bridge::Bridge;
pub use dispatch::{DispatchEngine, RETRY_LIMIT};
pub use error::BridgeError;
pub use pending::PendingResultStore;
pub use producer::ProducerHandle;
pub use queue::EventQueue;
pub use registry::ChannelRegistry;

// Re-exports for downstream adapters.
pub use adbridge_event::{Channel, Event, RewardOutcome};
