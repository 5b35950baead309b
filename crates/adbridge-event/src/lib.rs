//! Event types for the adbridge event bridge.
//!
//! This crate defines the one message type flowing through the bridge:
//! an immutable [`Event`] describing a single occurrence on a
//! [`Channel`](adbridge_types::Channel), produced on arbitrary SDK
//! threads and consumed exactly once on the host's frame-loop thread.
//!
//! # Event flow
//!
//! ```text
//! SDK callback thread            frame-loop thread
//! ┌──────────────────┐           ┌─────────────────────────┐
//! │ ProducerHandle   │  enqueue  │ Bridge::update()        │
//! │  on_*_event(..)  │ ────────► │   drain_snapshot()      │
//! │  builds Event    │           │   dispatch per event    │
//! └──────────────────┘           └─────────────────────────┘
//! ```
//!
//! # Event names
//!
//! | Channel | Names |
//! |---------|-------|
//! | `Init` | `initialized`, `init_failed` |
//! | `Interstitial` | `loaded`, `failed_to_load`, `show_failed`, `shown`, `clicked`, `closed`, `expired` |
//! | `Rewarded` | the interstitial set plus `reward` |
//!
//! Terminal names (the ones that end an interaction and free the
//! channel's callback slot) are `show_failed`, `closed` and `expired`;
//! init events are always terminal.
//!
//! # Invariants
//!
//! - `amount`/`currency` are populated only on the `Rewarded` channel.
//!   The constructors enforce this; there is no public way to build an
//!   interstitial event carrying reward data.
//! - `retry_count` starts at zero and only moves through
//!   [`Event::with_retry`], which consumes the original.

mod event;

pub use event::{Event, RewardOutcome, TERMINAL_SHOW_EVENTS};

// Re-exported for adapter convenience.
pub use adbridge_types::Channel;
