//! Core types for the adbridge event bridge.
//!
//! This crate provides the foundational types shared by every layer of
//! the bridge:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Type Layer                              │
//! │  (SemVer stable, safe for adapters to depend on)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  adbridge-types : Channel, ErrorCode          ◄── HERE       │
//! │  adbridge-event : Event, RewardOutcome                       │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Runtime Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  adbridge-runtime : queue, registry, dispatch, bridge        │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Host Adapter Layer                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  adbridge-lua : Lua callback handles, ads module             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Contents
//!
//! - [`Channel`] — the three logical ad-interaction lines. This is the
//!   routing key for callback lifetime and outcome shape everywhere in
//!   the bridge.
//! - [`ErrorCode`] — unified machine-readable error interface, plus
//!   the [`assert_error_code`]/[`assert_error_codes`] test helpers.

mod channel;
mod error;

pub use channel::Channel;
pub use error::{assert_error_code, assert_error_codes, ErrorCode};
