//! Runtime layer errors.
//!
//! These are the caller-input errors of the host-facing trigger
//! surface: they are reported synchronously at the call site and never
//! enter the event queue. Dispatch-time failures are not errors of
//! this type; they are handled inside the engine (bounded requeue,
//! logged drop).
//!
//! | Variant | Code | Recoverable |
//! |---------|------|-------------|
//! | [`BridgeError::MissingAppKey`] | `BRIDGE_MISSING_APP_KEY` | No |
//! | [`BridgeError::NotShowable`] | `BRIDGE_NOT_SHOWABLE` | No |
//! | [`BridgeError::ShutDown`] | `BRIDGE_SHUT_DOWN` | No |

use adbridge_types::{Channel, ErrorCode};
use thiserror::Error;

/// Synchronous error of a host-facing trigger call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// `init` was called with an empty app key. Checked before the
    /// queue is touched.
    #[error("init requires a non-empty app key")]
    MissingAppKey,

    /// `show` was called for a channel that cannot be shown (Init).
    #[error("channel '{0}' cannot be shown")]
    NotShowable(Channel),

    /// The bridge has been shut down; triggers and updates are no
    /// longer accepted.
    #[error("bridge is shut down")]
    ShutDown,
}

impl ErrorCode for BridgeError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingAppKey => "BRIDGE_MISSING_APP_KEY",
            Self::NotShowable(_) => "BRIDGE_NOT_SHOWABLE",
            Self::ShutDown => "BRIDGE_SHUT_DOWN",
        }
    }

    fn is_recoverable(&self) -> bool {
        // All of these need a different call, not a retry of the same one.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adbridge_types::assert_error_codes;

    fn all_variants() -> Vec<BridgeError> {
        vec![
            BridgeError::MissingAppKey,
            BridgeError::NotShowable(Channel::Init),
            BridgeError::ShutDown,
        ]
    }

    #[test]
    fn codes_follow_convention() {
        assert_error_codes(&all_variants(), "BRIDGE_");
    }

    #[test]
    fn none_are_recoverable() {
        assert!(all_variants().iter().all(|e| !e.is_recoverable()));
    }

    #[test]
    fn display_messages() {
        assert!(BridgeError::MissingAppKey.to_string().contains("app key"));
        assert!(BridgeError::NotShowable(Channel::Init)
            .to_string()
            .contains("init"));
        assert!(BridgeError::ShutDown.to_string().contains("shut down"));
    }
}
