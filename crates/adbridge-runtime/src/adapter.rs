//! External seams: the host-side consumer and the SDK-side binding.
//!
//! The bridge core never talks to a scripting host or a native SDK
//! directly. Delivery goes through [`ConsumerAdapter`]; trigger calls
//! (initialize, show, availability) go through [`SdkBinding`]. Both
//! are implemented per platform outside this crate.

use adbridge_event::Event;
use adbridge_types::Channel;

/// Result of one delivery attempt into the host.
///
/// | Outcome | Meaning | Engine reaction |
/// |---------|---------|-----------------|
/// | `SetupFailure` | callback could not be entered at all | bounded requeue (Init: drop) |
/// | `ExecutionError` | callback body raised | treated as delivered, logged |
/// | `Delivered` | callback ran | delivered |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The handle could not be entered or invoked, e.g. the host is
    /// mid-teardown or between frames. The event itself was not seen
    /// by the callback.
    SetupFailure,
    /// The callback body raised an error. The handle counts as used;
    /// the error goes to the host's own error channel, not ours.
    ExecutionError(String),
    /// The callback ran to completion.
    Delivered,
}

/// Turns an [`Event`] into the host's native representation and
/// invokes the registered callback.
///
/// Implementations must be callable only from the consumer thread and
/// must not panic across this boundary: every failure mode is a
/// [`DeliveryOutcome`] variant.
pub trait ConsumerAdapter {
    /// Opaque token linking a channel to a host-side callback.
    type Handle;

    /// Attempts delivery of `event` through `handle`.
    fn invoke(&self, handle: &Self::Handle, event: &Event) -> DeliveryOutcome;

    /// Hands a handle back to the host, destroying it.
    ///
    /// Called exactly once per handle: on terminal delivery, on
    /// re-registration (last-registration-wins), or at teardown.
    fn release(&self, handle: Self::Handle);
}

/// Parameters of an `init` trigger call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitParams {
    /// Ad network application key. Must be non-empty.
    pub app_key: String,
    /// Enables the SDK's test-ad mode.
    pub testing: bool,
    /// SDK log verbosity tag (`"none"`, `"debug"`, ...), passed
    /// through as-is.
    pub log_level: String,
}

impl InitParams {
    /// Creates params with testing off and log level `"none"`.
    #[must_use]
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            testing: false,
            log_level: "none".to_string(),
        }
    }

    /// Sets test-ad mode.
    #[must_use]
    pub fn with_testing(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    /// Sets the SDK log verbosity tag.
    #[must_use]
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }
}

/// Native SDK trigger interface.
///
/// Every method returns whether the SDK accepted the call. A refusal
/// makes the bridge synthesize a well-formed terminal failure event,
/// so callers observe a consistent event shape regardless of platform
/// support. Results arrive later through a
/// [`ProducerHandle`](crate::ProducerHandle) the binding holds.
pub trait SdkBinding {
    /// Starts SDK initialization. The init result event follows
    /// asynchronously on acceptance.
    fn initialize(&self, params: &InitParams) -> bool;

    /// Starts showing an ad on a showable channel.
    fn show(&self, channel: Channel) -> bool;

    /// Synchronously queries ad availability. Not routed through the
    /// event queue.
    fn is_available(&self, channel: Channel) -> bool;
}

/// Binding for platforms without SDK support.
///
/// Refuses every trigger, which makes the bridge synthesize the fixed
/// terminal failure events; availability is always `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSdk;

impl SdkBinding for UnsupportedSdk {
    fn initialize(&self, _params: &InitParams) -> bool {
        false
    }

    fn show(&self, _channel: Channel) -> bool {
        false
    }

    fn is_available(&self, _channel: Channel) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_params_defaults() {
        let params = InitParams::new("key-1");
        assert_eq!(params.app_key, "key-1");
        assert!(!params.testing);
        assert_eq!(params.log_level, "none");
    }

    #[test]
    fn init_params_builders() {
        let params = InitParams::new("key-1")
            .with_testing(true)
            .with_log_level("debug");
        assert!(params.testing);
        assert_eq!(params.log_level, "debug");
    }

    #[test]
    fn unsupported_sdk_refuses_everything() {
        let sdk = UnsupportedSdk;
        assert!(!sdk.initialize(&InitParams::new("x")));
        assert!(!sdk.show(Channel::Interstitial));
        assert!(!sdk.show(Channel::Rewarded));
        assert!(!sdk.is_available(Channel::Rewarded));
    }
}
