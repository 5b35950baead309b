//! The bridge's message type and reward outcome value.

use adbridge_types::Channel;
use serde::{Deserialize, Serialize};

/// Event names that end a show interaction.
///
/// Delivering one of these on `Interstitial` or `Rewarded` releases
/// the channel's callback handle so the next `show` call can register
/// a fresh one. Intermediate names (`loaded`, `shown`, `clicked`,
/// `reward`, ...) keep the handle alive because more events for the
/// same show are expected.
pub const TERMINAL_SHOW_EVENTS: [&str; 3] = ["show_failed", "closed", "expired"];

/// One occurrence on a channel.
///
/// Events are immutable values: a producer constructs one, the
/// dispatch engine consumes it exactly once. The only mutation-like
/// operation is [`with_retry`](Self::with_retry), which consumes the
/// event and yields a copy with the retry counter incremented.
///
/// # Why no `Default`?
///
/// An event without a channel and a name is meaningless; use the
/// channel-specific constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Routing key: which interaction line this event belongs to.
    pub channel: Channel,
    /// SDK-defined event tag, e.g. `"shown"`, `"closed"`, `"reward"`.
    pub name: String,
    /// Whether the SDK reported the occurrence as successful.
    pub success: bool,
    /// SDK-provided failure reason, if any.
    pub error: Option<String>,
    /// `Rewarded` only: whether a `closed` event followed a completed
    /// reward.
    pub rewarded: bool,
    /// `Rewarded` only: reward amount, non-negative.
    pub amount: Option<f64>,
    /// `Rewarded` only: reward currency tag.
    pub currency: Option<String>,
    /// Times this event has been requeued after a delivery failure.
    pub retry_count: u32,
}

impl Event {
    /// Creates the single event of an `init` call.
    ///
    /// The name is derived from the outcome: `"initialized"` on
    /// success, `"init_failed"` otherwise.
    #[must_use]
    pub fn init_result(success: bool, error: Option<String>) -> Self {
        Self {
            channel: Channel::Init,
            name: if success { "initialized" } else { "init_failed" }.to_string(),
            success,
            error,
            rewarded: false,
            amount: None,
            currency: None,
            retry_count: 0,
        }
    }

    /// Creates an interstitial event.
    #[must_use]
    pub fn interstitial(name: impl Into<String>, success: bool, error: Option<String>) -> Self {
        Self {
            channel: Channel::Interstitial,
            name: name.into(),
            success,
            error,
            rewarded: false,
            amount: None,
            currency: None,
            retry_count: 0,
        }
    }

    /// Creates a rewarded event.
    ///
    /// A non-positive `amount` is recorded as absent so the host never
    /// sees a zero-amount reward field (matching the wire shape the
    /// host expects).
    #[must_use]
    pub fn rewarded(
        name: impl Into<String>,
        success: bool,
        error: Option<String>,
        rewarded: bool,
        amount: f64,
        currency: Option<String>,
    ) -> Self {
        Self {
            channel: Channel::Rewarded,
            name: name.into(),
            success,
            error,
            rewarded,
            amount: (amount > 0.0).then_some(amount),
            currency,
            retry_count: 0,
        }
    }

    /// Creates the synthesized terminal failure for a refused `show`
    /// trigger.
    ///
    /// Used when the SDK binding rejects the call (or the platform has
    /// no binding at all), so callers always observe a well-formed
    /// `show_failed` event instead of silence.
    #[must_use]
    pub fn show_refused(channel: Channel, error: impl Into<String>) -> Self {
        Self {
            channel,
            name: "show_failed".to_string(),
            success: false,
            error: Some(error.into()),
            rewarded: false,
            amount: None,
            currency: None,
            retry_count: 0,
        }
    }

    /// Consumes the event, returning a requeue copy with
    /// `retry_count + 1`.
    #[must_use]
    pub fn with_retry(mut self) -> Self {
        self.retry_count += 1;
        self
    }

    /// Returns `true` if delivering this event ends the interaction
    /// for its channel and frees the callback slot.
    ///
    /// Init is always terminal: an init callback receives exactly one
    /// event. Show channels are terminal on
    /// [`TERMINAL_SHOW_EVENTS`].
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self.channel {
            Channel::Init => true,
            Channel::Interstitial | Channel::Rewarded => {
                TERMINAL_SHOW_EVENTS.contains(&self.name.as_str())
            }
        }
    }

    /// Returns the reward outcome this event carries, if any.
    ///
    /// A reward is carried by a `reward` event or by a `closed` event
    /// whose `rewarded` flag is set (the SDK granted the reward but the
    /// dedicated `reward` notification did not fire).
    #[must_use]
    pub fn reward_outcome(&self) -> Option<RewardOutcome> {
        if self.channel != Channel::Rewarded {
            return None;
        }
        let granted = self.name == "reward" || (self.name == "closed" && self.rewarded);
        granted.then(|| RewardOutcome {
            success: true,
            amount: self.amount.unwrap_or(0.0),
            currency: self.currency.clone(),
        })
    }
}

/// The durable record of one unconsumed reward.
///
/// Stored in the single-slot pending store and handed to the host via
/// `poll_rewarded_result`, independently of callback delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardOutcome {
    /// Whether the reward was granted.
    pub success: bool,
    /// Reward amount; zero when the SDK reported none.
    pub amount: f64,
    /// Reward currency tag, if the SDK provided one.
    pub currency: Option<String>,
}
