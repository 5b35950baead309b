//! Logical channels of the bridge.
//!
//! A [`Channel`] identifies one of the three ad-interaction lines.
//! Each channel owns at most one live callback handle at a time, and
//! terminal-event classification is channel-specific.
//!
//! | Channel | Triggered by | Terminal when |
//! |---------|--------------|---------------|
//! | `Init` | `init` call | always (single event) |
//! | `Interstitial` | `show_interstitial` | `show_failed` / `closed` / `expired` |
//! | `Rewarded` | `show_rewarded` | `show_failed` / `closed` / `expired` |

use serde::{Deserialize, Serialize};

/// One of the three logical ad-interaction lines.
///
/// The set is closed: the bridge routes callback lifetime and outcome
/// shape by channel, and adding a variant is a breaking change for
/// every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// SDK initialization. Exactly one event per `init` call.
    Init,
    /// Full-screen interstitial ad.
    Interstitial,
    /// Rewarded video ad. The only channel carrying reward data.
    Rewarded,
}

impl Channel {
    /// All channels, in dispatch-slot order.
    pub const ALL: [Channel; 3] = [Channel::Init, Channel::Interstitial, Channel::Rewarded];

    /// Returns `true` for channels a `show` call can target.
    ///
    /// `Init` is triggered by `init`, never by `show`.
    #[must_use]
    pub fn is_showable(self) -> bool {
        !matches!(self, Channel::Init)
    }

    /// Returns `true` if this channel carries reward data.
    #[must_use]
    pub fn is_rewarded(self) -> bool {
        matches!(self, Channel::Rewarded)
    }

    /// Display name used in event tables and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Init => "init",
            Channel::Interstitial => "interstitial",
            Channel::Rewarded => "rewarded",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showable_channels() {
        assert!(!Channel::Init.is_showable());
        assert!(Channel::Interstitial.is_showable());
        assert!(Channel::Rewarded.is_showable());
    }

    #[test]
    fn only_rewarded_carries_rewards() {
        assert!(!Channel::Init.is_rewarded());
        assert!(!Channel::Interstitial.is_rewarded());
        assert!(Channel::Rewarded.is_rewarded());
    }

    #[test]
    fn display_names() {
        assert_eq!(Channel::Init.to_string(), "init");
        assert_eq!(Channel::Interstitial.to_string(), "interstitial");
        assert_eq!(Channel::Rewarded.to_string(), "rewarded");
    }

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(Channel::ALL.len(), 3);
        assert!(Channel::ALL.contains(&Channel::Init));
        assert!(Channel::ALL.contains(&Channel::Interstitial));
        assert!(Channel::ALL.contains(&Channel::Rewarded));
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&Channel::Interstitial).unwrap();
        assert_eq!(json, "\"interstitial\"");

        let back: Channel = serde_json::from_str("\"rewarded\"").unwrap();
        assert_eq!(back, Channel::Rewarded);
    }
}
