//! Per-channel callback handle slots.

use adbridge_types::Channel;
use parking_lot::Mutex;

/// Owns at most one live callback handle per [`Channel`].
///
/// Registration is an atomic swap returning the previous occupant, so
/// the caller can release it (last-registration-wins; no leak, no
/// double-destroy). The registry never destroys a handle itself:
/// release mechanics belong to the consumer adapter, which knows how
/// to hand the handle back to the host.
///
/// # Checkout protocol
///
/// Dispatch does not borrow a handle out of a slot; it *takes* it
/// ([`take`](Self::take)), invokes the callback with no registry lock
/// held, and then [`restore`](Self::restore)s it. If the callback
/// re-entered the bridge and registered a replacement in the meantime,
/// `restore` finds the slot occupied and hands the now-stale handle
/// back to the caller for release. This keeps a callback free to
/// trigger the next show from inside its own delivery.
#[derive(Debug)]
pub struct ChannelRegistry<H> {
    slots: [Mutex<Option<H>>; 3],
}

impl<H> Default for ChannelRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ChannelRegistry<H> {
    /// Creates a registry with all slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [Mutex::new(None), Mutex::new(None), Mutex::new(None)],
        }
    }

    fn slot(&self, channel: Channel) -> &Mutex<Option<H>> {
        let index = match channel {
            Channel::Init => 0,
            Channel::Interstitial => 1,
            Channel::Rewarded => 2,
        };
        &self.slots[index]
    }

    /// Swaps in a new handle, returning the previous one so the caller
    /// can release it.
    pub fn register(&self, channel: Channel, handle: H) -> Option<H> {
        self.slot(channel).lock().replace(handle)
    }

    /// Removes and returns the channel's handle for a dispatch attempt.
    pub fn take(&self, channel: Channel) -> Option<H> {
        self.slot(channel).lock().take()
    }

    /// Puts a taken handle back unless the slot was re-occupied.
    ///
    /// Returns `Some(handle)` (the one passed in) when a newer
    /// registration won the slot while the handle was checked out; the
    /// caller must release it.
    pub fn restore(&self, channel: Channel, handle: H) -> Option<H> {
        let mut slot = self.slot(channel).lock();
        if slot.is_some() {
            Some(handle)
        } else {
            *slot = Some(handle);
            None
        }
    }

    /// Returns `true` if the channel currently has a handle.
    #[must_use]
    pub fn is_registered(&self, channel: Channel) -> bool {
        self.slot(channel).lock().is_some()
    }

    /// Empties every slot, returning the live handles. Teardown only.
    pub fn take_all(&self) -> Vec<H> {
        self.slots
            .iter()
            .filter_map(|slot| slot.lock().take())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_maps_to_a_distinct_slot() {
        let registry = ChannelRegistry::new();
        for (i, channel) in Channel::ALL.into_iter().enumerate() {
            assert!(registry.register(channel, i as u32).is_none());
        }
        for (i, channel) in Channel::ALL.into_iter().enumerate() {
            assert_eq!(registry.take(channel), Some(i as u32));
        }
    }

    #[test]
    fn register_empty_slot_returns_none() {
        let registry = ChannelRegistry::new();
        assert!(registry.register(Channel::Init, 1u32).is_none());
        assert!(registry.is_registered(Channel::Init));
    }

    #[test]
    fn register_swaps_and_returns_previous() {
        let registry = ChannelRegistry::new();
        registry.register(Channel::Rewarded, 1u32);

        let previous = registry.register(Channel::Rewarded, 2u32);
        assert_eq!(previous, Some(1));
        assert_eq!(registry.take(Channel::Rewarded), Some(2));
    }

    #[test]
    fn channels_are_independent() {
        let registry = ChannelRegistry::new();
        registry.register(Channel::Interstitial, 1u32);

        assert!(!registry.is_registered(Channel::Init));
        assert!(!registry.is_registered(Channel::Rewarded));
        assert!(registry.is_registered(Channel::Interstitial));
    }

    #[test]
    fn take_empties_the_slot() {
        let registry = ChannelRegistry::new();
        registry.register(Channel::Init, 7u32);

        assert_eq!(registry.take(Channel::Init), Some(7));
        assert!(!registry.is_registered(Channel::Init));
        assert_eq!(registry.take(Channel::Init), None);
    }

    #[test]
    fn restore_into_empty_slot() {
        let registry = ChannelRegistry::new();
        registry.register(Channel::Rewarded, 7u32);
        let handle = registry.take(Channel::Rewarded).unwrap();

        assert!(registry.restore(Channel::Rewarded, handle).is_none());
        assert!(registry.is_registered(Channel::Rewarded));
    }

    #[test]
    fn restore_after_reregistration_returns_stale_handle() {
        let registry = ChannelRegistry::new();
        registry.register(Channel::Rewarded, 1u32);

        // Checkout, then a callback registers a replacement.
        let checked_out = registry.take(Channel::Rewarded).unwrap();
        registry.register(Channel::Rewarded, 2u32);

        let stale = registry.restore(Channel::Rewarded, checked_out);
        assert_eq!(stale, Some(1));
        assert_eq!(registry.take(Channel::Rewarded), Some(2));
    }

    #[test]
    fn take_all_empties_every_slot() {
        let registry = ChannelRegistry::new();
        registry.register(Channel::Init, 1u32);
        registry.register(Channel::Rewarded, 3u32);

        let mut handles = registry.take_all();
        handles.sort_unstable();
        assert_eq!(handles, vec![1, 3]);
        assert!(Channel::ALL.iter().all(|c| !registry.is_registered(*c)));
    }
}
