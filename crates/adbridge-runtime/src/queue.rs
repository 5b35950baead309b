//! Thread-safe event queue with snapshot draining.

use adbridge_event::Event;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::debug;

/// Multi-producer FIFO drained by the single consumer thread.
///
/// `enqueue` is callable from any thread and never fails; ordering is
/// the arrival order across all producers as observed at the queue.
///
/// # Snapshot draining
///
/// [`drain_snapshot`](Self::drain_snapshot) removes exactly the events
/// present when the drain starts. Events enqueued concurrently land in
/// the *next* drain, so a producer that floods the queue cannot starve
/// the consumer's frame indefinitely.
#[derive(Debug, Default)]
pub struct EventQueue {
    inner: Mutex<VecDeque<Event>>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    /// Appends an event. Callable from any thread; never blocks beyond
    /// the queue's short critical section.
    pub fn enqueue(&self, event: Event) {
        self.inner.lock().push_back(event);
    }

    /// Atomically removes and returns every event currently queued.
    ///
    /// Only the consumer thread may call this. Producers enqueueing
    /// while the snapshot is being taken are ordered after it and show
    /// up on the next call.
    #[must_use]
    pub fn drain_snapshot(&self) -> Vec<Event> {
        let drained: Vec<Event> = self.inner.lock().drain(..).collect();
        if !drained.is_empty() {
            debug!("drained {} queued events", drained.len());
        }
        drained
    }

    /// Discards all queued events. Teardown only.
    pub fn clear(&self) {
        let mut queue = self.inner.lock();
        if !queue.is_empty() {
            debug!("discarding {} undelivered events at teardown", queue.len());
        }
        queue.clear();
    }

    /// Returns the number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no events are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adbridge_event::Channel;
    use std::sync::Arc;

    fn test_event(name: &str) -> Event {
        Event::interstitial(name, true, None)
    }

    #[test]
    fn fifo_order_preserved() {
        let queue = EventQueue::new();
        queue.enqueue(test_event("first"));
        queue.enqueue(test_event("second"));
        queue.enqueue(test_event("third"));

        let names: Vec<_> = queue
            .drain_snapshot()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_excludes_later_enqueues() {
        let queue = EventQueue::new();
        queue.enqueue(test_event("a"));

        let first = queue.drain_snapshot();
        assert_eq!(first.len(), 1);

        // Anything enqueued after the snapshot belongs to the next one.
        queue.enqueue(test_event("b"));
        let second = queue.drain_snapshot();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "b");
    }

    #[test]
    fn drain_empty_queue() {
        let queue = EventQueue::new();
        assert!(queue.drain_snapshot().is_empty());
    }

    #[test]
    fn clear_discards_everything() {
        let queue = EventQueue::new();
        queue.enqueue(test_event("a"));
        queue.enqueue(test_event("b"));

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.drain_snapshot().is_empty());
    }

    #[test]
    fn concurrent_producers_preserve_per_producer_order() {
        let queue = Arc::new(EventQueue::new());
        let producers = 4;
        let per_producer = 100;

        let handles: Vec<_> = (0..producers)
            .map(|p| {
                let queue = Arc::clone(&queue);
                std::thread::spawn(move || {
                    for i in 0..per_producer {
                        queue.enqueue(Event::rewarded(
                            format!("{p}:{i}"),
                            true,
                            None,
                            false,
                            0.0,
                            None,
                        ));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let drained = queue.drain_snapshot();
        assert_eq!(drained.len(), producers * per_producer);
        assert!(drained.iter().all(|e| e.channel == Channel::Rewarded));

        // Arrival order across producers is arbitrary, but each
        // producer's own events must stay in sequence.
        let mut last_seen = vec![-1i64; producers];
        for event in &drained {
            let (p, i) = event.name.split_once(':').unwrap();
            let (p, i): (usize, i64) = (p.parse().unwrap(), i.parse().unwrap());
            assert!(i > last_seen[p], "producer {p} reordered");
            last_seen[p] = i;
        }
    }
}
