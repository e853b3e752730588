//! Cancellable timers for scheduled phase commits.
//!
//! Every delayed phase transition is held in a [`TimerSet`] until it fires
//! or is cancelled. Cancellation clears the whole set atomically, so a
//! reversed transition never lets a stale commit fire out of order.

/// Unique handle for a scheduled timer, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// A scheduled entry: fires once its deadline elapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTimer<T> {
    /// Cancellation handle.
    pub handle: TimerHandle,
    /// Absolute deadline on the owning clock, in milliseconds.
    pub due_ms: f32,
    /// Carried payload, delivered when the timer fires.
    pub payload: T,
}

/// An unordered set of pending timers owned by one engine instance.
///
/// Timers fire in deadline order; equal deadlines fire in creation order.
#[derive(Debug, Default)]
pub struct TimerSet<T> {
    entries: Vec<ScheduledTimer<T>>,
    next_handle: u64,
}

impl<T> TimerSet<T> {
    /// Create an empty timer set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Schedule a payload to fire at the given absolute deadline.
    pub fn schedule(&mut self, due_ms: f32, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(ScheduledTimer {
            handle,
            due_ms,
            payload,
        });
        handle
    }

    /// Cancel a single timer. Returns true if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Cancel every pending timer at once.
    ///
    /// Safe to call when the set is already empty.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Remove and return the earliest timer whose deadline has elapsed.
    ///
    /// Ties on the deadline are broken by creation order.
    pub fn pop_due(&mut self, now_ms: f32) -> Option<ScheduledTimer<T>> {
        let mut earliest: Option<usize> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.due_ms > now_ms {
                continue;
            }
            match earliest {
                None => earliest = Some(index),
                Some(current) => {
                    let best = &self.entries[current];
                    if (entry.due_ms, entry.handle) < (best.due_ms, best.handle) {
                        earliest = Some(index);
                    }
                }
            }
        }
        earliest.map(|index| self.entries.remove(index))
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_creation_ordered() {
        let mut timers: TimerSet<&str> = TimerSet::new();
        let first = timers.schedule(10.0, "a");
        let second = timers.schedule(5.0, "b");
        assert!(first < second);
        assert_eq!(timers.len(), 2);
    }

    #[test]
    fn test_pop_due_fires_in_deadline_order() {
        let mut timers: TimerSet<&str> = TimerSet::new();
        timers.schedule(117.0, "entered");
        timers.schedule(17.0, "entering");

        // Nothing due yet
        assert!(timers.pop_due(10.0).is_none());

        let fired = timers.pop_due(200.0).unwrap();
        assert_eq!(fired.payload, "entering");
        let fired = timers.pop_due(200.0).unwrap();
        assert_eq!(fired.payload, "entered");
        assert!(timers.is_empty());
    }

    #[test]
    fn test_equal_deadlines_fire_in_creation_order() {
        let mut timers: TimerSet<u32> = TimerSet::new();
        timers.schedule(17.0, 1);
        timers.schedule(17.0, 2);
        timers.schedule(17.0, 3);

        assert_eq!(timers.pop_due(17.0).unwrap().payload, 1);
        assert_eq!(timers.pop_due(17.0).unwrap().payload, 2);
        assert_eq!(timers.pop_due(17.0).unwrap().payload, 3);
    }

    #[test]
    fn test_cancel_single() {
        let mut timers: TimerSet<&str> = TimerSet::new();
        let keep = timers.schedule(10.0, "keep");
        let drop = timers.schedule(10.0, "drop");

        assert!(timers.cancel(drop));
        assert!(!timers.cancel(drop));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.pop_due(10.0).unwrap().handle, keep);
    }

    #[test]
    fn test_cancel_all_clears_the_set() {
        let mut timers: TimerSet<&str> = TimerSet::new();
        timers.schedule(17.0, "a");
        timers.schedule(117.0, "b");

        timers.cancel_all();
        assert!(timers.is_empty());
        assert!(timers.pop_due(f32::MAX).is_none());

        // Idempotent on an empty set
        timers.cancel_all();
        assert!(timers.is_empty());
    }
}
