use foundation::time::Time;

/// Deterministic deferred-execution queue.
///
/// Key properties:
/// - Total ordering on `(due, insertion_seq)`: earlier deadlines pop first,
///   equal deadlines pop in scheduling order.
/// - Entries are fire-and-forget; there is no cancellation. Stale firings
///   are expected to be absorbed by idempotence at the call site.
/// - Deadlines scheduled together are independent of one another; popping
///   one never delays a sibling.
///
/// This is intentionally simple (Vec-backed) because correctness and
/// determinism matter more here than asymptotic performance.
#[derive(Debug)]
struct Entry<T> {
    due: Time,
    seq: u64,
    payload: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    next_seq: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn schedule(&mut self, due: Time, payload: T) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.entries.push(Entry { due, seq, payload });
    }

    /// Earliest pending deadline, if any.
    pub fn next_due(&self) -> Option<Time> {
        self.entries
            .iter()
            .map(|e| e.due)
            .min_by(|a, b| a.0.total_cmp(&b.0))
    }

    /// Pops the next entry with `due <= now`, in `(due, seq)` order.
    pub fn pop_due(&mut self, now: Time) -> Option<(Time, T)> {
        let mut best_idx: Option<usize> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.due > now {
                continue;
            }
            match best_idx {
                None => best_idx = Some(idx),
                Some(best) => {
                    let b = &self.entries[best];
                    if (entry.due.0, entry.seq) < (b.due.0, b.seq) {
                        best_idx = Some(idx);
                    }
                }
            }
        }

        let idx = best_idx?;
        let entry = self.entries.swap_remove(idx);
        Some((entry.due, entry.payload))
    }

    /// Drains every entry with `due <= now`, in `(due, seq)` order.
    pub fn drain_due(&mut self, now: Time) -> Vec<(Time, T)> {
        let mut out = Vec::new();
        while let Some(item) = self.pop_due(now) {
            out.push(item);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::TimerQueue;
    use foundation::time::Time;

    #[test]
    fn pops_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(Time(0.3), "c");
        q.schedule(Time(0.0), "a");
        q.schedule(Time(0.15), "b");

        let fired: Vec<_> = q.drain_due(Time(1.0)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_deadlines_pop_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(Time(0.1), "first");
        q.schedule(Time(0.1), "second");

        let fired: Vec<_> = q.drain_due(Time(0.1)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec!["first", "second"]);
    }

    #[test]
    fn future_entries_stay_queued() {
        let mut q = TimerQueue::new();
        q.schedule(Time(0.5), "later");
        assert!(q.pop_due(Time(0.4)).is_none());
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_due(), Some(Time(0.5)));

        let (due, p) = q.pop_due(Time(0.5)).unwrap();
        assert_eq!(due, Time(0.5));
        assert_eq!(p, "later");
        assert!(q.is_empty());
    }

    #[test]
    fn deadlines_are_independent() {
        // Scheduling a batch at once must not chain deadlines: the second
        // entry is due at its own offset, not after the first completes.
        let mut q = TimerQueue::new();
        let base = Time::ZERO;
        q.schedule(base.after_millis(0), "a");
        q.schedule(base.after_millis(150), "b");
        q.schedule(base.after_millis(300), "c");

        assert_eq!(q.drain_due(Time::from_millis(0)).len(), 1);
        assert_eq!(q.drain_due(Time::from_millis(150)).len(), 1);
        assert_eq!(q.drain_due(Time::from_millis(300)).len(), 1);
        assert!(q.is_empty());
    }
}
