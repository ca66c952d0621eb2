use foundation::time::Time;

/// Deterministic quiet-period latch.
///
/// Every `signal` re-arms the deadline at `now + delay`; `fire_if_ready`
/// reports `true` at most once per armed period, and only after a full
/// quiet period has elapsed since the last signal. Used for resize
/// handling, where re-measuring on every raw event would thrash.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Debounce {
    delay_ms: u64,
    deadline: Option<Time>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn signal(&mut self, now: Time) {
        self.deadline = Some(now.after_millis(self.delay_ms));
    }

    pub fn fire_if_ready(&mut self, now: Time) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
