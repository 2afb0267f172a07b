use std::time::{Duration, Instant};

/// Trailing-edge debounce over an injected clock. Re-arming pushes the
/// deadline out, so only the last call in a burst fires.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per armed deadline, the first time `now` reaches it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../tests/listing/debounce_tests.rs"]
mod tests;
