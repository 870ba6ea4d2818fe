use std::time::{Duration, Instant};

/// A pure time budget shared by the stages of one request. There is no
/// external cancel trigger: expiry is observed via `expired()` pre-checks at
/// stage boundaries, while the authoritative enforcement for network calls is
/// the HTTP client's own request timeout fed from `remaining()`. The two can
/// disagree at millisecond granularity, so treat `expired()` as advisory.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Deadline {
        Deadline {
            at: Instant::now() + budget,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }
}
