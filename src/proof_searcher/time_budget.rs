use std::time::{Duration, Instant};

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(1);

/// Wall-clock ceiling for one call to `solve`. It is checked once per root
/// move, never inside the recursion, so a search can overrun it by at most
/// one root subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeBudget {
    limit: Duration,
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

impl TimeBudget {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn from_secs(seconds: u64) -> Self {
        Self::new(Duration::from_secs(seconds))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn set(&mut self, limit: Duration) {
        self.limit = limit;
    }

    pub fn is_exhausted(&self, start: Instant) -> bool {
        start.elapsed() >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_always_exhausted() {
        let budget = TimeBudget::from_secs(0);
        assert!(budget.is_exhausted(Instant::now()));
    }

    #[test]
    fn test_fresh_start_is_within_budget() {
        let budget = TimeBudget::from_secs(60);
        assert!(!budget.is_exhausted(Instant::now()));
    }

    #[test]
    fn test_set_replaces_limit() {
        let mut budget = TimeBudget::default();
        assert_eq!(DEFAULT_TIME_LIMIT, budget.limit());
        budget.set(Duration::from_secs(7));
        assert_eq!(Duration::from_secs(7), budget.limit());
    }
}
