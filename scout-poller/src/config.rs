//! Poll timing
//!
//! The attempt ceiling and interval are fixed: together they bound a single
//! research job to two minutes of waiting.

use std::time::Duration;

/// Maximum number of status queries for one job
pub const MAX_POLL_ATTEMPTS: u32 = 60;

/// Delay between consecutive status queries
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Whole seconds elapsed before the given zero-based attempt
pub fn elapsed_secs(attempt: u32) -> u64 {
    (u64::from(attempt) * POLL_INTERVAL.as_millis() as u64) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_secs() {
        assert_eq!(elapsed_secs(0), 0);
        assert_eq!(elapsed_secs(1), 2);
        assert_eq!(elapsed_secs(59), 118);
    }

    #[test]
    fn test_attempts_fit_in_two_minutes() {
        assert_eq!(POLL_INTERVAL * MAX_POLL_ATTEMPTS, Duration::from_secs(120));
    }
}
