//! Custom Test Assertions
//!
//! Assertion helpers that give more useful failure messages than a bare
//! `assert!` over a `Result`.

use chrono::{DateTime, Duration, Utc};
use core_kernel::PortError;

/// Asserts that a port call failed with `PortError::NotFound` for `entity`
///
/// # Panics
///
/// Panics if the result is `Ok` or any other error
pub fn assert_port_not_found<T: std::fmt::Debug>(result: &Result<T, PortError>, entity: &str) {
    match result {
        Err(PortError::NotFound { entity_type, .. }) => assert_eq!(
            entity_type, entity,
            "NotFound reported for {} instead of {}",
            entity_type, entity
        ),
        other => panic!("Expected NotFound for {}, got {:?}", entity, other),
    }
}

/// Asserts that two timestamps are within `tolerance` of each other
///
/// PostgreSQL stores microseconds, so a timestamp read back from the
/// database can differ from the one written in the sub-microsecond digits.
pub fn assert_timestamp_close(actual: DateTime<Utc>, expected: DateTime<Utc>, tolerance: Duration) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Timestamps differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that ids are strictly increasing in the given order
pub fn assert_strictly_increasing<I: PartialOrd + std::fmt::Debug>(ids: &[I]) {
    for pair in ids.windows(2) {
        assert!(
            pair[0] < pair[1],
            "Expected increasing ids, found {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_port_not_found() {
        let result: Result<(), PortError> = Err(PortError::not_found("Question", 1));
        assert_port_not_found(&result, "Question");
    }

    #[test]
    #[should_panic(expected = "Expected NotFound")]
    fn test_assert_port_not_found_on_ok() {
        let result: Result<(), PortError> = Ok(());
        assert_port_not_found(&result, "Question");
    }

    #[test]
    fn test_timestamp_close() {
        let now = Utc::now();
        assert_timestamp_close(now, now + Duration::microseconds(1), Duration::milliseconds(1));
    }

    #[test]
    fn test_strictly_increasing() {
        assert_strictly_increasing(&[1, 2, 5]);
    }
}
