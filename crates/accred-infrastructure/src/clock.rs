//! Timestamp and identifier helpers.
//!
//! Record identifiers are the creation time in Unix milliseconds, rendered
//! as a decimal string. A process-local monotonic guard bumps the value when
//! two identifiers would otherwise land in the same millisecond, so issued
//! identifiers stay unique while remaining numeric-string timestamps.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Returns the current time.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Issues a unique millisecond-timestamp identifier string.
pub fn millis_id() -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let prev = LAST_ISSUED_MILLIS.load(Ordering::SeqCst);
        if candidate <= prev {
            candidate = prev + 1;
        }
        if LAST_ISSUED_MILLIS
            .compare_exchange(prev, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return candidate.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_id_is_numeric() {
        let id = millis_id();
        assert!(id.parse::<i64>().is_ok(), "id should be numeric: {}", id);
    }

    #[test]
    fn test_millis_id_is_unique_within_a_millisecond() {
        let ids: Vec<String> = (0..100).map(|_| millis_id()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_millis_id_is_monotonic() {
        let a: i64 = millis_id().parse().unwrap();
        let b: i64 = millis_id().parse().unwrap();
        assert!(b > a);
    }
}
