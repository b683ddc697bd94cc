//! Identifier generation for new entities.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_TICK: AtomicI64 = AtomicI64::new(0);

/// Produce a unique identifier for a new entity.
///
/// Ids are millisecond timestamps rendered as strings. Entity creation is
/// user-paced, so the wall clock alone almost always suffices; when two
/// calls land in the same millisecond the tick is bumped past the last one
/// issued, keeping sequential calls distinct within a process.
pub fn next_id() -> String {
    let mut last = LAST_TICK.load(Ordering::Relaxed);
    loop {
        let now = Utc::now().timestamp_millis();
        let next = if now > last { now } else { last + 1 };
        match LAST_TICK.compare_exchange(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(observed) => last = observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique_under_rapid_calls() {
        let ids: HashSet<String> = (0..1000).map(|_| next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_increase_monotonically() {
        let a: i64 = next_id().parse().unwrap();
        let b: i64 = next_id().parse().unwrap();
        assert!(b > a);
    }
}
