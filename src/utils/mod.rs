use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_KEY_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Generate a fresh idempotency key.
///
/// The suffix is the current timestamp in milliseconds, floored to stay
/// strictly above the previous key, so two submissions within the same
/// millisecond still get distinct keys.
pub fn fresh_idempotency_key() -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_KEY_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_KEY_MILLIS.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return format!("idempotency-key-{}", next),
            Err(observed) => prev = observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_carry_the_expected_prefix() {
        let key = fresh_idempotency_key();
        assert!(key.starts_with("idempotency-key-"));
        let suffix = key.trim_start_matches("idempotency-key-");
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[test]
    fn consecutive_keys_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(fresh_idempotency_key()));
        }
    }

    #[test]
    fn key_suffixes_are_strictly_increasing() {
        let first: i64 = fresh_idempotency_key()
            .trim_start_matches("idempotency-key-")
            .parse()
            .unwrap();
        let second: i64 = fresh_idempotency_key()
            .trim_start_matches("idempotency-key-")
            .parse()
            .unwrap();
        assert!(second > first);
    }
}
