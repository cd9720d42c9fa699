use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as Unix seconds. Clocks before the epoch clamp to 0.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

pub fn is_past(timestamp: i64) -> bool {
    unix_now() > timestamp
}

/// Seconds from now until `timestamp`; negative once it has passed.
/// Saturates at the i64 bounds for extreme timestamps.
pub fn seconds_until(timestamp: i64) -> i64 {
    timestamp.saturating_sub(unix_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_reasonable() {
        let now = unix_now();
        // After 2023, before 2100.
        assert!(now > 1_700_000_000);
        assert!(now < 4_100_000_000);
    }

    #[test]
    fn epoch_is_past() {
        assert!(is_past(0));
        assert!(is_past(1));
    }

    #[test]
    fn far_future_is_not_past() {
        assert!(!is_past(4_100_000_000));
    }

    #[test]
    fn seconds_until_signs() {
        assert!(seconds_until(unix_now() + 3600) > 0);
        assert!(seconds_until(0) < 0);
    }

    #[test]
    fn seconds_until_saturates_at_extremes() {
        assert_eq!(seconds_until(i64::MIN), i64::MIN);
        assert!(seconds_until(i64::MAX) > 0);
    }
}
