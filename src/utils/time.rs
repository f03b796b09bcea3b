use chrono::{DateTime, Duration, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Source of wall-clock time for session bookkeeping and eviction.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        now()
    }
}

/// True once `last_seen + ttl` lies strictly before `at`.
pub fn is_expired(last_seen: DateTime<Utc>, ttl: Duration, at: DateTime<Utc>) -> bool {
    last_seen + ttl < at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_strict() {
        let start = now();
        let ttl = Duration::seconds(60);
        assert!(!is_expired(start, ttl, start + Duration::seconds(60)));
        assert!(is_expired(start, ttl, start + Duration::seconds(61)));
    }
}
