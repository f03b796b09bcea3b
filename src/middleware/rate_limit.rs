use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::Error;

const WINDOW: Duration = Duration::from_secs(1);
const MAX_TRACKED_KEYS: usize = 10_000;
const GLOBAL_KEY: &str = "";

#[derive(Debug)]
struct WindowState {
    start: Instant,
    count: u32,
}

/// Fixed one-second windows, tracked per key. At most `max_keys` windows are
/// kept; a new key past the cap first drops expired windows, then the oldest.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    rps: u32,
    max_keys: usize,
    windows: Arc<Mutex<HashMap<String, WindowState>>>,
}

impl RateLimiter {
    fn new(rps: u32) -> Self {
        Self::with_max_keys(rps, MAX_TRACKED_KEYS)
    }

    fn with_max_keys(rps: u32, max_keys: usize) -> Self {
        Self {
            rps: rps.max(1),
            max_keys: max_keys.max(1),
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn allow(&self, key: &str) -> bool {
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        if windows.len() >= self.max_keys && !windows.contains_key(key) {
            windows.retain(|_, w| now.duration_since(w.start) < WINDOW);
            while windows.len() >= self.max_keys {
                let oldest = windows
                    .iter()
                    .min_by_key(|(_, w)| w.start)
                    .map(|(k, _)| k.clone());
                match oldest {
                    Some(oldest) => windows.remove(&oldest),
                    None => break,
                };
            }
        }

        let window = windows.entry(key.to_string()).or_insert(WindowState {
            start: now,
            count: 0,
        });
        if now.duration_since(window.start) >= WINDOW {
            window.start = now;
            window.count = 0;
        }
        if window.count < self.rps {
            window.count += 1;
            true
        } else {
            false
        }
    }
}

/// Limits every request through the layer as one stream.
pub async fn rps_middleware(
    State(state): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.allow(GLOBAL_KEY) {
        return Error::RateLimited("rate_limit_exceeded".to_string()).into_response();
    }
    next.run(req).await
}

/// Limits each request path separately, so every session id gets its own budget.
pub async fn session_rps_middleware(
    State(state): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.allow(req.uri().path()) {
        return Error::RateLimited("session_rate_limit_exceeded".to_string()).into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(rps: u32) -> RateLimiter {
    RateLimiter::new(rps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_have_independent_budgets() {
        let limiter = new_rps_state(2);
        assert!(limiter.allow("/api/sessions/a/questions"));
        assert!(limiter.allow("/api/sessions/a/questions"));
        assert!(!limiter.allow("/api/sessions/a/questions"));
        assert!(limiter.allow("/api/sessions/b/questions"));
    }

    #[test]
    fn zero_rps_still_admits_one() {
        let limiter = new_rps_state(0);
        assert!(limiter.allow(GLOBAL_KEY));
        assert!(!limiter.allow(GLOBAL_KEY));
    }

    #[test]
    fn tracked_keys_stay_bounded_within_one_window() {
        let limiter = RateLimiter::with_max_keys(5, 3);
        for i in 0..50 {
            assert!(limiter.allow(&format!("/api/sessions/s{i}/questions")));
        }
        let windows = limiter.windows.lock().unwrap();
        assert_eq!(windows.len(), 3);
        assert!(windows.contains_key("/api/sessions/s49/questions"));
    }

    #[test]
    fn default_cap_holds_under_a_burst_of_unique_paths() {
        let limiter = new_rps_state(1);
        for i in 0..MAX_TRACKED_KEYS + 100 {
            limiter.allow(&format!("/api/sessions/burst-{i}/questions"));
        }
        assert!(limiter.windows.lock().unwrap().len() <= MAX_TRACKED_KEYS);
    }
}
