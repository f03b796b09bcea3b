use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;

const WINDOW: usize = 1_000;

#[derive(Debug, Default)]
struct Window {
    durations_ms: VecDeque<f64>,
    collisions: VecDeque<bool>,
    total: u64,
}

/// Rolling generation timings and collision markers over the last thousand draws.
#[derive(Clone, Debug, Default)]
pub struct PerformanceMonitor {
    window: Arc<Mutex<Window>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PerformanceSnapshot {
    pub average_generation_ms: f64,
    pub collision_rate: f64,
    pub total_generations: u64,
    pub window_size: usize,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, elapsed: Duration, collided: bool) {
        let mut window = self.window.lock().unwrap_or_else(PoisonError::into_inner);
        window.durations_ms.push_back(elapsed.as_secs_f64() * 1_000.0);
        window.collisions.push_back(collided);
        if window.durations_ms.len() > WINDOW {
            window.durations_ms.pop_front();
        }
        if window.collisions.len() > WINDOW {
            window.collisions.pop_front();
        }
        window.total += 1;
    }

    pub fn snapshot(&self) -> PerformanceSnapshot {
        let window = self.window.lock().unwrap_or_else(PoisonError::into_inner);
        let size = window.durations_ms.len();
        let (average_generation_ms, collision_rate) = if size == 0 {
            (0.0, 0.0)
        } else {
            let total_ms: f64 = window.durations_ms.iter().sum();
            let collided = window.collisions.iter().filter(|c| **c).count();
            (total_ms / size as f64, collided as f64 / window.collisions.len() as f64)
        };

        PerformanceSnapshot {
            average_generation_ms,
            collision_rate,
            total_generations: window.total,
            window_size: size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_monitor_reports_zeroes() {
        let snap = PerformanceMonitor::new().snapshot();
        assert_eq!(snap.total_generations, 0);
        assert_eq!(snap.average_generation_ms, 0.0);
        assert_eq!(snap.collision_rate, 0.0);
    }

    #[test]
    fn window_rolls_but_total_keeps_counting() {
        let monitor = PerformanceMonitor::new();
        for i in 0..1_200 {
            monitor.record(Duration::from_millis(2), i % 4 == 0);
        }
        let snap = monitor.snapshot();
        assert_eq!(snap.total_generations, 1_200);
        assert_eq!(snap.window_size, WINDOW);
        assert!((snap.average_generation_ms - 2.0).abs() < 1e-9);
        assert!((snap.collision_rate - 0.25).abs() < 1e-9);
    }
}
