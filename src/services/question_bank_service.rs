use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, TryLockError};
use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::config::Config;
use crate::fragments::{self, CapacityReport};
use crate::models::discipline::Discipline;
use crate::models::question::{
    clamp_difficulty, estimate_minutes, ComposedQuestion, Complexity, MAX_DIFFICULTY, MIN_DIFFICULTY,
};
use crate::models::session::{SessionLedger, SessionStats};
use crate::services::composer::Composition;
use crate::services::metrics_service::{PerformanceMonitor, PerformanceSnapshot};
use crate::services::uniqueness::{UniquenessGuard, DEFAULT_MAX_ATTEMPTS};
use crate::utils::rng::{clock_seed, session_seed};
use crate::utils::time::{is_expired, Clock, SystemClock};
use crate::utils::token::generate_question_id;

const ADAPTIVE_WINDOW: usize = 3;
const PREREQUISITE_DIFFICULTY: u8 = 5;

#[derive(Debug, Clone)]
pub struct BankOptions {
    /// Fixed master seed; the wall clock seeds the engine when absent.
    pub master_seed: Option<u64>,
    pub max_attempts: u32,
    pub session_ttl: Duration,
    pub adaptive_difficulty: bool,
}

impl Default for BankOptions {
    fn default() -> Self {
        Self {
            master_seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            session_ttl: Duration::hours(2),
            adaptive_difficulty: false,
        }
    }
}

impl BankOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            master_seed: config.question_bank_seed,
            max_attempts: config.max_resample_attempts,
            session_ttl: Duration::seconds(config.session_ttl_seconds.min(i64::MAX as u64) as i64),
            adaptive_difficulty: config.adaptive_difficulty,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.master_seed = Some(seed);
        self
    }
}

type Ledgers = HashMap<String, Arc<Mutex<SessionLedger>>>;

/// In-memory question bank. Each session owns a ledger behind its own mutex;
/// the map lock is only held to look up, insert or remove entries.
///
/// Eviction skips ledgers that are mid-draw. A draw whose ledger is cleared
/// before it takes the ledger lock retries against a fresh ledger; a clear that
/// lands after that point takes effect once the draw has been recorded.
#[derive(Clone)]
pub struct QuestionBankService {
    sessions: Arc<RwLock<Ledgers>>,
    generations: Arc<AtomicU64>,
    guard: UniquenessGuard,
    master_seed: u64,
    options: BankOptions,
    monitor: PerformanceMonitor,
    clock: Arc<dyn Clock>,
}

impl QuestionBankService {
    pub fn new(options: BankOptions) -> Self {
        Self::with_clock(options, Arc::new(SystemClock))
    }

    pub fn with_clock(options: BankOptions, clock: Arc<dyn Clock>) -> Self {
        let master_seed = options.master_seed.unwrap_or_else(clock_seed);
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            generations: Arc::new(AtomicU64::new(0)),
            guard: UniquenessGuard::new(options.max_attempts),
            master_seed,
            options,
            monitor: PerformanceMonitor::new(),
            clock,
        }
    }

    pub fn options(&self) -> &BankOptions {
        &self.options
    }

    pub fn get_next_question(&self, session_id: &str, role: &str, difficulty: i64) -> ComposedQuestion {
        let started = Instant::now();
        let resolution = Discipline::resolve(role);
        if resolution.used_fallback {
            debug!(
                session_id,
                role,
                discipline = %resolution.discipline,
                "role not recognised, using fallback discipline"
            );
        }
        let requested = clamp_difficulty(difficulty);
        let domain = resolution.discipline;
        let library = fragments::library(domain);

        let (question, outcome, draws) = loop {
            let entry = self.ledger_or_create(session_id);
            let mut ledger = lock(&entry);
            // cleared between lookup and lock; eviction cannot remove a locked ledger
            if !self.is_mapped(session_id, &entry) {
                debug!(session_id, "session removed before draw, retrying");
                continue;
            }

            let target = if self.options.adaptive_difficulty {
                adapt_difficulty(requested, ledger.difficulty_history())
            } else {
                requested
            };

            let outcome = self.guard.draw(library, target, &mut ledger);
            let question = self.build_question(
                &outcome.composition,
                domain,
                &resolution.role,
                ledger.total_questions(),
            );
            let composition = &outcome.composition;
            ledger.record(composition.topic, &composition.facets, question.clone(), self.clock.now());
            break (question, outcome, ledger.total_questions());
        };

        self.monitor.record(started.elapsed(), outcome.collided);
        debug!(
            session_id,
            discipline = %domain,
            topic = %question.topic,
            question_type = %question.question_type,
            difficulty = question.difficulty,
            attempts = outcome.attempts,
            duplicate = outcome.duplicate,
            draws,
            "question composed"
        );

        question
    }

    fn build_question(
        &self,
        composition: &Composition,
        domain: Discipline,
        role: &str,
        sequence_index: u64,
    ) -> ComposedQuestion {
        let complexity = Complexity::from_difficulty(composition.difficulty);

        let mut prerequisites = Vec::with_capacity(2);
        if composition.difficulty > PREREQUISITE_DIFFICULTY {
            prerequisites.push(composition.topic.to_string());
        }
        prerequisites.push(domain.label().to_string());

        ComposedQuestion {
            id: generate_question_id(
                domain.label(),
                composition.topic,
                composition.question_type.as_str(),
                sequence_index,
            ),
            text: composition.text.clone(),
            domain,
            role: role.to_string(),
            difficulty: composition.difficulty,
            topic: composition.topic.to_string(),
            question_type: composition.question_type,
            complexity,
            estimated_time_minutes: estimate_minutes(composition.question_type, complexity),
            tags: vec![
                domain.label().to_string(),
                composition.topic.to_string(),
                composition.question_type.as_str().to_string(),
                complexity.as_str().to_string(),
                role.to_string(),
            ],
            prerequisites,
        }
    }

    pub fn get_session_stats(&self, session_id: &str) -> SessionStats {
        self.ledger(session_id)
            .map(|entry| {
                let ledger = lock(&entry);
                ledger.stats()
            })
            .unwrap_or_default()
    }

    pub fn get_question_count(&self, session_id: &str) -> usize {
        self.ledger(session_id)
            .map(|entry| {
                let ledger = lock(&entry);
                ledger.question_count()
            })
            .unwrap_or(0)
    }

    pub fn get_question_history(&self, session_id: &str) -> Vec<ComposedQuestion> {
        self.ledger(session_id)
            .map(|entry| {
                let ledger = lock(&entry);
                ledger.history().to_vec()
            })
            .unwrap_or_default()
    }

    /// Drops the session's ledger. Returns whether one existed.
    pub fn clear_session(&self, session_id: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some();
        if removed {
            debug!(session_id, "session cleared");
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Removes ledgers idle for longer than the configured TTL as of `now`.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let ttl = self.options.session_ttl;
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, entry| match entry.try_lock() {
            Ok(ledger) => !is_expired(ledger.last_active_at(), ttl, now),
            Err(TryLockError::Poisoned(poisoned)) => {
                !is_expired(poisoned.into_inner().last_active_at(), ttl, now)
            }
            // mid-draw, so not idle
            Err(TryLockError::WouldBlock) => true,
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "evicted idle sessions");
        }
        evicted
    }

    pub fn sweep(&self) -> usize {
        self.evict_idle(self.clock.now())
    }

    pub fn capacity(&self) -> CapacityReport {
        fragments::capacity_report()
    }

    pub fn performance(&self) -> PerformanceSnapshot {
        self.monitor.snapshot()
    }

    fn ledger(&self, session_id: &str) -> Option<Arc<Mutex<SessionLedger>>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()
    }

    fn ledger_or_create(&self, session_id: &str) -> Arc<Mutex<SessionLedger>> {
        if let Some(entry) = self.ledger(session_id) {
            return entry;
        }
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                let generation = self.generations.fetch_add(1, Ordering::Relaxed);
                let seed = session_seed(self.master_seed, session_id, generation);
                Arc::new(Mutex::new(SessionLedger::new(seed, self.clock.now())))
            })
            .clone()
    }

    fn is_mapped(&self, session_id: &str, entry: &Arc<Mutex<SessionLedger>>) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .is_some_and(|current| Arc::ptr_eq(current, entry))
    }
}

fn lock(entry: &Mutex<SessionLedger>) -> MutexGuard<'_, SessionLedger> {
    entry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Nudges the target one step against the recent trend once enough draws exist.
fn adapt_difficulty(target: u8, history: &[u8]) -> u8 {
    if history.len() < ADAPTIVE_WINDOW {
        return target;
    }
    let recent = &history[history.len() - ADAPTIVE_WINDOW..];
    let average = recent.iter().map(|&d| d as f64).sum::<f64>() / ADAPTIVE_WINDOW as f64;
    let target_f = target as f64;

    if average > target_f + 1.0 {
        target.saturating_add(1).min(MAX_DIFFICULTY)
    } else if average < target_f - 1.0 {
        target.saturating_sub(1).max(MIN_DIFFICULTY)
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::MockClock;

    fn seeded() -> QuestionBankService {
        QuestionBankService::new(BankOptions::default().with_seed(17))
    }

    #[test]
    fn adapt_difficulty_follows_recent_trend() {
        assert_eq!(adapt_difficulty(5, &[9, 9]), 5);
        assert_eq!(adapt_difficulty(5, &[1, 8, 8, 8]), 6);
        assert_eq!(adapt_difficulty(5, &[9, 2, 2, 2]), 4);
        assert_eq!(adapt_difficulty(5, &[5, 6, 4]), 5);
        assert_eq!(adapt_difficulty(10, &[10, 10, 10]), 10);
        assert_eq!(adapt_difficulty(1, &[1, 1, 1]), 1);
    }

    #[test]
    fn question_carries_derived_metadata() {
        let bank = seeded();
        let q = bank.get_next_question("s1", "HVAC Engineer", 7);
        assert_eq!(q.domain, Discipline::Mechanical);
        assert_eq!(q.role, "HVAC Engineer");
        assert_eq!(q.difficulty, 7);
        assert_eq!(q.complexity, Complexity::Expert);
        assert_eq!(q.tags.len(), 5);
        assert_eq!(q.tags[0], "Mechanical Engineering");
        assert_eq!(q.tags[4], "HVAC Engineer");
        assert_eq!(q.prerequisites, vec![q.topic.clone(), "Mechanical Engineering".to_string()]);
        assert!(q.id.starts_with("q_"));
    }

    #[test]
    fn low_difficulty_only_requires_the_domain() {
        let bank = seeded();
        let q = bank.get_next_question("s1", "Process Engineer", 2);
        assert_eq!(q.prerequisites, vec!["Chemical Engineering".to_string()]);
        assert_eq!(q.complexity, Complexity::Basic);
    }

    #[test]
    fn unknown_session_reads_are_empty() {
        let bank = seeded();
        assert_eq!(bank.get_question_count("nope"), 0);
        assert_eq!(bank.get_session_stats("nope"), SessionStats::default());
        assert!(bank.get_question_history("nope").is_empty());
        assert!(!bank.clear_session("nope"));
        assert_eq!(bank.session_count(), 0);
    }

    #[test]
    fn adaptive_mode_stays_in_range() {
        let mut options = BankOptions::default().with_seed(3);
        options.adaptive_difficulty = true;
        let bank = QuestionBankService::new(options);
        for _ in 0..30 {
            let q = bank.get_next_question("adaptive", "Software Engineer", 10);
            assert!((1..=10).contains(&q.difficulty));
        }
    }

    #[test]
    fn eviction_uses_the_injected_clock() {
        let start = Utc::now();
        let mut clock = MockClock::new();
        clock.expect_now().return_const(start);

        let mut options = BankOptions::default().with_seed(5);
        options.session_ttl = Duration::minutes(30);
        let bank = QuestionBankService::with_clock(options, Arc::new(clock));

        bank.get_next_question("first", "Civil Engineer", 4);
        bank.get_next_question("second", "Structural Engineer", 4);
        assert_eq!(bank.session_count(), 2);

        assert_eq!(bank.evict_idle(start + Duration::minutes(30)), 0);
        assert_eq!(bank.evict_idle(start + Duration::minutes(31)), 2);
        assert_eq!(bank.session_count(), 0);
        assert_eq!(bank.sweep(), 0);
    }

    #[test]
    fn performance_counts_each_draw() {
        let bank = seeded();
        for _ in 0..10 {
            bank.get_next_question("perf", "Data Engineer", 5);
        }
        let snap = bank.performance();
        assert_eq!(snap.total_generations, 10);
        assert!(snap.average_generation_ms >= 0.0);
    }

    #[test]
    fn eviction_skips_a_ledger_that_is_mid_draw() {
        let mut options = BankOptions::default().with_seed(21);
        options.session_ttl = Duration::minutes(1);
        let bank = QuestionBankService::new(options);
        bank.get_next_question("busy", "Civil Engineer", 5);
        bank.get_next_question("idle", "Civil Engineer", 5);

        let entry = bank.ledger("busy").unwrap();
        let held = lock(&entry);
        assert_eq!(bank.evict_idle(Utc::now() + Duration::hours(1)), 1);
        assert!(bank.is_mapped("busy", &entry));
        drop(held);

        assert_eq!(bank.evict_idle(Utc::now() + Duration::hours(1)), 1);
        assert_eq!(bank.session_count(), 0);
    }

    #[test]
    fn cleared_ledger_is_no_longer_mapped() {
        let bank = seeded();
        bank.get_next_question("gone", "Software Engineer", 5);
        let stale = bank.ledger("gone").unwrap();
        assert!(bank.clear_session("gone"));
        assert!(!bank.is_mapped("gone", &stale));

        bank.get_next_question("gone", "Software Engineer", 5);
        let fresh = bank.ledger("gone").unwrap();
        assert!(!Arc::ptr_eq(&stale, &fresh));
        assert_ne!(lock(&stale).seed(), lock(&fresh).seed());
        assert_eq!(bank.get_question_count("gone"), 1);
        assert_eq!(lock(&stale).total_questions(), 1);
    }

    #[test]
    fn unknown_role_falls_back_to_software() {
        let bank = seeded();
        let q = bank.get_next_question("fallback", "Underwater Basket Weaver", 5);
        assert_eq!(q.domain, Discipline::Software);
        assert_eq!(q.role, "Underwater Basket Weaver");
    }
}
