use std::collections::{HashMap, HashSet};
use std::time::Instant;

use chrono::{Duration, Utc};
use interview_question_bank::fragments::capacity_report;
use interview_question_bank::models::discipline::Discipline;
use interview_question_bank::services::question_bank_service::{BankOptions, QuestionBankService};
use interview_question_bank::services::question_validator::validate_question;
use interview_question_bank::utils::token::generate_question_id;

fn bank(seed: u64) -> QuestionBankService {
    QuestionBankService::new(BankOptions::default().with_seed(seed))
}

const ROLES: [&str; 5] = [
    "Software Engineer",
    "Civil Engineer",
    "Mechanical Engineer",
    "Electrical Engineer",
    "Chemical Engineer",
];

#[test]
fn hundred_draws_are_distinct_for_every_discipline() {
    let bank = bank(1);
    for role in ROLES {
        let session = format!("hundred-{role}");
        let texts: HashSet<String> = (0..100)
            .map(|i| bank.get_next_question(&session, role, (i % 10) + 1).text)
            .collect();
        assert_eq!(texts.len(), 100, "{role}");
        assert_eq!(bank.get_question_count(&session), 100);
    }
}

#[test]
fn thousand_draws_are_distinct() {
    let bank = bank(2);
    let mut texts = HashSet::new();
    for i in 0..1_000 {
        let q = bank.get_next_question("marathon", "Backend Engineer", (i % 10) + 1);
        assert!(texts.insert(q.text.clone()), "repeat at draw {i}: {}", q.text);
    }
    assert_eq!(bank.get_session_stats("marathon").total_questions, 1_000);
}

#[test]
fn interleaved_sessions_are_isolated() {
    let bank = bank(3);
    let mut a = HashSet::new();
    let mut b = HashSet::new();
    for _ in 0..50 {
        a.insert(bank.get_next_question("session-a", "Frontend Engineer", 5).text);
        b.insert(bank.get_next_question("session-b", "Structural Engineer", 5).text);
    }
    assert_eq!(a.len(), 50);
    assert_eq!(b.len(), 50);
    assert_eq!(bank.get_question_count("session-a"), 50);
    assert_eq!(bank.get_question_count("session-b"), 50);
    assert_eq!(bank.session_count(), 2);
}

#[test]
fn ten_thousand_question_ids_are_unique() {
    let ids: HashSet<String> = (0..10_000u64)
        .map(|i| generate_question_id("Software Engineering", "Algorithms", "coding", i))
        .collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn capacity_exceeds_a_million_per_discipline() {
    let report = capacity_report();
    assert_eq!(report.per_discipline.len(), Discipline::ALL.len());
    assert!(report.estimated_combinations() / 5 > 1_000_000);
}

#[test]
fn unknown_role_still_yields_a_valid_question() {
    let bank = bank(4);
    let q = bank.get_next_question("unknown-role", "Invalid Role", 5);
    assert_eq!(q.domain, Discipline::Software);
    assert_eq!(q.role, "Invalid Role");
    assert!(validate_question(&q), "{q:?}");
}

#[test]
fn difficulty_is_clamped_into_range() {
    let bank = bank(5);
    assert!(bank.get_next_question("clamp", "Civil Engineer", 1).difficulty >= 1);
    assert!(bank.get_next_question("clamp", "Civil Engineer", 10).difficulty <= 10);
    assert_eq!(bank.get_next_question("clamp", "Civil Engineer", -5).difficulty, 1);
    assert_eq!(bank.get_next_question("clamp", "Civil Engineer", 99).difficulty, 10);
}

#[test]
fn no_topic_dominates_fifty_draws() {
    let bank = bank(6);
    for role in ROLES {
        let session = format!("spread-{role}");
        for _ in 0..50 {
            bank.get_next_question(&session, role, 6);
        }
        let stats = bank.get_session_stats(&session);
        for (topic, count) in &stats.topic_coverage {
            assert!(*count <= 25, "{role}: {topic} drawn {count} times");
        }
    }
}

fn draw_texts(bank: &QuestionBankService, session: &str, role: &str, n: usize) -> Vec<String> {
    (0..n).map(|_| bank.get_next_question(session, role, 4).text).collect()
}

#[test]
fn clearing_a_session_leaves_siblings_alone() {
    let bank = bank(7);
    let mut doomed = Vec::new();
    for _ in 0..10 {
        doomed.push(bank.get_next_question("doomed", "Process Engineer", 4).text);
        bank.get_next_question("sibling", "Process Engineer", 4);
    }
    assert!(bank.clear_session("doomed"));
    assert_eq!(bank.get_question_count("doomed"), 0);
    assert_eq!(bank.get_session_stats("doomed").total_questions, 0);
    assert_eq!(bank.get_question_count("sibling"), 10);

    let restarted = draw_texts(&bank, "doomed", "Process Engineer", 10);
    assert_eq!(bank.get_question_count("doomed"), 10);
    assert_ne!(restarted[0], doomed[0]);
    let before: HashSet<&String> = doomed.iter().collect();
    let repeats: Vec<&String> = restarted.iter().filter(|t| before.contains(t)).collect();
    assert!(repeats.is_empty(), "restarted session repeated {repeats:?}");
}

#[test]
fn reused_session_id_never_replays_after_reset() {
    for seed in [None, Some(70)] {
        let mut options = BankOptions::default();
        options.master_seed = seed;
        options.session_ttl = Duration::minutes(1);
        let bank = QuestionBankService::new(options);

        let first = draw_texts(&bank, "live", "Software Engineer", 5);
        assert_eq!(bank.evict_idle(Utc::now() + Duration::minutes(2)), 1);
        let resumed = draw_texts(&bank, "live", "Software Engineer", 5);
        assert!(bank.clear_session("live"));
        let restarted = draw_texts(&bank, "live", "Software Engineer", 5);

        let all: HashSet<&String> = first.iter().chain(&resumed).chain(&restarted).collect();
        assert_eq!(all.len(), 15, "seed {seed:?}");
    }
}

#[test]
fn concurrent_draws_on_one_session_stay_distinct() {
    let bank = bank(14);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let bank = bank.clone();
            std::thread::spawn(move || draw_texts(&bank, "shared", "Backend Engineer", 100))
        })
        .collect();

    let mut texts = HashSet::new();
    let mut draws = 0;
    for handle in handles {
        for text in handle.join().unwrap() {
            texts.insert(text);
            draws += 1;
        }
    }
    assert_eq!(draws, 800);
    assert_eq!(texts.len(), 800);
    assert_eq!(bank.get_question_count("shared"), 800);
    assert_eq!(bank.get_session_stats("shared").total_questions, 800);
}

#[test]
fn average_draw_is_fast() {
    let bank = bank(8);
    let started = Instant::now();
    for i in 0..100 {
        bank.get_next_question("timing", "Power Systems Engineer", (i % 10) + 1);
    }
    let average_ms = started.elapsed().as_secs_f64() * 1_000.0 / 100.0;
    assert!(average_ms < 50.0, "average draw took {average_ms}ms");
}

#[test]
fn hundred_draws_span_several_question_types() {
    let bank = bank(9);
    for _ in 0..100 {
        bank.get_next_question("types", "Software Engineer", 5);
    }
    let stats = bank.get_session_stats("types");
    assert!(stats.question_types.len() > 3, "{:?}", stats.question_types);
}

#[test]
fn same_seed_replays_the_same_session() {
    let first = bank(42);
    let second = bank(42);
    let a: Vec<String> = (0..25)
        .map(|i| first.get_next_question("replay", "Chemical Engineer", (i % 10) + 1).text)
        .collect();
    let b: Vec<String> = (0..25)
        .map(|i| second.get_next_question("replay", "Chemical Engineer", (i % 10) + 1).text)
        .collect();
    assert_eq!(a, b);

    let other = bank(43);
    let c: Vec<String> = (0..25)
        .map(|i| other.get_next_question("replay", "Chemical Engineer", (i % 10) + 1).text)
        .collect();
    assert_ne!(a, c);
}

#[test]
fn idle_eviction_only_removes_expired_sessions() {
    let mut options = BankOptions::default().with_seed(10);
    options.session_ttl = Duration::minutes(10);
    let bank = QuestionBankService::new(options);

    bank.get_next_question("stale", "RF Engineer", 5);
    let earlier = bank.get_next_question("fresh", "RF Engineer", 5).text;

    let now = Utc::now();
    assert_eq!(bank.evict_idle(now), 0);
    assert_eq!(bank.evict_idle(now + Duration::minutes(11)), 2);
    assert_eq!(bank.session_count(), 0);

    let resumed = bank.get_next_question("fresh", "RF Engineer", 5).text;
    assert_ne!(resumed, earlier);
    assert_eq!(bank.evict_idle(Utc::now() + Duration::minutes(5)), 0);
    assert_eq!(bank.get_question_count("fresh"), 1);
}

#[test]
fn stats_track_history_and_difficulty() {
    let bank = bank(11);
    let difficulties = [2, 4, 6, 8, 10];
    for d in difficulties {
        bank.get_next_question("progress", "Automotive Engineer", d);
    }
    let stats = bank.get_session_stats("progress");
    assert_eq!(stats.difficulty_progression, vec![2, 4, 6, 8, 10]);
    assert!((stats.average_difficulty - 6.0).abs() < 1e-9);

    let history = bank.get_question_history("progress");
    assert_eq!(history.len(), 5);
    let by_topic: HashMap<String, u32> = history.iter().fold(HashMap::new(), |mut acc, q| {
        *acc.entry(q.topic.clone()).or_insert(0) += 1;
        acc
    });
    let coverage: HashMap<String, u32> = stats.topic_coverage.into_iter().collect();
    assert_eq!(by_topic, coverage);
}

#[test]
fn small_retry_budget_still_produces_distinct_text() {
    let mut options = BankOptions::default().with_seed(12);
    options.max_attempts = 1;
    let bank = QuestionBankService::new(options);
    let texts: HashSet<String> = (0..300)
        .map(|_| bank.get_next_question("tight", "Electronics Engineer", 5).text)
        .collect();
    assert_eq!(texts.len(), 300);
}

#[test]
fn every_composed_question_passes_validation() {
    let bank = bank(13);
    for role in ROLES {
        for d in 1..=10 {
            let q = bank.get_next_question("validate", role, d);
            assert!(validate_question(&q), "{q:?}");
        }
    }
}
