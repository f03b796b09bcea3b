use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::{ComposedQuestion, QuestionType};

/// Uniqueness key of a composition: the four fragment indices plus the
/// clause arrangement used to render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Fingerprint {
    pub pattern: u16,
    pub context: u16,
    pub constraint: u16,
    pub scenario: u16,
    pub arrangement: u8,
}

impl Fingerprint {
    pub fn with_arrangement(self, arrangement: u8) -> Self {
        Self {
            arrangement,
            ..self
        }
    }
}

/// Per-session bookkeeping of everything issued so far.
#[derive(Debug)]
pub struct SessionLedger {
    seed: u64,
    used_fingerprints: HashSet<Fingerprint>,
    topic_counts: BTreeMap<&'static str, u32>,
    type_counts: BTreeMap<QuestionType, u32>,
    facet_counts: HashMap<&'static str, u32>,
    difficulty_history: Vec<u8>,
    history: Vec<ComposedQuestion>,
    total_questions: u64,
    created_at: DateTime<Utc>,
    last_active_at: DateTime<Utc>,
}

impl SessionLedger {
    pub fn new(seed: u64, at: DateTime<Utc>) -> Self {
        Self {
            seed,
            used_fingerprints: HashSet::new(),
            topic_counts: BTreeMap::new(),
            type_counts: BTreeMap::new(),
            facet_counts: HashMap::new(),
            difficulty_history: Vec::new(),
            history: Vec::new(),
            total_questions: 0,
            created_at: at,
            last_active_at: at,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws served so far, including any degraded duplicates.
    pub fn total_questions(&self) -> u64 {
        self.total_questions
    }

    pub fn question_count(&self) -> usize {
        self.used_fingerprints.len()
    }

    pub(crate) fn claim(&mut self, fingerprint: Fingerprint) -> bool {
        self.used_fingerprints.insert(fingerprint)
    }

    pub fn topic_count(&self, topic: &str) -> u32 {
        self.topic_counts.get(topic).copied().unwrap_or(0)
    }

    pub fn facet_count(&self, facet: &str) -> u32 {
        self.facet_counts.get(facet).copied().unwrap_or(0)
    }

    pub fn difficulty_history(&self) -> &[u8] {
        &self.difficulty_history
    }

    pub fn history(&self) -> &[ComposedQuestion] {
        &self.history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }

    pub fn touch(&mut self, at: DateTime<Utc>) {
        if at > self.last_active_at {
            self.last_active_at = at;
        }
    }

    pub(crate) fn record(
        &mut self,
        topic: &'static str,
        facets: &[&'static str],
        question: ComposedQuestion,
        at: DateTime<Utc>,
    ) {
        *self.topic_counts.entry(topic).or_insert(0) += 1;
        *self.type_counts.entry(question.question_type).or_insert(0) += 1;
        for &facet in facets {
            *self.facet_counts.entry(facet).or_insert(0) += 1;
        }
        self.difficulty_history.push(question.difficulty);
        self.history.push(question);
        self.total_questions += 1;
        self.touch(at);
    }

    pub fn stats(&self) -> SessionStats {
        let average_difficulty = if self.difficulty_history.is_empty() {
            0.0
        } else {
            self.difficulty_history.iter().map(|&d| d as f64).sum::<f64>()
                / self.difficulty_history.len() as f64
        };

        SessionStats {
            total_questions: self.total_questions,
            question_types: self.type_counts.clone(),
            topic_coverage: self
                .topic_counts
                .iter()
                .map(|(topic, count)| (topic.to_string(), *count))
                .collect(),
            difficulty_progression: self.difficulty_history.clone(),
            average_difficulty,
            created_at: Some(self.created_at),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionStats {
    pub total_questions: u64,
    pub question_types: BTreeMap<QuestionType, u32>,
    pub topic_coverage: BTreeMap<String, u32>,
    pub difficulty_progression: Vec<u8>,
    pub average_difficulty: f64,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::discipline::Discipline;
    use crate::models::question::Complexity;

    fn question(topic: &str, question_type: QuestionType, difficulty: u8) -> ComposedQuestion {
        ComposedQuestion {
            id: "q_test_0".into(),
            text: format!("A question about {topic}"),
            domain: Discipline::Software,
            role: "Software Engineer".into(),
            difficulty,
            topic: topic.into(),
            question_type,
            complexity: Complexity::from_difficulty(difficulty),
            estimated_time_minutes: 20,
            tags: vec![topic.into()],
            prerequisites: vec![],
        }
    }

    #[test]
    fn empty_ledger_reports_zeroes() {
        let ledger = SessionLedger::new(1, Utc::now());
        let stats = ledger.stats();
        assert_eq!(stats.total_questions, 0);
        assert_eq!(stats.average_difficulty, 0.0);
        assert!(stats.topic_coverage.is_empty());
        assert_eq!(ledger.question_count(), 0);
    }

    #[test]
    fn record_updates_every_counter() {
        let now = Utc::now();
        let mut ledger = SessionLedger::new(1, now);
        ledger.record("Algorithms", &["Commerce", "Latency", "Load"], question("Algorithms", QuestionType::Coding, 4), now);
        ledger.record("Databases", &["Finance", "Latency", "Failure"], question("Databases", QuestionType::Design, 8), now);
        ledger.record("Algorithms", &["Media", "Scale", "Load"], question("Algorithms", QuestionType::Coding, 6), now);

        let stats = ledger.stats();
        assert_eq!(stats.total_questions, 3);
        assert_eq!(stats.topic_coverage.get("Algorithms"), Some(&2));
        assert_eq!(stats.question_types.get(&QuestionType::Coding), Some(&2));
        assert_eq!(stats.difficulty_progression, vec![4, 8, 6]);
        assert!((stats.average_difficulty - 6.0).abs() < f64::EPSILON);
        assert_eq!(ledger.facet_count("Latency"), 2);
        assert_eq!(ledger.facet_count("Load"), 2);
        assert_eq!(ledger.history().len(), 3);
    }

    #[test]
    fn fingerprints_are_claimed_once() {
        let mut ledger = SessionLedger::new(1, Utc::now());
        let fp = Fingerprint {
            pattern: 1,
            context: 2,
            constraint: 3,
            scenario: 4,
            arrangement: 0,
        };
        assert!(ledger.claim(fp));
        assert!(!ledger.claim(fp));
        assert!(ledger.claim(fp.with_arrangement(1)));
        assert_eq!(ledger.question_count(), 2);
    }

    #[test]
    fn stats_serialize_type_keys_as_snake_case() {
        let now = Utc::now();
        let mut ledger = SessionLedger::new(1, now);
        ledger.record("Security", &[], question("Security", QuestionType::Security, 5), now);
        let json = serde_json::to_value(ledger.stats()).unwrap();
        assert_eq!(json["question_types"]["security"], 1);
        assert_eq!(json["topic_coverage"]["Security"], 1);
    }
}
