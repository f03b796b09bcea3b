use serde::Serialize;

use crate::models::discipline::Discipline;
use crate::models::question::{ComposedQuestion, MAX_DIFFICULTY, MIN_DIFFICULTY};

const MIN_TEXT_LEN: usize = 10;
const MAX_TEXT_LEN: usize = 500;
const MAX_ESTIMATED_MINUTES: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionIssue {
    TextTooShort,
    TextTooLong,
    DifficultyOutOfRange,
    MissingTopic,
    MissingTags,
    EstimatedTimeOutOfRange,
    DomainMismatch,
}

impl QuestionIssue {
    pub fn message(&self) -> &'static str {
        match self {
            QuestionIssue::TextTooShort => "question text is too short",
            QuestionIssue::TextTooLong => "question text is too long",
            QuestionIssue::DifficultyOutOfRange => "difficulty must be between 1 and 10",
            QuestionIssue::MissingTopic => "topic is empty",
            QuestionIssue::MissingTags => "tags are empty",
            QuestionIssue::EstimatedTimeOutOfRange => "estimated time must be between 1 and 120 minutes",
            QuestionIssue::DomainMismatch => "role does not resolve to the question domain",
        }
    }
}

/// Lists every sanity problem with a question. Empty means valid.
pub fn inspect_question(question: &ComposedQuestion) -> Vec<QuestionIssue> {
    let mut issues = Vec::new();

    let len = question.text.chars().count();
    if len <= MIN_TEXT_LEN {
        issues.push(QuestionIssue::TextTooShort);
    }
    if len >= MAX_TEXT_LEN {
        issues.push(QuestionIssue::TextTooLong);
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&question.difficulty) {
        issues.push(QuestionIssue::DifficultyOutOfRange);
    }
    if question.topic.trim().is_empty() {
        issues.push(QuestionIssue::MissingTopic);
    }
    if question.tags.is_empty() {
        issues.push(QuestionIssue::MissingTags);
    }
    if question.estimated_time_minutes == 0 || question.estimated_time_minutes > MAX_ESTIMATED_MINUTES {
        issues.push(QuestionIssue::EstimatedTimeOutOfRange);
    }
    if Discipline::resolve(&question.role).discipline != question.domain {
        issues.push(QuestionIssue::DomainMismatch);
    }

    issues
}

pub fn validate_question(question: &ComposedQuestion) -> bool {
    inspect_question(question).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Complexity, QuestionType};

    fn sample() -> ComposedQuestion {
        ComposedQuestion {
            id: "q_0123456789abcdef_0".into(),
            text: "Design a load balancer for a regional bank under strict audit rules.".into(),
            domain: Discipline::Software,
            role: "Backend Engineer".into(),
            difficulty: 6,
            topic: "Networking".into(),
            question_type: QuestionType::Design,
            complexity: Complexity::Advanced,
            estimated_time_minutes: 39,
            tags: vec!["Software Engineering".into(), "Networking".into()],
            prerequisites: vec!["Networking".into()],
        }
    }

    #[test]
    fn well_formed_question_passes() {
        assert!(validate_question(&sample()));
    }

    #[test]
    fn reports_each_problem() {
        let mut q = sample();
        q.text = "Short".into();
        q.difficulty = 11;
        q.topic = "  ".into();
        q.tags.clear();
        q.estimated_time_minutes = 0;
        q.role = "Structural Engineer".into();

        let issues = inspect_question(&q);
        assert!(issues.contains(&QuestionIssue::TextTooShort));
        assert!(issues.contains(&QuestionIssue::DifficultyOutOfRange));
        assert!(issues.contains(&QuestionIssue::MissingTopic));
        assert!(issues.contains(&QuestionIssue::MissingTags));
        assert!(issues.contains(&QuestionIssue::EstimatedTimeOutOfRange));
        assert!(issues.contains(&QuestionIssue::DomainMismatch));
        assert!(!validate_question(&q));
    }

    #[test]
    fn overlong_text_fails() {
        let mut q = sample();
        q.text = "x".repeat(MAX_TEXT_LEN);
        assert_eq!(inspect_question(&q), vec![QuestionIssue::TextTooLong]);
    }
}
