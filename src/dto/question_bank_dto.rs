use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fragments::CapacityReport;
use crate::models::question::{clamp_fractional_difficulty, ComposedQuestion, QuestionType};
use crate::services::question_validator::QuestionIssue;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NextQuestionRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub role: String,
    /// Any JSON number; rounded and clamped into 1..=10, never rejected.
    #[serde(default = "default_difficulty")]
    pub difficulty: f64,
}

impl NextQuestionRequest {
    pub fn difficulty_level(&self) -> i64 {
        i64::from(clamp_fractional_difficulty(self.difficulty))
    }
}

fn default_difficulty() -> f64 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCountResponse {
    pub session_id: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionHistoryResponse {
    pub session_id: String,
    pub questions: Vec<ComposedQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateQuestionResponse {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub code: QuestionIssue,
    pub message: &'static str,
}

impl From<QuestionIssue> for ValidationIssue {
    fn from(code: QuestionIssue) -> Self {
        Self {
            code,
            message: code.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionIdRequest {
    #[validate(length(min = 1, max = 100))]
    pub discipline: String,
    #[validate(length(min = 1, max = 100))]
    pub topic: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub sequence_index: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionIdResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapacityResponse {
    #[serde(flatten)]
    pub report: CapacityReport,
    pub estimated_combinations: u64,
    pub min_per_discipline: u64,
}

impl From<CapacityReport> for CapacityResponse {
    fn from(report: CapacityReport) -> Self {
        let estimated_combinations = report.estimated_combinations();
        let min_per_discipline = report.min_per_discipline();
        Self {
            report,
            estimated_combinations,
            min_per_discipline,
        }
    }
}
