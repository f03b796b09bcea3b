use serde::{Deserialize, Serialize};

use crate::models::discipline::Discipline;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposedQuestion {
    pub id: String,
    pub text: String,
    pub domain: Discipline,
    pub role: String,
    pub difficulty: u8,
    pub topic: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub complexity: Complexity,
    pub estimated_time_minutes: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Conceptual,
    Design,
    Coding,
    Debugging,
    Behavioral,
    System,
    Optimization,
    Security,
    Scalability,
    Architecture,
}

impl QuestionType {
    pub const ALL: [QuestionType; 10] = [
        QuestionType::Conceptual,
        QuestionType::Design,
        QuestionType::Coding,
        QuestionType::Debugging,
        QuestionType::Behavioral,
        QuestionType::System,
        QuestionType::Optimization,
        QuestionType::Security,
        QuestionType::Scalability,
        QuestionType::Architecture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Conceptual => "conceptual",
            QuestionType::Design => "design",
            QuestionType::Coding => "coding",
            QuestionType::Debugging => "debugging",
            QuestionType::Behavioral => "behavioral",
            QuestionType::System => "system",
            QuestionType::Optimization => "optimization",
            QuestionType::Security => "security",
            QuestionType::Scalability => "scalability",
            QuestionType::Architecture => "architecture",
        }
    }

    /// Minutes a candidate is expected to need at intermediate complexity.
    pub fn base_minutes(&self) -> f64 {
        match self {
            QuestionType::Coding => 45.0,
            QuestionType::System => 40.0,
            QuestionType::Architecture => 35.0,
            QuestionType::Design => 30.0,
            _ => 20.0,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
    Expert,
    Research,
}

impl Complexity {
    pub fn from_difficulty(difficulty: u8) -> Self {
        match difficulty {
            0..=2 => Complexity::Basic,
            3..=4 => Complexity::Intermediate,
            5..=6 => Complexity::Advanced,
            7..=8 => Complexity::Expert,
            _ => Complexity::Research,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
            Complexity::Expert => "expert",
            Complexity::Research => "research",
        }
    }

    pub fn time_multiplier(&self) -> f64 {
        match self {
            Complexity::Basic => 0.7,
            Complexity::Intermediate => 1.0,
            Complexity::Advanced => 1.3,
            Complexity::Expert => 1.6,
            Complexity::Research => 2.0,
        }
    }
}

pub fn estimate_minutes(question_type: QuestionType, complexity: Complexity) -> u32 {
    (question_type.base_minutes() * complexity.time_multiplier()).round() as u32
}

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

/// Clamps any caller-supplied difficulty into the supported 1..=10 band.
pub fn clamp_difficulty(requested: i64) -> u8 {
    requested.clamp(MIN_DIFFICULTY as i64, MAX_DIFFICULTY as i64) as u8
}

/// Rounds a JSON number to the nearest level, then clamps it. Float-to-int
/// casts saturate, so huge values land on the bounds and NaN lands on the floor.
pub fn clamp_fractional_difficulty(requested: f64) -> u8 {
    clamp_difficulty(requested.round() as i64)
}
