//! Static fragment libraries, one per discipline.
//!
//! Every pattern template carries each of the `{context}`, `{constraint}` and
//! `{scenario}` slots exactly once; the order they appear in is a property of
//! the pattern. Fragment texts are unique within their list, so a distinct
//! selection always renders a distinct question.

mod chemical;
mod civil;
mod electrical;
mod mechanical;
mod software;

use serde::Serialize;

use crate::models::discipline::Discipline;
use crate::models::question::QuestionType;

pub const CONTEXT_SLOT: &str = "{context}";
pub const CONSTRAINT_SLOT: &str = "{constraint}";
pub const SCENARIO_SLOT: &str = "{scenario}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Context,
    Constraint,
    Scenario,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Context, Slot::Constraint, Slot::Scenario];

    pub fn placeholder(&self) -> &'static str {
        match self {
            Slot::Context => CONTEXT_SLOT,
            Slot::Constraint => CONSTRAINT_SLOT,
            Slot::Scenario => SCENARIO_SLOT,
        }
    }

    /// Bit used by clause arrangements to mark this slot as hoisted.
    pub fn bit(&self) -> u8 {
        match self {
            Slot::Context => 0b001,
            Slot::Constraint => 0b010,
            Slot::Scenario => 0b100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub topic: &'static str,
    pub question_type: QuestionType,
    pub difficulty: u8,
    pub template: &'static str,
}

impl Pattern {
    pub const fn new(
        topic: &'static str,
        question_type: QuestionType,
        difficulty: u8,
        template: &'static str,
    ) -> Self {
        Self {
            topic,
            question_type,
            difficulty,
            template,
        }
    }

    /// Slots in the order they appear in the template.
    pub fn slot_order(&self) -> Vec<Slot> {
        let mut slots: Vec<(usize, Slot)> = Slot::ALL
            .iter()
            .filter_map(|slot| self.template.find(slot.placeholder()).map(|at| (at, *slot)))
            .collect();
        slots.sort_by_key(|(at, _)| *at);
        slots.into_iter().map(|(_, slot)| slot).collect()
    }
}

/// A context, constraint or scenario clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub facet: &'static str,
    pub difficulty: u8,
    pub text: &'static str,
}

impl Fragment {
    pub const fn new(facet: &'static str, difficulty: u8, text: &'static str) -> Self {
        Self {
            facet,
            difficulty,
            text,
        }
    }
}

#[derive(Debug)]
pub struct FragmentLibrary {
    pub discipline: Discipline,
    pub patterns: &'static [Pattern],
    pub contexts: &'static [Fragment],
    pub constraints: &'static [Fragment],
    pub scenarios: &'static [Fragment],
}

impl FragmentLibrary {
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
            || self.contexts.is_empty()
            || self.constraints.is_empty()
            || self.scenarios.is_empty()
    }

    pub fn combinations(&self) -> u64 {
        self.patterns.len() as u64
            * self.contexts.len() as u64
            * self.constraints.len() as u64
            * self.scenarios.len() as u64
    }

    pub fn fragments(&self, slot: Slot) -> &'static [Fragment] {
        match slot {
            Slot::Context => self.contexts,
            Slot::Constraint => self.constraints,
            Slot::Scenario => self.scenarios,
        }
    }

    /// Distinct pattern topics, in first-seen order.
    pub fn topics(&self) -> Vec<&'static str> {
        let mut topics: Vec<&'static str> = Vec::new();
        for pattern in self.patterns {
            if !topics.contains(&pattern.topic) {
                topics.push(pattern.topic);
            }
        }
        topics
    }
}

static LIBRARIES: [FragmentLibrary; 5] = [
    FragmentLibrary {
        discipline: Discipline::Software,
        patterns: software::PATTERNS,
        contexts: software::CONTEXTS,
        constraints: software::CONSTRAINTS,
        scenarios: software::SCENARIOS,
    },
    FragmentLibrary {
        discipline: Discipline::Civil,
        patterns: civil::PATTERNS,
        contexts: civil::CONTEXTS,
        constraints: civil::CONSTRAINTS,
        scenarios: civil::SCENARIOS,
    },
    FragmentLibrary {
        discipline: Discipline::Mechanical,
        patterns: mechanical::PATTERNS,
        contexts: mechanical::CONTEXTS,
        constraints: mechanical::CONSTRAINTS,
        scenarios: mechanical::SCENARIOS,
    },
    FragmentLibrary {
        discipline: Discipline::Electrical,
        patterns: electrical::PATTERNS,
        contexts: electrical::CONTEXTS,
        constraints: electrical::CONSTRAINTS,
        scenarios: electrical::SCENARIOS,
    },
    FragmentLibrary {
        discipline: Discipline::Chemical,
        patterns: chemical::PATTERNS,
        contexts: chemical::CONTEXTS,
        constraints: chemical::CONSTRAINTS,
        scenarios: chemical::SCENARIOS,
    },
];

pub fn library(discipline: Discipline) -> &'static FragmentLibrary {
    LIBRARIES
        .iter()
        .find(|lib| lib.discipline == discipline)
        .unwrap_or(&LIBRARIES[0])
}

pub fn libraries() -> &'static [FragmentLibrary] {
    &LIBRARIES
}

#[derive(Debug, Clone, Serialize)]
pub struct DisciplineCapacity {
    pub discipline: Discipline,
    pub patterns: usize,
    pub contexts: usize,
    pub constraints: usize,
    pub scenarios: usize,
    pub combinations: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapacityReport {
    pub total_patterns: usize,
    pub total_contexts: usize,
    pub total_constraints: usize,
    pub total_scenarios: usize,
    pub per_discipline: Vec<DisciplineCapacity>,
}

impl CapacityReport {
    /// Distinct compositions across every discipline, ignoring clause arrangements.
    pub fn estimated_combinations(&self) -> u64 {
        self.per_discipline.iter().map(|d| d.combinations).sum()
    }

    pub fn min_per_discipline(&self) -> u64 {
        self.per_discipline
            .iter()
            .map(|d| d.combinations)
            .min()
            .unwrap_or(0)
    }
}

pub fn capacity_report() -> CapacityReport {
    let per_discipline: Vec<DisciplineCapacity> = libraries()
        .iter()
        .map(|lib| DisciplineCapacity {
            discipline: lib.discipline,
            patterns: lib.patterns.len(),
            contexts: lib.contexts.len(),
            constraints: lib.constraints.len(),
            scenarios: lib.scenarios.len(),
            combinations: lib.combinations(),
        })
        .collect();

    CapacityReport {
        total_patterns: per_discipline.iter().map(|d| d.patterns).sum(),
        total_contexts: per_discipline.iter().map(|d| d.contexts).sum(),
        total_constraints: per_discipline.iter().map(|d| d.constraints).sum(),
        total_scenarios: per_discipline.iter().map(|d| d.scenarios).sum(),
        per_discipline,
    }
}
