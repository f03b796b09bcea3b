//! Weighted fragment selection and text assembly.
//!
//! A composition is one pattern plus one context, constraint and scenario
//! fragment, rendered under a clause arrangement. The arrangement is a
//! bitmask over [`Slot::bit`]: every set bit hoists that slot into a lead
//! sentence and leaves a back-reference in the template.

use rand::distributions::{Distribution, WeightedIndex};

use crate::fragments::{Fragment, FragmentLibrary, Pattern, Slot};
use crate::models::question::{clamp_difficulty, QuestionType, MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::models::session::{Fingerprint, SessionLedger};
use crate::utils::rng::QuestionRng;

/// Number of distinct clause arrangements; arrangement 0 keeps every slot inline.
pub const ARRANGEMENTS: u8 = 8;

const MIN_DIVERSITY: f64 = 0.2;
const MAX_DIVERSITY: f64 = 5.0;
const OVER_COVERAGE_SHARE: f64 = 0.4;
const OVER_COVERAGE_MIN_DRAWS: u64 = 5;
const OVER_COVERAGE_DAMPING: f64 = 0.05;

const GENERIC_TOPIC: &str = "General";

#[derive(Debug, Clone)]
pub struct Composition {
    pub(crate) fingerprint: Fingerprint,
    pub text: String,
    pub topic: &'static str,
    pub question_type: QuestionType,
    pub difficulty: u8,
    pub facets: Vec<&'static str>,
}

/// Draws a fresh composition for `target` using the ledger's counts to favour
/// under-represented topics and facets. Always uses the inline arrangement.
pub fn compose(
    library: &FragmentLibrary,
    target: u8,
    ledger: &SessionLedger,
    rng: &mut QuestionRng,
) -> Composition {
    let target = clamp_difficulty(target as i64);
    if library.is_empty() {
        return generic(library, target);
    }

    let pattern = pick(&pattern_weights(library, target, ledger), rng);
    let [context, constraint, scenario] = Slot::ALL
        .map(|slot| pick(&fragment_weights(library.fragments(slot), target, ledger), rng));

    let fingerprint = Fingerprint {
        pattern: pattern as u16,
        context: context as u16,
        constraint: constraint as u16,
        scenario: scenario as u16,
        arrangement: 0,
    };
    assemble(library, fingerprint, target)
}

/// Renders the composition a fingerprint names. Indices out of range fall
/// back to the generic question.
pub(crate) fn assemble(library: &FragmentLibrary, fingerprint: Fingerprint, target: u8) -> Composition {
    let parts = (
        library.patterns.get(fingerprint.pattern as usize),
        library.fragments(Slot::Context).get(fingerprint.context as usize),
        library.fragments(Slot::Constraint).get(fingerprint.constraint as usize),
        library.fragments(Slot::Scenario).get(fingerprint.scenario as usize),
    );
    let (pattern, context, constraint, scenario) = match parts {
        (Some(p), Some(c), Some(k), Some(s)) => (p, c, k, s),
        _ => return generic(library, target),
    };

    Composition {
        fingerprint,
        text: render(pattern, [context, constraint, scenario], fingerprint.arrangement),
        topic: pattern.topic,
        question_type: pattern.question_type,
        difficulty: target,
        facets: vec![context.facet, constraint.facet, scenario.facet],
    }
}

fn render(pattern: &Pattern, fragments: [&Fragment; 3], arrangement: u8) -> String {
    let mut lead = String::new();
    let mut body = pattern.template.to_string();

    for slot in pattern.slot_order() {
        let fragment = match slot {
            Slot::Context => fragments[0],
            Slot::Constraint => fragments[1],
            Slot::Scenario => fragments[2],
        };
        if arrangement & slot.bit() != 0 {
            lead.push_str(lead_label(slot));
            lead.push_str(": ");
            lead.push_str(&capitalize(fragment.text));
            lead.push_str(". ");
            body = body.replacen(slot.placeholder(), back_reference(slot), 1);
        } else {
            body = body.replacen(slot.placeholder(), fragment.text, 1);
        }
    }

    lead.push_str(&body);
    lead
}

fn lead_label(slot: Slot) -> &'static str {
    match slot {
        Slot::Context => "Setting",
        Slot::Constraint => "Constraint",
        Slot::Scenario => "Situation",
    }
}

fn back_reference(slot: Slot) -> &'static str {
    match slot {
        Slot::Context => "this setting",
        Slot::Constraint => "this constraint",
        Slot::Scenario => "this situation",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn generic(library: &FragmentLibrary, target: u8) -> Composition {
    Composition {
        fingerprint: Fingerprint {
            pattern: 0,
            context: 0,
            constraint: 0,
            scenario: 0,
            arrangement: 0,
        },
        text: format!(
            "Describe a challenging {} problem you worked on recently and how you approached it.",
            library.discipline.label()
        ),
        topic: GENERIC_TOPIC,
        question_type: QuestionType::Behavioral,
        difficulty: target,
        facets: Vec::new(),
    }
}

fn pattern_weights(library: &FragmentLibrary, target: u8, ledger: &SessionLedger) -> Vec<f64> {
    let mean = mean_count(library.topics().into_iter().map(|t| ledger.topic_count(t)));
    let draws = ledger.total_questions();

    library
        .patterns
        .iter()
        .map(|pattern| {
            let count = ledger.topic_count(pattern.topic);
            let mut weight = diversity(count, mean) * difficulty_fit(pattern.difficulty, target);
            if draws >= OVER_COVERAGE_MIN_DRAWS
                && count as f64 > draws as f64 * OVER_COVERAGE_SHARE
            {
                weight *= OVER_COVERAGE_DAMPING;
            }
            weight
        })
        .collect()
}

fn fragment_weights(fragments: &[Fragment], target: u8, ledger: &SessionLedger) -> Vec<f64> {
    let mut facets: Vec<&str> = fragments.iter().map(|f| f.facet).collect();
    facets.sort_unstable();
    facets.dedup();
    let mean = mean_count(facets.iter().map(|f| ledger.facet_count(f)));

    fragments
        .iter()
        .map(|fragment| {
            diversity(ledger.facet_count(fragment.facet), mean)
                * difficulty_fit(fragment.difficulty, target)
        })
        .collect()
}

fn mean_count(counts: impl Iterator<Item = u32>) -> f64 {
    let (sum, n) = counts.fold((0u64, 0u64), |(sum, n), c| (sum + c as u64, n + 1));
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}

fn diversity(count: u32, mean: f64) -> f64 {
    ((mean + 1.0) / (count as f64 + 1.0)).clamp(MIN_DIVERSITY, MAX_DIVERSITY)
}

/// 3.0 for an exact match, falling linearly to 1.0 at the far end of the scale.
fn difficulty_fit(fragment: u8, target: u8) -> f64 {
    let span = (MAX_DIFFICULTY - MIN_DIFFICULTY) as f64;
    let distance = (fragment as f64 - target as f64).abs().min(span);
    1.0 + 2.0 * (1.0 - distance / span)
}

fn pick(weights: &[f64], rng: &mut QuestionRng) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => rng.next_index(weights.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::library;
    use crate::models::discipline::Discipline;
    use chrono::Utc;

    static EMPTY: FragmentLibrary = FragmentLibrary {
        discipline: Discipline::Civil,
        patterns: &[],
        contexts: &[],
        constraints: &[],
        scenarios: &[],
    };

    #[test]
    fn difficulty_fit_peaks_at_target() {
        assert_eq!(difficulty_fit(5, 5), 3.0);
        assert_eq!(difficulty_fit(1, 10), 1.0);
        assert!(difficulty_fit(6, 5) > difficulty_fit(8, 5));
    }

    #[test]
    fn diversity_is_clamped() {
        assert_eq!(diversity(0, 100.0), MAX_DIVERSITY);
        assert_eq!(diversity(100, 0.0), MIN_DIVERSITY);
        assert_eq!(diversity(2, 2.0), 1.0);
    }

    #[test]
    fn degenerate_weights_fall_back_to_uniform() {
        let mut rng = QuestionRng::new(3);
        let idx = pick(&[0.0, 0.0, 0.0], &mut rng);
        assert!(idx < 3);
    }

    #[test]
    fn composed_text_has_no_open_slots() {
        let ledger = SessionLedger::new(1, Utc::now());
        for discipline in Discipline::ALL {
            let lib = library(discipline);
            let mut rng = QuestionRng::new(11);
            for _ in 0..50 {
                let c = compose(lib, 5, &ledger, &mut rng);
                assert!(!c.text.contains('{'), "{}", c.text);
                assert_eq!(c.facets.len(), 3);
                assert_eq!(c.fingerprint.arrangement, 0);
            }
        }
    }

    #[test]
    fn arrangements_hoist_slots_into_lead_sentences() {
        let lib = library(Discipline::Software);
        let base = Fingerprint {
            pattern: 0,
            context: 0,
            constraint: 0,
            scenario: 0,
            arrangement: 0,
        };
        let inline = assemble(lib, base, 5);
        let hoisted = assemble(lib, base.with_arrangement(0b111), 5);
        let context_only = assemble(lib, base.with_arrangement(Slot::Context.bit()), 5);

        assert!(!inline.text.starts_with("Setting:"));
        assert!(hoisted.text.starts_with("Setting:"));
        assert!(hoisted.text.contains("Constraint: "));
        assert!(hoisted.text.contains("Situation: "));
        assert!(hoisted.text.contains("this setting"));
        assert!(context_only.text.contains("this setting"));
        assert!(!context_only.text.contains("this constraint"));

        let texts: std::collections::HashSet<_> = (0..ARRANGEMENTS)
            .map(|a| assemble(lib, base.with_arrangement(a), 5).text)
            .collect();
        assert_eq!(texts.len(), ARRANGEMENTS as usize);
    }

    #[test]
    fn empty_library_yields_generic_question() {
        let ledger = SessionLedger::new(1, Utc::now());
        let mut rng = QuestionRng::new(5);
        let c = compose(&EMPTY, 42, &ledger, &mut rng);
        assert_eq!(c.topic, GENERIC_TOPIC);
        assert_eq!(c.difficulty, MAX_DIFFICULTY);
        assert!(c.text.contains("Civil Engineering"));
    }

    #[test]
    fn over_covered_topic_is_damped() {
        let lib = library(Discipline::Software);
        let topic = lib.patterns[0].topic;
        let now = Utc::now();
        let mut ledger = SessionLedger::new(1, now);
        for _ in 0..6 {
            let c = assemble(
                lib,
                Fingerprint {
                    pattern: 0,
                    context: 0,
                    constraint: 0,
                    scenario: 0,
                    arrangement: 0,
                },
                5,
            );
            let question = crate::models::question::ComposedQuestion {
                id: "q".into(),
                text: c.text,
                domain: Discipline::Software,
                role: "Software Engineer".into(),
                difficulty: 5,
                topic: topic.into(),
                question_type: c.question_type,
                complexity: crate::models::question::Complexity::Advanced,
                estimated_time_minutes: 26,
                tags: vec![],
                prerequisites: vec![],
            };
            ledger.record(topic, &c.facets, question, now);
        }

        let weights = pattern_weights(lib, 5, &ledger);
        let over: f64 = lib
            .patterns
            .iter()
            .zip(&weights)
            .filter(|(p, _)| p.topic == topic)
            .map(|(_, w)| *w)
            .sum();
        let total: f64 = weights.iter().sum();
        assert!(over / total < 0.01, "share was {}", over / total);
    }
}
