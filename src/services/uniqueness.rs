use tracing::warn;

use crate::fragments::FragmentLibrary;
use crate::models::session::SessionLedger;
use crate::services::composer::{self, Composition, ARRANGEMENTS};
use crate::utils::rng::QuestionRng;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 32;

#[derive(Debug, Clone)]
pub struct GuardOutcome {
    pub composition: Composition,
    /// Fresh draws made, including the accepted one.
    pub attempts: u32,
    /// At least one draw hit an already-issued fingerprint.
    pub collided: bool,
    /// Every arrangement of the last candidate was already issued.
    pub duplicate: bool,
}

/// Bounded resampling over a session ledger, followed by a walk over clause
/// arrangements of the last candidate.
#[derive(Debug, Clone, Copy)]
pub struct UniquenessGuard {
    max_attempts: u32,
}

impl Default for UniquenessGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl UniquenessGuard {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Produces a composition whose fingerprint the ledger has not issued
    /// yet and claims it. The draw stream is keyed on the ledger's seed and
    /// draw count, so a replayed session sees the same candidates.
    pub fn draw(&self, library: &FragmentLibrary, target: u8, ledger: &mut SessionLedger) -> GuardOutcome {
        let draw_index = ledger.total_questions();
        let mut last: Option<Composition> = None;

        for attempt in 0..self.max_attempts {
            let mut rng = QuestionRng::for_draw(ledger.seed(), draw_index, attempt);
            let composition = composer::compose(library, target, ledger, &mut rng);
            if ledger.claim(composition.fingerprint) {
                return GuardOutcome {
                    composition,
                    attempts: attempt + 1,
                    collided: attempt > 0,
                    duplicate: false,
                };
            }
            last = Some(composition);
        }

        let last = match last {
            Some(composition) => composition,
            None => {
                let mut rng = QuestionRng::for_draw(ledger.seed(), draw_index, 0);
                composer::compose(library, target, ledger, &mut rng)
            }
        };

        for arrangement in 1..ARRANGEMENTS {
            let fingerprint = last.fingerprint.with_arrangement(arrangement);
            if ledger.claim(fingerprint) {
                return GuardOutcome {
                    composition: composer::assemble(library, fingerprint, last.difficulty),
                    attempts: self.max_attempts,
                    collided: true,
                    duplicate: false,
                };
            }
        }

        warn!(
            discipline = %library.discipline,
            topic = last.topic,
            draws = draw_index,
            "every arrangement of the candidate was already issued, returning a duplicate"
        );
        GuardOutcome {
            composition: last,
            attempts: self.max_attempts,
            collided: true,
            duplicate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::{library, Fragment, Pattern};
    use crate::models::discipline::Discipline;
    use crate::models::question::{ComposedQuestion, Complexity, QuestionType};
    use chrono::Utc;
    use std::collections::HashSet;

    static SINGLE: FragmentLibrary = FragmentLibrary {
        discipline: Discipline::Mechanical,
        patterns: &[Pattern::new(
            "Thermal",
            QuestionType::Design,
            5,
            "How would you cool {context} under {constraint} during {scenario}?",
        )],
        contexts: &[Fragment::new("Automotive", 5, "an engine bay")],
        constraints: &[Fragment::new("Cost", 5, "a tight budget")],
        scenarios: &[Fragment::new("Weather", 5, "a desert heatwave")],
    };

    fn record(ledger: &mut SessionLedger, outcome: &GuardOutcome) {
        let c = &outcome.composition;
        let question = ComposedQuestion {
            id: "q".into(),
            text: c.text.clone(),
            domain: Discipline::Mechanical,
            role: "Mechanical Engineer".into(),
            difficulty: c.difficulty,
            topic: c.topic.into(),
            question_type: c.question_type,
            complexity: Complexity::from_difficulty(c.difficulty),
            estimated_time_minutes: 39,
            tags: vec![],
            prerequisites: vec![],
        };
        ledger.record(c.topic, &c.facets, question, Utc::now());
    }

    #[test]
    fn exhaustion_walks_arrangements_then_degrades() {
        let guard = UniquenessGuard::new(4);
        let mut ledger = SessionLedger::new(9, Utc::now());
        let mut texts = HashSet::new();

        for _ in 0..ARRANGEMENTS {
            let outcome = guard.draw(&SINGLE, 5, &mut ledger);
            assert!(!outcome.duplicate);
            assert!(texts.insert(outcome.composition.text.clone()));
            record(&mut ledger, &outcome);
        }

        let outcome = guard.draw(&SINGLE, 5, &mut ledger);
        assert!(outcome.duplicate);
        assert!(outcome.collided);
        assert_eq!(ledger.question_count(), ARRANGEMENTS as usize);
    }

    #[test]
    fn first_draw_never_collides() {
        let guard = UniquenessGuard::default();
        let mut ledger = SessionLedger::new(1, Utc::now());
        let outcome = guard.draw(library(Discipline::Software), 5, &mut ledger);
        assert_eq!(outcome.attempts, 1);
        assert!(!outcome.collided);
        assert_eq!(ledger.question_count(), 1);
    }

    #[test]
    fn zero_attempts_is_raised_to_one() {
        assert_eq!(UniquenessGuard::new(0).max_attempts(), 1);
    }
}
