//! Roster validation using Validation.
//!
//! Every check runs, so a roster with several problems reports all of them in
//! one `BuildError` instead of one per attempt.

use crate::builder::error::RosterViolation;
use crate::core::StateKind;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a roster of kinds, given in registration order.
pub fn validate_roster<K: StateKind>(
    kinds: &[K],
    initial: Option<K>,
) -> Validation<(), NonEmptyVec<RosterViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<RosterViolation>>> = Vec::new();

    let mut seen: HashMap<K, usize> = HashMap::with_capacity(kinds.len());
    for (position, kind) in kinds.iter().enumerate() {
        let check = match seen.entry(*kind) {
            Entry::Occupied(entry) => Validation::fail(RosterViolation::DuplicateKind {
                kind: kind.name().to_string(),
                first: *entry.get(),
                duplicate: position,
            }),
            Entry::Vacant(entry) => {
                entry.insert(position);
                Validation::success(())
            }
        };
        checks.push(check);
    }

    if let Some(initial) = initial {
        let check = if seen.contains_key(&initial) {
            Validation::success(())
        } else {
            Validation::fail(RosterViolation::UnknownInitial {
                kind: initial.name().to_string(),
            })
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestKind {
        Menu,
        Playing,
        Paused,
    }

    impl StateKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Menu => "Menu",
                Self::Playing => "Playing",
                Self::Paused => "Paused",
            }
        }
    }

    #[test]
    fn distinct_roster_passes() {
        let kinds = [TestKind::Menu, TestKind::Playing, TestKind::Paused];
        assert!(validate_roster(&kinds, Some(TestKind::Menu)).is_success());
        assert!(validate_roster(&kinds, None).is_success());
    }

    #[test]
    fn empty_roster_passes_without_initial() {
        assert!(validate_roster::<TestKind>(&[], None).is_success());
    }

    #[test]
    fn duplicate_reports_both_positions() {
        let kinds = [TestKind::Menu, TestKind::Playing, TestKind::Menu];

        match validate_roster(&kinds, None) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| *e
                    == RosterViolation::DuplicateKind {
                        kind: "Menu".to_string(),
                        first: 0,
                        duplicate: 2,
                    }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let kinds = [
            TestKind::Menu,
            TestKind::Menu,
            TestKind::Playing,
            TestKind::Playing,
        ];

        match validate_roster(&kinds, Some(TestKind::Paused)) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let duplicates = errors
                    .iter()
                    .filter(|e| matches!(e, RosterViolation::DuplicateKind { .. }))
                    .count();
                let has_initial = errors
                    .iter()
                    .any(|e| matches!(e, RosterViolation::UnknownInitial { .. }));

                assert_eq!(duplicates, 2);
                assert!(has_initial);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn unregistered_initial_fails() {
        let kinds = [TestKind::Menu];
        let result = validate_roster(&kinds, Some(TestKind::Playing));
        assert!(result.is_failure());
    }
}
