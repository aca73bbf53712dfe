//! Build errors for state machines.

use thiserror::Error;

/// A single problem found in a state roster.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterViolation {
    #[error("Kind '{kind}' registered more than once (positions {first} and {duplicate})")]
    DuplicateKind {
        kind: String,
        first: usize,
        duplicate: usize,
    },

    #[error("Initial kind '{kind}' is not registered")]
    UnknownInitial { kind: String },
}

/// Errors that can occur when building state machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid state roster: {}", describe(.0))]
    InvalidRoster(Vec<RosterViolation>),
}

impl BuildError {
    /// All roster violations behind this error.
    pub fn violations(&self) -> &[RosterViolation] {
        match self {
            Self::InvalidRoster(violations) => violations,
        }
    }
}

fn describe(violations: &[RosterViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_every_violation() {
        let error = BuildError::InvalidRoster(vec![
            RosterViolation::DuplicateKind {
                kind: "Menu".to_string(),
                first: 0,
                duplicate: 2,
            },
            RosterViolation::UnknownInitial {
                kind: "Credits".to_string(),
            },
        ]);

        assert_eq!(
            error.to_string(),
            "Invalid state roster: Kind 'Menu' registered more than once (positions 0 and 2); \
             Initial kind 'Credits' is not registered"
        );
        assert_eq!(error.violations().len(), 2);
    }
}
