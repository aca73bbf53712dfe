//! Result of a transition request.

use super::kind::StateKind;
use serde::{Deserialize, Serialize};

/// What happened when the machine was asked to enter a kind.
///
/// Refused transitions are not errors: the machine is left untouched and the
/// caller is free to ignore the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum EnterOutcome<K: StateKind> {
    /// The machine moved to `to`; `from` is `None` on the first transition
    Entered { from: Option<K>, to: K },

    /// The current state's gate refused the candidate
    Rejected { from: K, to: K },

    /// No registered state has this kind
    UnknownKind(K),
}

impl<K: StateKind> EnterOutcome<K> {
    pub fn is_entered(&self) -> bool {
        matches!(self, Self::Entered { .. })
    }

    /// Kind that was requested.
    pub fn target(&self) -> K {
        match *self {
            Self::Entered { to, .. } | Self::Rejected { to, .. } => to,
            Self::UnknownKind(kind) => kind,
        }
    }
}
