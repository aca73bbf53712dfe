//! The current state of a machine, including the "nothing entered yet" case.

use super::kind::StateKind;
use super::state::State;
use std::fmt;

/// What a machine currently considers active.
///
/// `Unset` stands in for the machine before its first transition. It ticks as a
/// no-op and accepts every candidate, which is why the first `enter` of a
/// registered kind always succeeds.
pub enum CurrentState<'a, K: StateKind> {
    /// No state has been entered yet
    Unset,

    /// A registered state is current
    Active(&'a dyn State<K>),
}

impl<'a, K: StateKind> CurrentState<'a, K> {
    /// Whether a transition to `candidate` would pass the current gate.
    pub fn is_valid_next_state(&self, candidate: K) -> bool {
        match self {
            Self::Unset => true,
            Self::Active(state) => state.is_valid_next_state(candidate),
        }
    }

    pub fn kind(&self) -> Option<K> {
        match self {
            Self::Unset => None,
            Self::Active(state) => Some(state.kind()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_state(&self) -> Option<&'a dyn State<K>> {
        match self {
            Self::Unset => None,
            Self::Active(state) => Some(*state),
        }
    }
}

impl<K: StateKind> fmt::Debug for CurrentState<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Active(state) => f.debug_tuple("Active").field(&state.kind()).finish(),
        }
    }
}
