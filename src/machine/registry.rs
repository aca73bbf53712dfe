//! Ordered, kind-indexed storage for a machine's states.

use crate::core::{State, StateKind};
use std::collections::HashMap;

/// Fixed roster of states.
///
/// Kinds are read once on construction and kept alongside the states, so
/// lookups never call back into state code. Positions are stable for the
/// lifetime of the registry.
pub(crate) struct Registry<K: StateKind> {
    kinds: Vec<K>,
    states: Vec<Box<dyn State<K>>>,
    index: HashMap<K, usize>,
}

impl<K: StateKind> Registry<K> {
    /// Build from states in registration order.
    ///
    /// If a kind repeats, lookups resolve to its first position. Callers
    /// validate the roster first, so this only matters inside the crate.
    pub(crate) fn new(states: Vec<Box<dyn State<K>>>) -> Self {
        let kinds: Vec<K> = states.iter().map(|state| state.kind()).collect();
        let mut index = HashMap::with_capacity(kinds.len());
        for (position, kind) in kinds.iter().enumerate() {
            index.entry(*kind).or_insert(position);
        }

        Self {
            kinds,
            states,
            index,
        }
    }

    pub(crate) fn position(&self, kind: K) -> Option<usize> {
        self.index.get(&kind).copied()
    }

    pub(crate) fn kind_at(&self, position: usize) -> K {
        self.kinds[position]
    }

    pub(crate) fn kinds(&self) -> &[K] {
        &self.kinds
    }

    pub(crate) fn get(&self, position: usize) -> &dyn State<K> {
        self.states[position].as_ref()
    }

    /// Mutable access to one state together with the roster of kinds.
    pub(crate) fn split_mut(&mut self, position: usize) -> (&mut dyn State<K>, &[K]) {
        (self.states[position].as_mut(), &self.kinds)
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestKind {
        Idle,
        Playing,
        Paused,
    }

    impl StateKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Playing => "Playing",
                Self::Paused => "Paused",
            }
        }
    }

    struct Tagged(TestKind);

    impl State<TestKind> for Tagged {
        fn kind(&self) -> TestKind {
            self.0
        }
    }

    fn registry(kinds: &[TestKind]) -> Registry<TestKind> {
        Registry::new(
            kinds
                .iter()
                .map(|kind| Box::new(Tagged(*kind)) as Box<dyn State<TestKind>>)
                .collect(),
        )
    }

    #[test]
    fn positions_follow_registration_order() {
        let registry = registry(&[TestKind::Paused, TestKind::Idle]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.position(TestKind::Paused), Some(0));
        assert_eq!(registry.position(TestKind::Idle), Some(1));
        assert_eq!(registry.position(TestKind::Playing), None);
        assert_eq!(registry.kinds(), &[TestKind::Paused, TestKind::Idle]);
        assert_eq!(registry.kind_at(1), TestKind::Idle);
    }

    #[test]
    fn repeated_kind_resolves_to_first_position() {
        let registry = registry(&[TestKind::Idle, TestKind::Playing, TestKind::Idle]);
        assert_eq!(registry.position(TestKind::Idle), Some(0));
    }

    #[test]
    fn get_returns_registered_state() {
        let mut registry = registry(&[TestKind::Idle, TestKind::Playing]);

        assert_eq!(registry.get(1).kind(), TestKind::Playing);

        let (state, kinds) = registry.split_mut(0);
        assert_eq!(state.kind(), TestKind::Idle);
        assert_eq!(kinds.len(), 2);
    }
}
