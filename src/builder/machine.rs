//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{State, StateKind};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<K: StateKind> {
    states: Vec<Box<dyn State<K>>>,
    config: MachineConfig<K>,
}

impl<K: StateKind> StateMachineBuilder<K> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Register a state. Registration order is kept.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<K> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Register an already boxed state.
    pub fn boxed(mut self, state: Box<dyn State<K>>) -> Self {
        self.states.push(state);
        self
    }

    /// Register multiple boxed states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn State<K>>>,
    {
        self.states.extend(states);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig<K>) -> Self {
        self.config = config;
        self
    }

    /// Enter this kind as soon as the machine is built.
    pub fn initial(mut self, kind: K) -> Self {
        self.config.initial = Some(kind);
        self
    }

    pub fn max_chained_transitions(mut self, limit: usize) -> Self {
        self.config.max_chained_transitions = limit;
        self
    }

    /// Build the state machine.
    /// Returns an error listing every roster problem found.
    pub fn build(self) -> Result<StateMachine<K>, BuildError> {
        StateMachine::with_config(self.states, self.config)
    }
}

impl<K: StateKind> Default for StateMachineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
