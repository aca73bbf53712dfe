//! State machine that validates and performs transitions.

use crate::builder::error::BuildError;
use crate::builder::validation::validate_roster;
use crate::config::MachineConfig;
use crate::core::{CurrentState, EnterOutcome, MachineHandle, State, StateKind};
use crate::machine::registry::Registry;
use std::fmt;
use std::time::Duration;
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

/// Finite state machine over a fixed roster of states.
///
/// The machine starts with no current state. The first `enter` of any
/// registered kind always succeeds; after that the current state's
/// [`is_valid_next_state`](State::is_valid_next_state) decides every move.
///
/// Transitions run in a fixed order: validate, locate, `will_exit` on the old
/// state, switch, `did_enter` on the new state. Refused requests leave the
/// machine untouched and fire no hooks.
///
/// The machine is single-threaded. It is neither `Send` nor `Sync`, so sharing
/// it between threads needs an owner that serialises every call.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{EnterOutcome, State};
/// use tickstate::machine::StateMachine;
/// use tickstate::state_kind;
///
/// state_kind! {
///     enum Mode {
///         Menu,
///         Playing,
///     }
/// }
///
/// struct Menu;
/// struct Playing;
///
/// impl State<Mode> for Menu {
///     fn kind(&self) -> Mode {
///         Mode::Menu
///     }
///
///     fn is_valid_next_state(&self, candidate: Mode) -> bool {
///         candidate == Mode::Playing
///     }
/// }
///
/// impl State<Mode> for Playing {
///     fn kind(&self) -> Mode {
///         Mode::Playing
///     }
/// }
///
/// let states: Vec<Box<dyn State<Mode>>> = vec![Box::new(Menu), Box::new(Playing)];
/// let mut machine = StateMachine::new(states).unwrap();
/// assert!(machine.can_enter_state(Mode::Playing));
///
/// machine.enter(Mode::Menu);
/// machine.enter(Mode::Playing);
/// assert_eq!(machine.current_kind(), Some(Mode::Playing));
///
/// // Playing opts into no edges, so it can never be left.
/// assert_eq!(
///     machine.enter(Mode::Menu),
///     EnterOutcome::Rejected { from: Mode::Playing, to: Mode::Menu }
/// );
/// ```
pub struct StateMachine<K: StateKind> {
    registry: Registry<K>,
    current: Option<usize>,
    requested: Option<K>,
    config: MachineConfig<K>,
}

impl<K: StateKind> StateMachine<K> {
    /// Create a machine with the default configuration.
    pub fn new(states: Vec<Box<dyn State<K>>>) -> Result<Self, BuildError> {
        Self::with_config(states, MachineConfig::default())
    }

    /// Create a machine, entering `config.initial` if one is set.
    ///
    /// Fails if a kind is registered twice or the initial kind is missing.
    pub fn with_config(
        states: Vec<Box<dyn State<K>>>,
        config: MachineConfig<K>,
    ) -> Result<Self, BuildError> {
        let registry = Registry::new(states);

        if let Validation::Failure(errors) = validate_roster(registry.kinds(), config.initial) {
            return Err(BuildError::InvalidRoster(errors.iter().cloned().collect()));
        }

        let initial = config.initial;
        let mut machine = Self {
            registry,
            current: None,
            requested: None,
            config,
        };
        debug!(states = machine.registry.len(), "Created state machine");

        if let Some(initial) = initial {
            machine.enter(initial);
        }

        Ok(machine)
    }

    /// Current state, or `Unset` before the first transition.
    pub fn current_state(&self) -> CurrentState<'_, K> {
        match self.current {
            None => CurrentState::Unset,
            Some(position) => CurrentState::Active(self.registry.get(position)),
        }
    }

    pub fn current_kind(&self) -> Option<K> {
        self.current.map(|position| self.registry.kind_at(position))
    }

    /// Whether the current gate would accept `kind`.
    ///
    /// This only asks the gate. Before the first transition it is `true` for
    /// every kind, registered or not.
    pub fn can_enter_state(&self, kind: K) -> bool {
        self.current_state().is_valid_next_state(kind)
    }

    pub fn contains(&self, kind: K) -> bool {
        self.registry.position(kind).is_some()
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> &[K] {
        self.registry.kinds()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Registered state of the given kind.
    pub fn state(&self, kind: K) -> Option<&dyn State<K>> {
        self.registry
            .position(kind)
            .map(|position| self.registry.get(position))
    }

    pub fn config(&self) -> &MachineConfig<K> {
        &self.config
    }

    /// Tick the current state. Does nothing before the first transition.
    pub fn update(&mut self, delta: Duration) {
        let Some(position) = self.current else {
            trace!("Update with no current state");
            return;
        };

        let kind = self.registry.kind_at(position);
        trace!(state = kind.name(), ?delta, "Updating state");
        {
            let (state, kinds) = self.registry.split_mut(position);
            let mut handle = MachineHandle::new(Some(kind), kinds, &mut self.requested);
            state.update(delta, &mut handle);
        }

        self.follow_requests();
    }

    /// Try to make `kind` the current state.
    ///
    /// The outcome reports what happened; a refused request is not an error
    /// and can be ignored. Transitions requested by hooks along the way are
    /// followed before this returns.
    pub fn enter(&mut self, kind: K) -> EnterOutcome<K> {
        let outcome = self.transition(kind);
        self.follow_requests();
        outcome
    }

    fn transition(&mut self, target: K) -> EnterOutcome<K> {
        match self.current {
            None => self.enter_first(target),
            Some(position) => self.enter_next(position, target),
        }
    }

    fn enter_first(&mut self, target: K) -> EnterOutcome<K> {
        let Some(next) = self.registry.position(target) else {
            debug!(to = target.name(), "Ignoring unknown kind");
            return EnterOutcome::UnknownKind(target);
        };

        {
            let (state, kinds) = self.registry.split_mut(next);
            let mut handle = MachineHandle::new(None, kinds, &mut self.requested);
            state.did_enter(None, &mut handle);
        }
        self.current = Some(next);

        debug!(to = target.name(), "Entered initial state");
        EnterOutcome::Entered {
            from: None,
            to: target,
        }
    }

    fn enter_next(&mut self, current: usize, target: K) -> EnterOutcome<K> {
        let from = self.registry.kind_at(current);

        if !self.registry.get(current).is_valid_next_state(target) {
            debug!(
                from = from.name(),
                to = target.name(),
                "Transition rejected by current state"
            );
            return EnterOutcome::Rejected { from, to: target };
        }

        let Some(next) = self.registry.position(target) else {
            warn!(
                from = from.name(),
                to = target.name(),
                "Current state accepts a kind that is not registered"
            );
            return EnterOutcome::UnknownKind(target);
        };

        {
            let (state, kinds) = self.registry.split_mut(current);
            let mut handle = MachineHandle::new(Some(from), kinds, &mut self.requested);
            state.will_exit(target, &mut handle);
        }

        self.current = Some(next);

        {
            let (state, kinds) = self.registry.split_mut(next);
            let mut handle = MachineHandle::new(Some(target), kinds, &mut self.requested);
            state.did_enter(Some(from), &mut handle);
        }

        debug!(from = from.name(), to = target.name(), "Entered state");
        EnterOutcome::Entered {
            from: Some(from),
            to: target,
        }
    }

    fn follow_requests(&mut self) {
        let limit = self.config.max_chained_transitions;
        let mut followed = 0;

        while let Some(kind) = self.requested.take() {
            if followed >= limit {
                warn!(
                    requested = kind.name(),
                    limit, "Dropping requested transition, chain limit reached"
                );
                break;
            }
            followed += 1;

            let outcome = self.transition(kind);
            debug!(?outcome, "Followed requested transition");
        }
    }
}

impl<K: StateKind> fmt::Debug for StateMachine<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("kinds", &self.registry.kinds())
            .field("current", &self.current_kind())
            .field("config", &self.config)
            .finish()
    }
}
