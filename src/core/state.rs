//! The State trait implemented by each mode of operation.

use super::handle::MachineHandle;
use super::kind::StateKind;
use std::time::Duration;

/// One mode of operation driven by a [`StateMachine`](crate::machine::StateMachine).
///
/// Every hook has a default that does nothing. The transition gate is closed by
/// default: a state that does not override [`is_valid_next_state`] can never be
/// left once entered, so each outgoing edge has to be opted into.
///
/// [`is_valid_next_state`]: State::is_valid_next_state
///
/// # Example
///
/// ```rust
/// use tickstate::core::{MachineHandle, State};
/// use tickstate::state_kind;
///
/// state_kind! {
///     enum Mode {
///         Playing,
///         Paused,
///     }
/// }
///
/// struct Playing {
///     score: u32,
/// }
///
/// impl State<Mode> for Playing {
///     fn kind(&self) -> Mode {
///         Mode::Playing
///     }
///
///     fn is_valid_next_state(&self, candidate: Mode) -> bool {
///         candidate == Mode::Paused
///     }
///
///     fn did_enter(&mut self, previous: Option<Mode>, _machine: &mut MachineHandle<'_, Mode>) {
///         if previous.is_none() {
///             self.score = 0;
///         }
///     }
/// }
///
/// let playing = Playing { score: 10 };
/// assert!(playing.is_valid_next_state(Mode::Paused));
/// assert!(!playing.is_valid_next_state(Mode::Playing));
/// ```
pub trait State<K: StateKind> {
    /// Kind tag of this behaviour.
    ///
    /// Read once when the state is registered.
    fn kind(&self) -> K;

    /// Advance this mode by `delta` of elapsed time.
    fn update(&mut self, _delta: Duration, _machine: &mut MachineHandle<'_, K>) {}

    /// Whether leaving this state for `candidate` is allowed.
    ///
    /// Default implementation returns `false` for every candidate.
    fn is_valid_next_state(&self, _candidate: K) -> bool {
        false
    }

    /// Called after this state became current.
    ///
    /// `previous` is `None` exactly on the machine's first transition.
    fn did_enter(&mut self, _previous: Option<K>, _machine: &mut MachineHandle<'_, K>) {}

    /// Called on the departing state before the machine switches to `next`.
    fn will_exit(&mut self, _next: K, _machine: &mut MachineHandle<'_, K>) {}
}
