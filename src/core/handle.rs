//! Machine access from inside state hooks.

use super::kind::StateKind;

/// View of the owning machine handed to every hook and tick.
///
/// States never hold a reference to their machine. Instead each hook gets a
/// handle that can read the roster and the current kind, and can ask the
/// machine to enter another state once the hook returns.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tickstate::core::{MachineHandle, State};
/// use tickstate::state_kind;
///
/// state_kind! {
///     enum Mode {
///         Splash,
///         Menu,
///     }
/// }
///
/// struct Splash {
///     remaining: Duration,
/// }
///
/// impl State<Mode> for Splash {
///     fn kind(&self) -> Mode {
///         Mode::Splash
///     }
///
///     fn is_valid_next_state(&self, candidate: Mode) -> bool {
///         candidate == Mode::Menu
///     }
///
///     fn update(&mut self, delta: Duration, machine: &mut MachineHandle<'_, Mode>) {
///         self.remaining = self.remaining.saturating_sub(delta);
///         if self.remaining.is_zero() {
///             machine.request_enter(Mode::Menu);
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub struct MachineHandle<'a, K: StateKind> {
    current: Option<K>,
    kinds: &'a [K],
    requested: &'a mut Option<K>,
}

impl<'a, K: StateKind> MachineHandle<'a, K> {
    pub(crate) fn new(current: Option<K>, kinds: &'a [K], requested: &'a mut Option<K>) -> Self {
        Self {
            current,
            kinds,
            requested,
        }
    }

    /// Kind the machine considers current while this hook runs.
    ///
    /// `None` during the very first `did_enter`, the departing kind during
    /// `will_exit`, and the arriving kind during any later `did_enter`.
    pub fn current_kind(&self) -> Option<K> {
        self.current
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> &[K] {
        self.kinds
    }

    pub fn is_registered(&self, kind: K) -> bool {
        self.kinds.contains(&kind)
    }

    /// Ask the machine to enter `kind` after the current hook returns.
    ///
    /// The request goes through the normal validity gate. Only one request is
    /// held; calling this again replaces the earlier request.
    pub fn request_enter(&mut self, kind: K) {
        if let Some(previous) = self.requested.replace(kind) {
            tracing::debug!(
                replaced = previous.name(),
                requested = kind.name(),
                "Replacing pending transition request"
            );
        }
    }

    /// Pending request, if any.
    pub fn requested(&self) -> Option<K> {
        *self.requested
    }
}
