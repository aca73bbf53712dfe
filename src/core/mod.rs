//! Core state machine types.
//!
//! This module contains the pieces a state behaviour is written against:
//! - Kind tags via the `StateKind` trait
//! - Per-mode behaviour via the `State` trait
//! - `CurrentState`, the explicit "nothing entered yet" form
//! - `MachineHandle`, the machine view passed into hooks
//! - `EnterOutcome`, the result of a transition request

mod current;
mod handle;
mod kind;
mod outcome;
mod state;

pub use current::CurrentState;
pub use handle::MachineHandle;
pub use kind::StateKind;
pub use outcome::EnterOutcome;
pub use state::State;
