//! State machine runtime.
//!
//! Owns the registered states, tracks which one is current, gates and performs
//! transitions, and forwards ticks to the current state.

mod engine;
mod registry;

pub use engine::StateMachine;
