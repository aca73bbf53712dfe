//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder, roster validation and the
//! `state_kind!` macro for declaring kinds with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod validation;

pub use error::{BuildError, RosterViolation};
pub use machine::StateMachineBuilder;
pub use validation::validate_roster;
