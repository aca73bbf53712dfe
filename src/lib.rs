//! Tickstate: a small tick-driven finite state machine runtime
//!
//! A machine holds a fixed roster of mutually exclusive states. The host calls
//! `update` once per tick, which is forwarded to the current state, and calls
//! `enter` whenever it wants to change mode. Each state decides which modes it
//! may be left for; the gate is closed unless a state opts into an edge.
//!
//! # Core Concepts
//!
//! - **Kind**: Copyable tag naming a behaviour, via the `StateKind` trait
//! - **State**: One mode's tick and lifecycle hooks, via the `State` trait
//! - **StateMachine**: Registry, current pointer and transition engine
//! - **EnterOutcome**: What an `enter` request did, free to ignore
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tickstate::builder::StateMachineBuilder;
//! use tickstate::core::{MachineHandle, State};
//! use tickstate::state_kind;
//!
//! state_kind! {
//!     enum Mode {
//!         Menu,
//!         Playing,
//!         Paused,
//!     }
//! }
//!
//! struct Menu;
//!
//! impl State<Mode> for Menu {
//!     fn kind(&self) -> Mode {
//!         Mode::Menu
//!     }
//!
//!     fn is_valid_next_state(&self, candidate: Mode) -> bool {
//!         candidate == Mode::Playing
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Playing {
//!     elapsed: Duration,
//! }
//!
//! impl State<Mode> for Playing {
//!     fn kind(&self) -> Mode {
//!         Mode::Playing
//!     }
//!
//!     fn is_valid_next_state(&self, candidate: Mode) -> bool {
//!         matches!(candidate, Mode::Paused | Mode::Menu)
//!     }
//!
//!     fn update(&mut self, delta: Duration, _machine: &mut MachineHandle<'_, Mode>) {
//!         self.elapsed += delta;
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .state(Menu)
//!     .state(Playing::default())
//!     .initial(Mode::Menu)
//!     .build()
//!     .unwrap();
//!
//! machine.enter(Mode::Playing);
//! machine.update(Duration::from_millis(16));
//!
//! // Paused is not registered, so the request is a no-op.
//! assert!(!machine.enter(Mode::Paused).is_entered());
//! assert_eq!(machine.current_kind(), Some(Mode::Playing));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use config::MachineConfig;
pub use crate::core::{CurrentState, EnterOutcome, MachineHandle, State, StateKind};
pub use machine::StateMachine;
