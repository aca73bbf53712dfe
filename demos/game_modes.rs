//! Game Modes
//!
//! This demo drives a menu/playing/paused machine with a fixed tick.
//!
//! Key concepts:
//! - Closed-by-default gates: each state lists the modes it may leave for
//! - Lifecycle hooks on every transition
//! - A state requesting its own follow-up transition from `update`
//! - Refused requests are silent no-ops unless you look at the outcome
//!
//! Run with: RUST_LOG=debug cargo run --example game_modes

use std::time::Duration;
use tickstate::builder::StateMachineBuilder;
use tickstate::core::{MachineHandle, State, StateKind};
use tickstate::state_kind;
use tracing_subscriber::EnvFilter;

state_kind! {
    enum Mode {
        Menu,
        Playing,
        Paused,
        GameOver,
    }
}

struct Menu;

impl State<Mode> for Menu {
    fn kind(&self) -> Mode {
        Mode::Menu
    }

    fn is_valid_next_state(&self, candidate: Mode) -> bool {
        candidate == Mode::Playing
    }

    fn did_enter(&mut self, previous: Option<Mode>, _machine: &mut MachineHandle<'_, Mode>) {
        match previous {
            None => println!("  [menu] welcome"),
            Some(from) => println!("  [menu] back from {}", from.name()),
        }
    }
}

struct Playing {
    remaining: Duration,
}

impl State<Mode> for Playing {
    fn kind(&self) -> Mode {
        Mode::Playing
    }

    fn is_valid_next_state(&self, candidate: Mode) -> bool {
        matches!(candidate, Mode::Paused | Mode::GameOver)
    }

    fn update(&mut self, delta: Duration, machine: &mut MachineHandle<'_, Mode>) {
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            machine.request_enter(Mode::GameOver);
        }
    }

    fn did_enter(&mut self, previous: Option<Mode>, _machine: &mut MachineHandle<'_, Mode>) {
        if previous == Some(Mode::Menu) {
            self.remaining = Duration::from_millis(100);
        }
        println!("  [playing] {}ms left", self.remaining.as_millis());
    }

    fn will_exit(&mut self, next: Mode, _machine: &mut MachineHandle<'_, Mode>) {
        println!("  [playing] leaving for {}", next.name());
    }
}

struct Paused;

impl State<Mode> for Paused {
    fn kind(&self) -> Mode {
        Mode::Paused
    }

    fn is_valid_next_state(&self, candidate: Mode) -> bool {
        candidate == Mode::Playing
    }
}

struct GameOver;

impl State<Mode> for GameOver {
    fn kind(&self) -> Mode {
        Mode::GameOver
    }

    fn is_valid_next_state(&self, candidate: Mode) -> bool {
        candidate == Mode::Menu
    }

    fn did_enter(&mut self, _previous: Option<Mode>, _machine: &mut MachineHandle<'_, Mode>) {
        println!("  [game over]");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Game Modes ===\n");

    let mut machine = StateMachineBuilder::new()
        .state(Menu)
        .state(Playing {
            remaining: Duration::ZERO,
        })
        .state(Paused)
        .state(GameOver)
        .initial(Mode::Menu)
        .build()
        .unwrap();

    println!("\nStart playing:");
    machine.enter(Mode::Playing);

    println!("\nPause and try to quit to the menu:");
    machine.enter(Mode::Paused);
    let outcome = machine.enter(Mode::Menu);
    println!("  enter(Menu) -> {:?}", outcome);

    println!("\nResume and tick until time runs out:");
    machine.enter(Mode::Playing);
    let frame = Duration::from_millis(16);
    let mut frames = 0;
    while machine.current_kind() == Some(Mode::Playing) {
        machine.update(frame);
        frames += 1;
    }
    println!("  ran {} frames", frames);

    println!("\nBack to the menu:");
    machine.enter(Mode::Menu);

    println!("\n=== Demo Complete ===");
}
