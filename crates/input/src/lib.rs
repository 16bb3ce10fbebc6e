//! Viewer input: movement flags set by the windowing layer, read once per
//! frame by the movement integrator.
//!
//! # Invariants
//! - The integrator consumes commands, never raw key events.
//! - The jump request is one-shot: observed exactly once via `take_jump`.

pub mod state;

pub use state::{Command, InputState};

pub fn crate_info() -> &'static str {
    "promenade-input v0.1.0"
}
