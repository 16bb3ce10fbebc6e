//! Movement simulation: the per-frame velocity integrator and frame clock.
//!
//! # Invariants
//! - The `Mover` exclusively owns its velocity between calls.
//! - `step` is a pure, bounded-time computation; one call per rendered frame.
//! - Non-finite or negative frame deltas are rejected, never integrated.

pub mod clock;
pub mod mover;

pub use clock::FrameClock;
pub use mover::{Mover, MoverConfig, StepError, StepOutput};
