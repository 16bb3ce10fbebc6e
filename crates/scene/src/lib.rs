//! The gallery scene: hard-coded panel layout, deterministic displaced
//! floor, atmosphere parameters, and the ground support probe.
//!
//! # Invariants
//! - The scene is assembled once at startup and never mutated.
//! - Floor generation is deterministic: one seed, one mesh.
//! - The renderer consumes this description; it never reaches back in.

pub mod floor;
pub mod gallery;
pub mod probe;

pub use floor::FloorMesh;
pub use gallery::{Atmosphere, Gallery, Panel, Prop};
pub use probe::GroundProbe;

pub fn crate_info() -> &'static str {
    "promenade-scene v0.1.0"
}
