//! wgpu render backend for the gallery demo.
//!
//! Renders the displaced vertex-colored floor, the textured exhibit
//! panels, and the prop stand-in, all under the scene's linear fog.
//! Camera is a first-person walk camera: mouse look, flat translation.
//!
//! # Invariants
//! - The renderer never mutates the scene description or the texture store.
//! - Camera motion comes from the movement integrator, not from here.

mod camera;
mod gpu;
mod shaders;

pub use camera::WalkCamera;
pub use gpu::WgpuRenderer;
