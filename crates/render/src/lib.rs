//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers cannot mutate the scene; they consume its description.
//! - Render state derives from the gallery and the viewer's pose.
//!
//! The debug text backend keeps the seam honest: the CLI renders the same
//! scene description the wgpu backend draws, without a GPU.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "promenade-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
