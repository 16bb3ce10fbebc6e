use glam::Vec3;
use promenade_scene::Gallery;

/// Viewer pose and projection for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Look yaw in radians.
    pub yaw: f32,
    /// Look pitch in radians.
    pub pitch: f32,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            fov_degrees: 75.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the gallery description and a view, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the gallery from the given view.
    fn render(&self, gallery: &Gallery, view: &RenderView) -> Self::Output;
}

/// Debug text renderer, the GPU-free backend.
///
/// Produces a human-readable description of the scene and viewer. Used by
/// the CLI and by tests that exercise the render seam headlessly.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, gallery: &Gallery, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Gallery (panels={}, floor_seed={}) ===\n",
            gallery.panels.len(),
            gallery.floor_seed
        ));
        out.push_str(&format!(
            "Viewer: eye=({:.1}, {:.1}, {:.1}) yaw={:.2} pitch={:.2} fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.yaw, view.pitch, view.fov_degrees
        ));
        out.push_str(&format!(
            "Fog: near={:.0} far={:.0}\n",
            gallery.atmosphere.fog_near, gallery.atmosphere.fog_far
        ));

        for panel in &gallery.panels {
            out.push_str(&format!(
                "  [{}] {}x{} at ({:.0}, {:.0}, {:.0})\n",
                panel.texture,
                panel.width,
                panel.height,
                panel.position.x,
                panel.position.y,
                panel.position.z
            ));
        }

        let p = &gallery.prop;
        out.push_str(&format!(
            "  prop [{}] at ({:.0}, {:.0}, {:.0}) yaw={:.2}\n",
            p.name,
            p.placement.position.x,
            p.placement.position.y,
            p.placement.position.z,
            p.placement.yaw
        ));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_lists_every_panel() {
        let gallery = Gallery::build();
        let output = DebugTextRenderer::new().render(&gallery, &RenderView::default());

        assert!(output.contains("panels=11"));
        for panel in &gallery.panels {
            assert!(output.contains(&panel.texture));
        }
        assert!(output.contains("prop [pc]"));
    }

    #[test]
    fn render_view_default_matches_spawn() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 75.0);
        assert_eq!(view.eye.y, 10.0);
    }
}
