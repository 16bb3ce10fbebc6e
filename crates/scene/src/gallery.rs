use glam::Vec3;
use promenade_common::{Aabb, Placement};
use serde::{Deserialize, Serialize};

/// Linear RGB triple.
pub type Rgb = [f32; 3];

/// Convert an 0xRRGGBB color to linear RGB components.
fn rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// A textured exhibit panel: a thin, double-sided quad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    /// Texture file name, resolved against the textures directory.
    pub texture: String,
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
}

impl Panel {
    fn new(texture: &str, width: f32, height: f32, position: Vec3) -> Self {
        Self {
            texture: texture.to_string(),
            width,
            height,
            position,
        }
    }

    /// Conservative bounds for support-ray tests. Panels face ±Z, so the
    /// depth extent is a thin slab.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(
            self.position,
            Vec3::new(self.width * 0.5, self.height * 0.5, 0.5),
        )
    }
}

/// The gallery's one prop model.
///
/// The art drop ships this as a glTF binary; vertex import is stubbed, so
/// the renderer draws a stand-in box at the model's placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,
    pub placement: Placement,
}

impl Prop {
    /// World-space bounds of the stand-in unit box under this placement.
    /// Exact for yaw-only rotation.
    pub fn bounds(&self) -> Aabb {
        let h = self.placement.scale * 0.5;
        let (sin, cos) = (self.placement.yaw.sin().abs(), self.placement.yaw.cos().abs());
        let half = Vec3::new(cos * h.x + sin * h.z, h.y, sin * h.x + cos * h.z);
        Aabb::from_center_half_extents(self.placement.position, half)
    }
}

/// Background, fog, and hemisphere light parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atmosphere {
    pub background: Rgb,
    pub fog_color: Rgb,
    pub fog_near: f32,
    pub fog_far: f32,
    pub sky_color: Rgb,
    pub ground_color: Rgb,
    pub light_intensity: f32,
    pub light_direction: Vec3,
}

/// The complete scene description consumed by renderers and the probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    pub panels: Vec<Panel>,
    pub prop: Prop,
    pub atmosphere: Atmosphere,
    /// World-space eye height of a standing viewer; doubles as the floor
    /// clamp height in the movement config.
    pub eye_height: f32,
    /// Seed for the displaced floor mesh.
    pub floor_seed: u64,
}

impl Gallery {
    /// Assemble the fixed gallery layout.
    pub fn build() -> Self {
        let panels = vec![
            Panel::new("app.png", 20.0, 20.0, Vec3::new(0.0, 50.0, -40.0)),
            Panel::new("appp.png", 20.0, 20.0, Vec3::new(0.0, 50.0, -41.0)),
            Panel::new("bo.png", 30.0, 30.0, Vec3::new(-50.0, 40.0, -65.0)),
            Panel::new("derekh.png", 30.0, 30.0, Vec3::new(-50.0, 40.0, -66.0)),
            Panel::new("me.png", 35.0, 35.0, Vec3::new(50.0, 60.0, -70.0)),
            Panel::new("meme.png", 35.0, 35.0, Vec3::new(50.0, 60.0, -71.0)),
            Panel::new("tt.png", 40.0, 40.0, Vec3::new(-65.0, 90.0, -90.0)),
            Panel::new("ttc.png", 40.0, 40.0, Vec3::new(-65.0, 90.0, -91.0)),
            Panel::new("video.png", 10.0, 10.0, Vec3::new(-5.0, 18.0, -20.0)),
            Panel::new("cu.png", 5.0, 5.0, Vec3::new(6.0, 13.0, -10.0)),
            Panel::new("bg.png", 460.0, 190.0, Vec3::new(0.0, 138.0, -150.0)),
        ];

        let prop = Prop {
            name: "pc".to_string(),
            placement: Placement {
                position: Vec3::new(0.0, 6.0, -80.0),
                yaw: 1.57,
                scale: Vec3::new(10.0, 10.0, 15.0),
            },
        };

        let atmosphere = Atmosphere {
            background: rgb(0x000000),
            fog_color: rgb(0xffffff),
            fog_near: 0.0,
            fog_far: 750.0,
            sky_color: rgb(0xeeeeff),
            ground_color: rgb(0x777788),
            light_intensity: 0.75,
            light_direction: Vec3::new(0.5, 1.0, 0.75),
        };

        let gallery = Self {
            panels,
            prop,
            atmosphere,
            eye_height: 10.0,
            floor_seed: 109,
        };
        tracing::debug!(panels = gallery.panels.len(), "gallery assembled");
        gallery
    }

    /// Surfaces the support probe may stand on: every panel plus the prop.
    pub fn standable_surfaces(&self) -> Vec<Aabb> {
        let mut surfaces: Vec<Aabb> = self.panels.iter().map(Panel::bounds).collect();
        surfaces.push(self.prop.bounds());
        surfaces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_has_eleven_panels() {
        let gallery = Gallery::build();
        assert_eq!(gallery.panels.len(), 11);
    }

    #[test]
    fn backdrop_is_the_largest_panel() {
        let gallery = Gallery::build();
        let widest = gallery
            .panels
            .iter()
            .max_by(|a, b| a.width.total_cmp(&b.width))
            .unwrap();
        assert_eq!(widest.texture, "bg.png");
        assert_eq!(widest.position, Vec3::new(0.0, 138.0, -150.0));
    }

    #[test]
    fn panel_bounds_center_on_position() {
        let panel = Panel::new("x.png", 20.0, 30.0, Vec3::new(1.0, 2.0, 3.0));
        let b = panel.bounds();
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.max.x - b.min.x, 20.0);
        assert_eq!(b.max.y - b.min.y, 30.0);
    }

    #[test]
    fn prop_bounds_swap_extents_under_quarter_turn() {
        let prop = Prop {
            name: "pc".into(),
            placement: Placement {
                position: Vec3::ZERO,
                yaw: std::f32::consts::FRAC_PI_2,
                scale: Vec3::new(10.0, 10.0, 15.0),
            },
        };
        let b = prop.bounds();
        // x and z half-extents trade places (within float tolerance).
        assert!((b.max.x - 7.5).abs() < 1e-3);
        assert!((b.max.z - 5.0).abs() < 1e-3);
        assert_eq!(b.max.y, 5.0);
    }

    #[test]
    fn standable_surfaces_cover_panels_and_prop() {
        let gallery = Gallery::build();
        assert_eq!(gallery.standable_surfaces().len(), 12);
    }

    #[test]
    fn atmosphere_matches_layout_constants() {
        let a = Gallery::build().atmosphere;
        assert_eq!(a.fog_far, 750.0);
        assert_eq!(a.fog_color, [1.0, 1.0, 1.0]);
        assert_eq!(a.background, [0.0, 0.0, 0.0]);
        assert!((a.sky_color[2] - 1.0).abs() < 1e-6);
    }
}
