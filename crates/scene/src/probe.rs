use glam::Vec3;
use promenade_common::Aabb;

/// Downward support probe.
///
/// Casts a fixed-length ray straight down from a point below the viewer's
/// eye and reports whether any standable surface lies within range. The
/// world floor is NOT part of this test; it is enforced by the movement
/// integrator's floor clamp.
#[derive(Debug, Clone)]
pub struct GroundProbe {
    surfaces: Vec<Aabb>,
    /// Ray origin offset below the eye.
    drop: f32,
    /// Ray length.
    range: f32,
}

impl GroundProbe {
    pub fn new(surfaces: Vec<Aabb>) -> Self {
        Self {
            surfaces,
            drop: 10.0,
            range: 10.0,
        }
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether the viewer at `eye` is supported by a surface this frame.
    pub fn grounded(&self, eye: Vec3) -> bool {
        let origin = eye - Vec3::new(0.0, self.drop, 0.0);
        self.surfaces
            .iter()
            .any(|s| s.ray_hit(origin, Vec3::NEG_Y, self.range).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Gallery;

    fn platform(center: Vec3, half: Vec3) -> GroundProbe {
        GroundProbe::new(vec![Aabb::from_center_half_extents(center, half)])
    }

    #[test]
    fn supported_just_above_a_platform() {
        // Platform top at y = 20; eye at 32 puts the ray origin at 22,
        // two units above the surface and well within range.
        let probe = platform(Vec3::new(0.0, 18.0, 0.0), Vec3::new(5.0, 2.0, 5.0));
        assert!(probe.grounded(Vec3::new(0.0, 32.0, 0.0)));
    }

    #[test]
    fn unsupported_when_too_high() {
        let probe = platform(Vec3::new(0.0, 18.0, 0.0), Vec3::new(5.0, 2.0, 5.0));
        assert!(!probe.grounded(Vec3::new(0.0, 45.0, 0.0)));
    }

    #[test]
    fn unsupported_off_to_the_side() {
        let probe = platform(Vec3::new(0.0, 18.0, 0.0), Vec3::new(5.0, 2.0, 5.0));
        assert!(!probe.grounded(Vec3::new(20.0, 32.0, 0.0)));
    }

    #[test]
    fn empty_surface_list_never_grounds() {
        let probe = GroundProbe::new(Vec::new());
        assert!(!probe.grounded(Vec3::new(0.0, 10.0, 0.0)));
    }

    #[test]
    fn gallery_surfaces_include_the_prop() {
        let gallery = Gallery::build();
        let probe = GroundProbe::new(gallery.standable_surfaces());
        assert_eq!(probe.surface_count(), 12);
        // Standing on the prop: its top is at y = 11; an eye at 22 puts
        // the ray origin one unit above it.
        assert!(probe.grounded(Vec3::new(0.0, 22.0, -80.0)));
    }
}
