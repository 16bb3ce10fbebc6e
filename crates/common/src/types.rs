use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Where an object sits in the gallery: position, yaw, scale.
///
/// Gallery objects only ever rotate about the vertical axis, so a single
/// yaw angle (radians) replaces a full quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: Vec3,
}

impl Placement {
    /// Placement at a position with no rotation and unit scale.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Model matrix for this placement.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_rotation_y(self.yaw),
            self.position,
        )
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            scale: Vec3::ONE,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Slab-method ray intersection. Returns the entry distance along `dir`
    /// if the ray hits within `max_dist`, treating hits behind the origin
    /// as misses. `dir` must be normalized.
    pub fn ray_hit(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = max_dist;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
            } else {
                let inv = 1.0 / d;
                let mut t0 = (lo - o) * inv;
                let mut t1 = (hi - o) * inv;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return None;
                }
            }
        }

        Some(t_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_default_is_identity() {
        let p = Placement::default();
        assert_eq!(p.position, Vec3::ZERO);
        assert_eq!(p.yaw, 0.0);
        assert_eq!(p.scale, Vec3::ONE);
        assert_eq!(p.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn placement_matrix_translates() {
        let p = Placement::at(Vec3::new(1.0, 2.0, 3.0));
        let moved = p.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(moved, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn aabb_downward_ray_hits_top_face() {
        let b = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
        let hit = b.ray_hit(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 10.0);
        assert_eq!(hit, Some(4.0));
    }

    #[test]
    fn aabb_ray_misses_to_the_side() {
        let b = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
        assert!(b.ray_hit(Vec3::new(3.0, 5.0, 0.0), Vec3::NEG_Y, 10.0).is_none());
    }

    #[test]
    fn aabb_ray_respects_max_distance() {
        let b = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
        assert!(b.ray_hit(Vec3::new(0.0, 20.0, 0.0), Vec3::NEG_Y, 10.0).is_none());
    }

    #[test]
    fn aabb_ray_behind_origin_misses() {
        let b = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
        assert!(b.ray_hit(Vec3::new(0.0, 5.0, 0.0), Vec3::Y, 10.0).is_none());
    }
}
