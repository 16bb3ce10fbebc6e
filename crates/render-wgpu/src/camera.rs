use glam::{Mat4, Vec3};

/// First-person walk camera: position plus yaw/pitch mouse look.
///
/// Translation is flat: the movement integrator's displacements are applied
/// along the yaw direction projected onto the XZ plane, so looking up or
/// down never changes walking speed. Vertical motion goes through
/// `position.y` only (gravity and jumps).
pub struct WalkCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
}

impl Default for WalkCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 0.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 1000.0,
            sensitivity: 0.003,
        }
    }
}

impl WalkCamera {
    /// Full look direction, including pitch.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Walking direction: yaw only, flattened to the XZ plane.
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin()).normalize()
    }

    /// Flat right axis.
    pub fn right(&self) -> Vec3 {
        self.flat_forward().cross(Vec3::Y).normalize()
    }

    /// Apply a control-space sideways displacement.
    pub fn translate_right(&mut self, distance: f32) {
        self.position += self.right() * distance;
    }

    /// Apply a control-space forward displacement.
    pub fn translate_forward(&mut self, distance: f32) {
        self.position += self.flat_forward() * distance;
    }

    /// Mouse-look rotation from a raw mouse delta.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = WalkCamera::default();
        let fwd = cam.forward();
        assert!(fwd.z < -0.99);
        assert!(fwd.y.abs() < 1e-6);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn pitch_does_not_affect_walking_direction() {
        let mut cam = WalkCamera::default();
        cam.pitch = 60.0_f32.to_radians();
        let flat = cam.flat_forward();
        assert!(flat.y.abs() < 1e-6);
        assert!((flat.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn pitch_clamps_at_vertical() {
        let mut cam = WalkCamera::default();
        cam.rotate(0.0, -10_000.0);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
        cam.rotate(0.0, 10_000.0);
        assert!(cam.pitch >= -89.0_f32.to_radians() - 1e-6);
    }

    #[test]
    fn forward_translation_preserves_height() {
        let mut cam = WalkCamera::default();
        cam.pitch = -45.0_f32.to_radians();
        let y = cam.position.y;
        cam.translate_forward(5.0);
        assert_eq!(cam.position.y, y);
        assert!(cam.position.z < 0.0);
    }

    #[test]
    fn right_is_perpendicular_to_forward() {
        let cam = WalkCamera::default();
        assert!(cam.right().dot(cam.flat_forward()).abs() < 1e-5);
        // Looking down -Z, right is +X.
        assert!(cam.right().x > 0.99);
    }
}
