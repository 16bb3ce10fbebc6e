use glam::{Vec2, Vec3};
use promenade_input::InputState;

/// Tuning constants for the movement integrator.
///
/// The floor height doubles as the viewer's eye height: scene geometry
/// places the ground surface so that a standing viewer's camera sits at
/// exactly this world-space height.
#[derive(Debug, Clone)]
pub struct MoverConfig {
    /// Exponential horizontal velocity decay, per second.
    pub damping: f32,
    /// Gravitational acceleration.
    pub gravity: f32,
    /// Viewer mass; multiplies gravity into the per-second fall rate.
    pub mass: f32,
    /// Acceleration applied while a directional key is held.
    pub accel: f32,
    /// Instantaneous upward velocity added by a valid jump.
    pub jump_impulse: f32,
    /// World-space height the viewer can never fall below.
    pub floor_height: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            gravity: 9.8,
            mass: 100.0,
            accel: 400.0,
            jump_impulse: 350.0,
            floor_height: 10.0,
        }
    }
}

/// Errors from a movement step.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("frame delta must be finite and non-negative, got {0}")]
    InvalidDelta(f32),
}

/// Displacements for the camera holder to apply after a step.
///
/// `right` and `forward` are control-space translations along the camera's
/// flat right and forward axes; `vertical` is a world-space height change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub right: f32,
    pub forward: f32,
    pub vertical: f32,
}

/// The movement integrator.
///
/// Owns the viewer's velocity and the jump-permission latch. Constructed
/// once per viewer; independent instances do not share state, so tests can
/// run several side by side.
#[derive(Debug)]
pub struct Mover {
    config: MoverConfig,
    velocity: Vec3,
    can_jump: bool,
}

impl Mover {
    pub fn new(config: MoverConfig) -> Self {
        Self {
            config,
            velocity: Vec3::ZERO,
            can_jump: false,
        }
    }

    pub fn config(&self) -> &MoverConfig {
        &self.config
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Whether a jump request would currently fire.
    pub fn jump_permitted(&self) -> bool {
        self.can_jump
    }

    /// Advance the integrator by `dt` seconds.
    ///
    /// `grounded` reports whether the ground probe found support under the
    /// viewer this frame. The pending jump request on `input` is consumed
    /// whether or not it fires. The first frame of a session supplies
    /// `dt = 0.0` since no previous timestamp exists.
    pub fn step(
        &mut self,
        dt: f32,
        input: &mut InputState,
        grounded: bool,
    ) -> Result<StepOutput, StepError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(StepError::InvalidDelta(dt));
        }

        let v = &mut self.velocity;

        // Horizontal drag and gravity accumulate regardless of input.
        v.x -= v.x * self.config.damping * dt;
        v.z -= v.z * self.config.damping * dt;
        v.y -= self.config.gravity * self.config.mass * dt;

        // Normalized control direction so diagonals are not faster than
        // axis-aligned movement. A zero vector stays zero.
        let dir = Vec2::new(
            (input.right as i8 - input.left as i8) as f32,
            (input.forward as i8 - input.backward as i8) as f32,
        )
        .normalize_or_zero();

        if input.forward || input.backward {
            v.z -= dir.y * self.config.accel * dt;
        }
        if input.left || input.right {
            v.x -= dir.x * self.config.accel * dt;
        }

        if grounded {
            v.y = v.y.max(0.0);
            self.can_jump = true;
        }

        if input.take_jump() && self.can_jump {
            v.y += self.config.jump_impulse;
            self.can_jump = false;
            tracing::debug!(impulse = self.config.jump_impulse, "jump");
        }

        // Sign convention: positive velocity translates the camera along the
        // negative control-space axis.
        Ok(StepOutput {
            right: -v.x * dt,
            forward: -v.z * dt,
            vertical: v.y * dt,
        })
    }

    /// Post-step floor clamp, applied by the caller once the vertical
    /// displacement has been added to the camera height. When `y` has
    /// fallen below the floor, vertical velocity resets, jump permission
    /// re-latches, and the returned height is snapped to the floor.
    /// Returns `(clamped_y, was_clamped)`.
    pub fn clamp_to_floor(&mut self, y: f32) -> (f32, bool) {
        if y < self.config.floor_height {
            self.velocity.y = 0.0;
            self.can_jump = true;
            (self.config.floor_height, true)
        } else {
            (y, false)
        }
    }
}

impl Default for Mover {
    fn default() -> Self {
        Self::new(MoverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(forward: bool, backward: bool, left: bool, right: bool) -> InputState {
        let mut input = InputState::new();
        input.forward = forward;
        input.backward = backward;
        input.left = left;
        input.right = right;
        input
    }

    #[test]
    fn no_horizontal_drift_without_input() {
        for dt in [0.0, 0.004, 0.016, 0.1, 1.0] {
            let mut mover = Mover::default();
            mover.velocity.y = 25.0;
            let mut input = InputState::new();
            mover.step(dt, &mut input, false).unwrap();
            assert_eq!(mover.velocity().x, 0.0, "dt={dt}");
            assert_eq!(mover.velocity().z, 0.0, "dt={dt}");
        }
    }

    #[test]
    fn gravity_strictly_decreases_vertical_velocity() {
        let mut mover = Mover::default();
        let mut input = InputState::new();
        let mut prev = mover.velocity().y;
        for _ in 0..10 {
            mover.step(0.016, &mut input, false).unwrap();
            assert!(mover.velocity().y < prev);
            prev = mover.velocity().y;
        }
    }

    #[test]
    fn grounded_clamps_downward_velocity_to_zero() {
        let mut mover = Mover::default();
        mover.velocity.y = -120.0;
        let mut input = InputState::new();
        mover.step(0.016, &mut input, true).unwrap();
        assert_eq!(mover.velocity().y, 0.0);
        assert!(mover.jump_permitted());
    }

    #[test]
    fn grounded_jump_adds_exact_impulse() {
        let mut mover = Mover::default();
        mover.velocity.y = -50.0;
        let mut input = InputState::new();
        input.request_jump();
        // Grounded clamp first (to 0), then the impulse on top of it.
        mover.step(0.0, &mut input, true).unwrap();
        assert_eq!(mover.velocity().y, 350.0);
        assert!(!mover.jump_permitted());

        // Permission stays down while airborne, even with another request.
        input.request_jump();
        mover.step(0.016, &mut input, false).unwrap();
        assert!(!mover.jump_permitted());
        assert!(mover.velocity().y < 350.0);

        // Touching ground re-arms it.
        mover.step(0.016, &mut input, true).unwrap();
        assert!(mover.jump_permitted());
    }

    #[test]
    fn airborne_jump_request_is_consumed_but_ignored() {
        let mut mover = Mover::default();
        let mut input = InputState::new();
        input.request_jump();
        mover.step(0.016, &mut input, false).unwrap();
        assert!(!input.jump_pending());
        // Only gravity acted on vy.
        assert_eq!(mover.velocity().y, -9.8 * 100.0 * 0.016);
    }

    #[test]
    fn diagonal_is_not_faster_than_axis_aligned() {
        let mut mover = Mover::default();
        let mut input = held(true, false, false, true);
        mover.step(1.0, &mut input, false).unwrap();
        let v = mover.velocity();
        assert!((v.x.abs() - v.z.abs()).abs() < 1e-4);
        // Each component carries 1/sqrt(2) of the full acceleration.
        assert!((v.x.abs() - 400.0 / 2.0_f32.sqrt()).abs() < 1e-2);
    }

    #[test]
    fn forward_key_produces_positive_forward_displacement() {
        let mut mover = Mover::default();
        let mut input = held(true, false, false, false);
        let out = mover.step(0.016, &mut input, true).unwrap();
        assert!(out.forward > 0.0);
        assert_eq!(out.right, 0.0);
    }

    #[test]
    fn floor_clamp_end_to_end() {
        let mut mover = Mover::default();
        mover.velocity.y = -500.0;
        let mut input = InputState::new();
        let out = mover.step(0.1, &mut input, false).unwrap();

        let y = 10.05 + out.vertical;
        assert!(y < mover.config().floor_height);

        let (clamped, was_clamped) = mover.clamp_to_floor(y);
        assert!(was_clamped);
        assert_eq!(clamped, 10.0);
        assert_eq!(mover.velocity().y, 0.0);
        assert!(mover.jump_permitted());
    }

    #[test]
    fn clamp_above_floor_is_identity() {
        let mut mover = Mover::default();
        mover.velocity.y = -3.0;
        let (y, was_clamped) = mover.clamp_to_floor(42.0);
        assert!(!was_clamped);
        assert_eq!(y, 42.0);
        assert_eq!(mover.velocity().y, -3.0);
    }

    #[test]
    fn rejects_bad_deltas() {
        let mut mover = Mover::default();
        let mut input = InputState::new();
        assert!(matches!(
            mover.step(-0.01, &mut input, false),
            Err(StepError::InvalidDelta(_))
        ));
        assert!(mover.step(f32::NAN, &mut input, false).is_err());
        assert!(mover.step(f32::INFINITY, &mut input, false).is_err());
        // A rejected step must not have touched the velocity.
        assert_eq!(mover.velocity(), Vec3::ZERO);
    }

    #[test]
    fn zero_delta_first_frame_moves_nothing() {
        let mut mover = Mover::default();
        let mut input = held(true, false, false, false);
        let out = mover.step(0.0, &mut input, false).unwrap();
        assert_eq!(out, StepOutput { right: 0.0, forward: 0.0, vertical: 0.0 });
        assert_eq!(mover.velocity(), Vec3::ZERO);
    }

    #[test]
    fn instances_are_independent() {
        let mut walker = Mover::default();
        let mut faller = Mover::default();
        let mut input = held(true, false, false, false);
        walker.step(0.1, &mut input, true).unwrap();
        faller.step(0.1, &mut InputState::new(), false).unwrap();

        assert!(walker.velocity().z < 0.0);
        assert_eq!(faller.velocity().z, 0.0);
        assert!(faller.velocity().y < 0.0);
        assert_eq!(walker.velocity().y, 0.0);
    }

    #[test]
    fn damping_decays_toward_rest() {
        let mut mover = Mover::default();
        mover.velocity.x = 100.0;
        mover.velocity.z = -100.0;
        let mut input = InputState::new();
        for _ in 0..60 {
            mover.step(0.016, &mut input, true).unwrap();
        }
        assert!(mover.velocity().x.abs() < 1.0);
        assert!(mover.velocity().z.abs() < 1.0);
    }
}
