/// A movement command any embodiment (desktop keys, future gamepad) can
/// produce. The windowing layer translates key events into these; the
/// simulation never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

/// Per-frame movement input.
///
/// The four directional flags track held keys. The jump request is a
/// one-shot: set on key-down, cleared when the integrator consumes it with
/// [`InputState::take_jump`]. Flags are written by the event loop and read
/// once per frame; plain bool assignment is the whole synchronization story.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    jump_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command transition. `pressed` is the key state; a jump is
    /// requested on press only, release of the jump key is a no-op.
    pub fn apply(&mut self, command: Command, pressed: bool) {
        match command {
            Command::Forward => self.forward = pressed,
            Command::Backward => self.backward = pressed,
            Command::Left => self.left = pressed,
            Command::Right => self.right = pressed,
            Command::Jump => {
                if pressed {
                    self.request_jump();
                }
            }
        }
    }

    /// Request a jump. Stays pending until consumed.
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Consume the pending jump request, if any. Second call returns false
    /// until a new request arrives.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    /// Whether a jump request is waiting to be consumed.
    pub fn jump_pending(&self) -> bool {
        self.jump_requested
    }

    /// True when any directional flag is held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Drop all held flags and any pending jump (used when the cursor is
    /// released so keys do not stick).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_follow_press_and_release() {
        let mut input = InputState::new();
        input.apply(Command::Forward, true);
        input.apply(Command::Left, true);
        assert!(input.forward && input.left);
        assert!(input.any_direction());

        input.apply(Command::Forward, false);
        assert!(!input.forward);
        assert!(input.left);
    }

    #[test]
    fn jump_is_consumed_once() {
        let mut input = InputState::new();
        input.apply(Command::Jump, true);
        assert!(input.jump_pending());
        assert!(input.take_jump());
        assert!(!input.take_jump());
        assert!(!input.jump_pending());
    }

    #[test]
    fn jump_release_does_not_request() {
        let mut input = InputState::new();
        input.apply(Command::Jump, false);
        assert!(!input.jump_pending());
    }

    #[test]
    fn clear_drops_everything() {
        let mut input = InputState::new();
        input.apply(Command::Backward, true);
        input.request_jump();
        input.clear();
        assert!(!input.any_direction());
        assert!(!input.take_jump());
    }
}
