use std::time::Instant;

/// Wall-clock frame timer.
///
/// The first tick returns 0.0 since there is no previous timestamp to diff
/// against; every later tick returns the seconds elapsed since the one
/// before it.
#[derive(Debug, Default)]
pub struct FrameClock {
    prev: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick (0.0 on the first).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .prev
            .map(|prev| now.duration_since(prev).as_secs_f32())
            .unwrap_or(0.0);
        self.prev = Some(now);
        dt
    }

    /// Forget the previous timestamp so the next tick returns 0.0. Used
    /// when the frame loop resumes after the cursor was released.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn later_ticks_measure_elapsed_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        std::thread::sleep(Duration::from_millis(10));
        let dt = clock.tick();
        assert!(dt > 0.0);
        assert!(dt < 1.0);
    }

    #[test]
    fn reset_restores_first_tick_behavior() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.reset();
        assert_eq!(clock.tick(), 0.0);
    }
}
