use std::time::Instant;

/// Frame-delta clock for the render loop.
///
/// The first call to `delta` returns zero so a long setup pause does not
/// land as one giant frame delta.
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous call.
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => now.duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn test_delta_is_nonnegative_and_monotonic() {
        let mut clock = FrameClock::new();
        clock.delta();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let dt = clock.delta();
        assert!(dt > 0.0);
        assert!(dt < 1.0);
    }
}
