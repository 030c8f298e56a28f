use std::time::Instant;

/// Monotonic clock anchored at runtime startup.
///
/// Per-frame animation reads `elapsed_secs` rather than a delta so that
/// the rendered state is a pure function of time since startup.
#[derive(Debug, Clone)]
pub struct RunClock {
    start: Instant,
}

impl RunClock {
    /// Starts the clock at the current instant.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_non_negative() {
        let clock = RunClock::start();
        assert!(clock.elapsed_secs() >= 0.0);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let clock = RunClock::start();
        let a = clock.elapsed_secs();
        let b = clock.elapsed_secs();
        assert!(b >= a);
    }
}
