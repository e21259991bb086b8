use crate::utils::Float;
use std::time::{Duration, Instant};

/// Measures elapsed time since the moment it was started.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed whole seconds.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Returns elapsed seconds with a fraction part.
    pub fn elapsed_secs_as_float(&self) -> Float {
        self.elapsed().as_secs_f64() as Float
    }

    /// Returns elapsed milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }

    fn elapsed(&self) -> Duration {
        Instant::now() - self.start
    }
}
