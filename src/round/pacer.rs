use std::time::Duration;
use std::time::Instant;

/// Holds each frame to a fixed time budget by sleeping the remainder.
#[derive(Debug, Clone)]
pub struct Pacer {
    budget: Option<Duration>,
    start: Instant,
}

impl Pacer {
    /// A frame rate of zero disables pacing.
    pub fn new(fps: usize) -> Self {
        Self {
            budget: match fps {
                0 => None,
                n => Some(Duration::from_secs_f64(1.0 / n as f64)),
            },
            start: Instant::now(),
        }
    }
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }
    /// Close the current frame.
    pub fn tick(&mut self) {
        if let Some(budget) = self.budget {
            let elapsed = self.start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        self.start = Instant::now();
    }
}
