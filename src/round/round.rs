use crate::record::RoundLabel;
use std::time::Duration;

/// One round of play: where it is filed and how long it lasts.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    label: RoundLabel,
    frames: usize,
    duration: Option<Duration>,
}

impl Round {
    /// Exactly `frames` frames, independent of wall-clock time.
    pub fn new(label: RoundLabel, frames: usize) -> Self {
        Self {
            label,
            frames,
            duration: None,
        }
    }
    /// Runs for `duration` of wall-clock time, with room for
    /// `duration · fps` frames. Frames beyond that are played but not stored.
    /// An unpaced timed round has no frame budget and is refused.
    pub fn timed(label: RoundLabel, duration: Duration, fps: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(fps > 0, "round {} is timed but has no frame rate", label);
        Ok(Self {
            label,
            frames: (duration.as_secs_f64() * fps as f64).round() as usize,
            duration: Some(duration),
        })
    }
    pub fn label(&self) -> &RoundLabel {
        &self.label
    }
    /// Frames allocated for the round.
    pub fn frames(&self) -> usize {
        self.frames
    }
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
