use crate::record::RoundLabel;
use crate::*;
use std::path::PathBuf;

/// What a finished (or quit) round left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: RoundLabel,
    /// Archive written for the round, none when nothing was recorded.
    pub path: Option<PathBuf>,
    /// Frames stored in the archive.
    pub frames: usize,
    /// Frames played, including any past the allocated capacity.
    pub played: usize,
    /// The round ended on a quit request.
    pub quit: bool,
    pub slope: Option<Slope>,
    pub human_cost: Option<Cost>,
    pub machine_cost: Option<Cost>,
}

#[rustfmt::skip]
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cost  = |c: Option<Cost>| c.map_or("-".to_string(), |c| format!("{:.4}", c));
        let slope = |s: Option<Slope>| s.map_or("-".to_string(), |s| format!("{:+.4}", s));
        write!(f, "round {:<12} frames {:<8}", self.label.to_string(), self.frames)?;
        write!(f, "c_H {:<10}", cost(self.human_cost))?;
        write!(f, "c_M {:<10}", cost(self.machine_cost))?;
        write!(f, "L_M {}", slope(self.slope))?;
        if self.quit {
            write!(f, " (quit)")?;
        }
        Ok(())
    }
}
