use super::*;
use crate::record::Archive;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Joint-action picture of a round: both best-response curves, the Nash
/// point, and every run's trajectory with its final point.
///
/// One row per point: `series,run,frame,h,m`. Reference rows leave
/// `run` and `frame` empty.
pub fn write_convergence(
    path: &Path,
    reaction: &Reaction,
    dataset: &Dataset,
) -> std::io::Result<()> {
    let ref mut file = BufWriter::new(std::fs::File::create(path)?);
    writeln!(file, "series,run,frame,h,m")?;
    for (h, m) in reaction.human() {
        writeln!(file, "human_response,,,{},{}", h, m)?;
    }
    for (h, m) in reaction.machine() {
        writeln!(file, "machine_response,,,{},{}", h, m)?;
    }
    let (h, m) = reaction.nash();
    writeln!(file, "nash,,,{},{}", h, m)?;
    for (i, run) in dataset.runs().iter().enumerate() {
        let points = run.human_inputs().iter().zip(run.machine_inputs());
        for (frame, (h, m)) in points.enumerate() {
            writeln!(file, "trajectory,{},{},{},{}", i, frame, h, m)?;
        }
    }
    for (i, run) in dataset.runs().iter().enumerate() {
        if let (Some(h), Some(m)) = (run.human_inputs().last(), run.machine_inputs().last()) {
            writeln!(file, "endpoint,{},{},{},{}", i, run.len() - 1, h, m)?;
        }
    }
    file.flush()
}

/// Median machine and human cost over time, smoothed.
///
/// `frame,machine_cost,human_cost`; frame counts smoothed samples.
pub fn write_learning(path: &Path, dataset: &Dataset) -> std::io::Result<()> {
    let ref mut file = BufWriter::new(std::fs::File::create(path)?);
    writeln!(file, "frame,machine_cost,human_cost")?;
    let machine = dataset.smooth(Archive::machine_scores);
    let human = dataset.smooth(Archive::human_scores);
    for (frame, (m, h)) in machine.iter().zip(human.iter()).enumerate() {
        writeln!(file, "{},{},{}", frame, m, h)?;
    }
    file.flush()
}
