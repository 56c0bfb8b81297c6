use crate::record::Archive;
use crate::record::RoundLabel;
use crate::*;
use anyhow::Context;
#[cfg(feature = "server")]
use rayon::prelude::*;
use std::path::Path;
use std::path::PathBuf;

/// Selects one of the four recorded series.
pub type Series = for<'a> fn(&'a Archive) -> &'a [f64];

/// All runs of one round, trimmed to a common length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    label: RoundLabel,
    runs: Vec<Archive>,
}

impl Dataset {
    /// Decode every archive filed under `label`.
    ///
    /// Archives that fail to decode are skipped with a warning. Ok(None)
    /// when there is nothing to analyze: no directory, no readable
    /// archives, or only empty runs.
    pub fn load(root: &Path, label: &RoundLabel) -> anyhow::Result<Option<Self>> {
        let ref directory = label.directory(root);
        if !directory.is_dir() {
            log::warn!("no data found for round {}", label);
            return Ok(None);
        }
        let paths = Self::archives(directory)?;
        if paths.is_empty() {
            log::warn!("no data found for round {}", label);
            return Ok(None);
        }
        log::info!("loading {} runs of round {}", paths.len(), label);
        #[cfg(feature = "server")]
        let iter = paths.par_iter();
        #[cfg(not(feature = "server"))]
        let iter = paths.iter();
        let runs = iter
            .filter_map(|path| match Archive::read(path) {
                Ok(run) => Some(run),
                Err(e) => {
                    log::warn!("skipping unreadable archive {}: {}", path.display(), e);
                    None
                }
            })
            .collect::<Vec<Archive>>();
        Ok(Self::from_runs(label.clone(), runs))
    }

    /// Archive files in a round directory, sorted by name.
    fn archives(directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let suffix = format!(".{}", Archive::EXTENSION);
        let mut paths = std::fs::read_dir(directory)
            .with_context(|| format!("listing {}", directory.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(&suffix))
            })
            .collect::<Vec<PathBuf>>();
        paths.sort();
        Ok(paths)
    }

    /// Drop empty runs, then trim the rest to the shortest one. None if
    /// no run has any frames.
    pub fn from_runs(label: RoundLabel, runs: Vec<Archive>) -> Option<Self> {
        let total = runs.len();
        let runs = runs
            .into_iter()
            .filter(|run| !run.is_empty())
            .collect::<Vec<Archive>>();
        if runs.len() < total {
            log::warn!("round {} has {} empty runs, ignoring them", label, total - runs.len());
        }
        let Some(shortest) = runs.iter().map(Archive::len).min() else {
            log::warn!("no frames recorded for round {}", label);
            return None;
        };
        if runs.iter().any(|run| run.len() != shortest) {
            log::warn!(
                "round {} runs differ in length, trimming to {} frames",
                label,
                shortest
            );
        }
        let runs = runs
            .into_iter()
            .map(|run| match run.len() == shortest {
                true => run,
                false => Archive::new(
                    run.human_inputs()[..shortest].to_vec(),
                    run.machine_inputs()[..shortest].to_vec(),
                    run.human_scores()[..shortest].to_vec(),
                    run.machine_scores()[..shortest].to_vec(),
                ),
            })
            .collect();
        Some(Self { label, runs })
    }

    pub fn label(&self) -> &RoundLabel {
        &self.label
    }
    pub fn runs(&self) -> &[Archive] {
        &self.runs
    }
    /// Frames per run after trimming.
    pub fn frames(&self) -> usize {
        self.runs.first().map_or(0, Archive::len)
    }

    /// Elementwise median of one series across runs.
    pub fn median(&self, series: Series) -> Vec<f64> {
        let ref columns = self.runs.iter().map(series).collect::<Vec<&[f64]>>();
        stats::columns(columns)
    }
    /// Median series under a moving average, or the raw median when the
    /// runs are no longer than the window.
    pub fn smooth(&self, series: Series) -> Vec<f64> {
        let median = self.median(series);
        match median.len() > SMOOTHING_WINDOW {
            true => stats::moving_average(&median, SMOOTHING_WINDOW),
            false => median,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(len: usize, cost: f64) -> Archive {
        Archive::new(
            vec![0.1; len],
            vec![0.2; len],
            vec![cost; len],
            (0..len).map(|i| cost + i as f64).collect(),
        )
    }

    #[test]
    fn trims_to_shortest() {
        let data = Dataset::from_runs(RoundLabel::new(1), vec![run(5, 0.0), run(3, 1.0)]).unwrap();
        assert_eq!(data.frames(), 3);
        assert!(data.runs().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn drops_empty_runs_before_trimming() {
        let runs = vec![run(4, 0.0), run(0, 0.0), run(6, 2.0)];
        let data = Dataset::from_runs(RoundLabel::new(1), runs).unwrap();
        assert_eq!(data.runs().len(), 2);
        assert_eq!(data.frames(), 4);
        assert_eq!(data.median(Archive::human_scores), vec![1.0; 4]);
    }

    #[test]
    fn no_frames_is_none() {
        assert_eq!(Dataset::from_runs(RoundLabel::new(1), vec![]), None);
        assert_eq!(Dataset::from_runs(RoundLabel::new(1), vec![run(0, 0.0), run(0, 1.0)]), None);
    }

    #[test]
    fn elementwise_median() {
        let runs = vec![run(3, 0.0), run(3, 10.0), run(3, 2.0)];
        let data = Dataset::from_runs(RoundLabel::new(1), runs).unwrap();
        assert_eq!(data.median(Archive::human_scores), vec![2.0, 2.0, 2.0]);
        assert_eq!(data.median(Archive::machine_scores), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn smoothing_needs_more_than_a_window() {
        let runs = vec![run(SMOOTHING_WINDOW, 0.0)];
        let short = Dataset::from_runs(RoundLabel::new(1), runs).unwrap();
        assert_eq!(short.smooth(Archive::machine_scores).len(), SMOOTHING_WINDOW);
        let long = Dataset::from_runs(RoundLabel::new(1), vec![run(250, 0.0)]).unwrap();
        let smooth = long.smooth(Archive::machine_scores);
        assert_eq!(smooth.len(), 250 - SMOOTHING_WINDOW + 1);
        assert!((smooth[0] - 49.5).abs() < 1e-9);
    }

    #[test]
    fn loads_archives_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let label = RoundLabel::experiment(2);
        let folder = label.directory(dir.path());
        std::fs::create_dir_all(&folder).unwrap();
        run(4, 1.0).write(&folder.join(format!("a.{}", Archive::EXTENSION))).unwrap();
        run(6, 3.0).write(&folder.join(format!("b.{}", Archive::EXTENSION))).unwrap();
        std::fs::write(folder.join("notes.txt"), b"ignored").unwrap();
        let data = Dataset::load(dir.path(), &label).unwrap().unwrap();
        assert_eq!(data.runs().len(), 2);
        assert_eq!(data.frames(), 4);
        assert_eq!(data.median(Archive::human_scores), vec![2.0; 4]);
    }

    #[test]
    fn missing_round_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Dataset::load(dir.path(), &RoundLabel::new(7)).unwrap(), None);
        std::fs::create_dir_all(RoundLabel::new(7).directory(dir.path())).unwrap();
        assert_eq!(Dataset::load(dir.path(), &RoundLabel::new(7)).unwrap(), None);
    }

    #[test]
    fn skips_unreadable_archives() {
        let dir = tempfile::tempdir().unwrap();
        let label = RoundLabel::new(3);
        let folder = label.directory(dir.path());
        std::fs::create_dir_all(&folder).unwrap();
        run(5, 1.0).write(&folder.join(format!("a.{}", Archive::EXTENSION))).unwrap();
        std::fs::write(folder.join(format!("b.{}", Archive::EXTENSION)), b"garbage").unwrap();
        std::fs::write(folder.join(format!("c.{}", Archive::EXTENSION)), b"").unwrap();
        let data = Dataset::load(dir.path(), &label).unwrap().unwrap();
        assert_eq!(data.runs().len(), 1);
        assert_eq!(data.frames(), 5);
    }

    #[test]
    fn only_unreadable_archives_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let label = RoundLabel::new(3);
        let folder = label.directory(dir.path());
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join(format!("x.{}", Archive::EXTENSION)), b"garbage").unwrap();
        assert_eq!(Dataset::load(dir.path(), &label).unwrap(), None);
    }
}
