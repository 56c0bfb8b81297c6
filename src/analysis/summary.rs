use super::*;
use crate::record::Archive;
use crate::*;
use std::path::Path;

/// Headline numbers for every analyzed round.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub nash: (Action, Action),
    pub rounds: Vec<RoundSummary>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundSummary {
    pub label: String,
    pub runs: usize,
    pub frames: usize,
    /// Last smoothed median machine cost.
    pub machine_cost: Option<Cost>,
    /// Last smoothed median human cost.
    pub human_cost: Option<Cost>,
    /// Median final joint action across runs.
    pub endpoint: Option<(Action, Action)>,
}

impl From<&Dataset> for RoundSummary {
    fn from(dataset: &Dataset) -> Self {
        let last = |series: Series| dataset.median(series).last().copied();
        Self {
            label: dataset.label().to_string(),
            runs: dataset.runs().len(),
            frames: dataset.frames(),
            machine_cost: dataset.smooth(Archive::machine_scores).last().copied(),
            human_cost: dataset.smooth(Archive::human_scores).last().copied(),
            endpoint: last(Archive::human_inputs).zip(last(Archive::machine_inputs)),
        }
    }
}

impl Summary {
    pub fn new(nash: (Action, Action)) -> Self {
        Self {
            nash,
            rounds: Vec::new(),
        }
    }
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let ref mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
        serde_json::to_writer_pretty(&mut *writer, self)?;
        std::io::Write::flush(writer)?;
        Ok(())
    }
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}
