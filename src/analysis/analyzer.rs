use super::*;
use crate::adapt::Algorithm;
use crate::cost::CostModel;
use crate::record::RoundLabel;
use crate::*;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Reads rounds from a data root and writes reports to an output directory.
#[derive(Debug, Clone)]
pub struct Analyzer {
    model: CostModel,
    root: PathBuf,
    output: PathBuf,
}

impl Analyzer {
    pub fn new(model: CostModel, root: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            model,
            root: root.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// The experiment reports: convergence for experiment 1, a learning
    /// curve for each experiment, and the summary. Experiments without
    /// data are skipped.
    pub fn run(&self) -> anyhow::Result<Summary> {
        let plan = Algorithm::ALL
            .into_iter()
            .map(|algorithm| algorithm.experiment())
            .map(|n| {
                let convergence = (n == 1).then(|| format!("results_exp{}", n));
                let learning = match n {
                    1 => format!("results_exp{}_learning", n),
                    n => format!("results_exp{}", n),
                };
                (RoundLabel::experiment(n), convergence, learning)
            })
            .collect::<Vec<_>>();
        self.analyze(&plan)
    }

    /// Both reports for each of the given rounds, named after the round.
    pub fn rounds(&self, labels: &[RoundLabel]) -> anyhow::Result<Summary> {
        let plan = labels
            .iter()
            .map(|label| {
                (
                    label.clone(),
                    Some(format!("round_{}_convergence", label)),
                    format!("round_{}_learning", label),
                )
            })
            .collect::<Vec<_>>();
        self.analyze(&plan)
    }

    /// Reports are named by stem: `<stem>.csv`, plus `<stem>.png` when
    /// plotting is compiled in.
    fn analyze(&self, plan: &[(RoundLabel, Option<String>, String)]) -> anyhow::Result<Summary> {
        std::fs::create_dir_all(&self.output)
            .with_context(|| format!("creating {}", self.output.display()))?;
        let ref reaction = Reaction::new(&self.model, REACTION_POINTS);
        let mut summary = Summary::new(reaction.nash());
        for (label, convergence, learning) in plan {
            let Some(dataset) = Dataset::load(&self.root, label)? else {
                continue;
            };
            if let Some(stem) = convergence {
                let ref path = self.output.join(format!("{}.csv", stem));
                write_convergence(path, reaction, &dataset)
                    .with_context(|| format!("writing {}", path.display()))?;
                log::info!("saved {}", path.display());
                #[cfg(feature = "server")]
                {
                    let ref path = self.output.join(format!("{}.png", stem));
                    plot_convergence(path, reaction, &dataset)
                        .with_context(|| format!("plotting {}", path.display()))?;
                    log::info!("saved {}", path.display());
                }
            }
            let ref path = self.output.join(format!("{}.csv", learning));
            write_learning(path, &dataset).with_context(|| format!("writing {}", path.display()))?;
            log::info!("saved {}", path.display());
            #[cfg(feature = "server")]
            {
                let ref path = self.output.join(format!("{}.png", learning));
                plot_learning(path, &dataset)
                    .with_context(|| format!("plotting {}", path.display()))?;
                log::info!("saved {}", path.display());
            }
            summary.rounds.push(RoundSummary::from(&dataset));
        }
        let ref path = self.output.join("summary.json");
        summary
            .write(path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("saved {}", path.display());
        Ok(summary)
    }
}
