//! Offline Analyzer Binary
//!
//! Reads archived rounds and writes convergence and learning reports (CSV
//! and PNG) plus a JSON summary. With no `--round`, produces the three experiment reports.

use clap::Parser;
use nashduel::analysis::Analyzer;
use nashduel::cost::CostModel;
use nashduel::record::RoundLabel;
use nashduel::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Summarize recorded rounds", long_about = None)]
struct Args {
    /// Root directory of round archives
    #[arg(long, default_value = DATA_DIRECTORY)]
    data: PathBuf,
    /// Directory for the reports
    #[arg(short, long, default_value = "results")]
    output: PathBuf,
    /// Analyze these rounds instead of the experiment set (e.g. 2_Exp2)
    #[arg(short, long)]
    round: Vec<RoundLabel>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let analyzer = Analyzer::new(CostModel::default(), &args.data, &args.output);
    let summary = match args.round.is_empty() {
        true => analyzer.run()?,
        false => analyzer.rounds(&args.round)?,
    };
    if summary.rounds.is_empty() {
        log::warn!("no rounds found under {}", args.data.display());
    }
    for round in summary.rounds.iter() {
        log::info!(
            "{:<16} runs {:<4} frames {:<8} c_M {:?} c_H {:?}",
            round.label,
            round.runs,
            round.frames,
            round.machine_cost,
            round.human_cost
        );
    }
    Ok(())
}
