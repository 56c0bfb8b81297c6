//! Round Driver Binary
//!
//! Plays rounds of one experiment against a simulated participant and
//! files every round under the data directory.
//!
//! Type Q (or ESC) + Enter to end the current round early; whatever it
//! recorded is still saved.

use anyhow::Context;
use clap::Parser;
use nashduel::adapt::Adaptation;
use nashduel::adapt::Algorithm;
use nashduel::cost::CostModel;
use nashduel::human::Responder;
use nashduel::record::RoundLabel;
use nashduel::round::Round;
use nashduel::round::Session;
use nashduel::*;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about = "Play recorded rounds against an adaptive machine", long_about = None)]
struct Args {
    /// Adaptation rule: 1|gradient, 2|conjectural, 3|policy
    #[arg(short, long, default_value = "gradient")]
    experiment: Algorithm,
    /// Number of consecutive rounds; the machine keeps learning across them
    #[arg(short, long, default_value_t = 1)]
    rounds: usize,
    /// Wall-clock length of each round, e.g. 90s or 2m
    #[arg(short, long, value_parser = duration)]
    duration: Option<Duration>,
    /// Play exactly this many frames per round instead of a fixed duration
    #[arg(short, long, conflicts_with = "duration")]
    frames: Option<usize>,
    /// Target frame rate; 0 runs unpaced and needs --frames
    #[arg(long, default_value_t = FRAMES_PER_SECOND)]
    fps: usize,
    /// Round label, defaults to the experiment's own (e.g. 2_Exp2)
    #[arg(short, long)]
    label: Option<RoundLabel>,
    /// Root directory for round archives
    #[arg(long, default_value = DATA_DIRECTORY)]
    data: PathBuf,
    /// Fraction of the way the simulated participant moves toward its best response per frame
    #[arg(long, default_value_t = 0.05)]
    rate: f64,
    /// Uniform jitter added to the simulated participant's action
    #[arg(long, default_value_t = 0.02)]
    noise: f64,
    /// Seed for the simulated participant
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn duration(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration: {} (try 90s, 5m, 1h)", s))
}

fn main() -> anyhow::Result<()> {
    log();
    brb();
    let args = Args::parse();
    let model = CostModel::default();
    let label = args
        .label
        .unwrap_or_else(|| RoundLabel::experiment(args.experiment.experiment()));
    let round = match args.frames {
        Some(frames) => Round::new(label, frames),
        None => Round::timed(label, args.duration.unwrap_or(ROUND_DURATION), args.fps)
            .context("unpaced play (--fps 0) needs a frame count (--frames)")?,
    };
    let human = Responder::new(model, args.rate, args.noise, args.seed);
    let machine = args.experiment.machine(model);
    log::info!("experiment {} ({})", args.experiment.experiment(), machine.name());
    let mut session = Session::new(model, machine, human, &args.data).paced(args.fps);
    let outcomes = session.run(&vec![round; args.rounds])?;
    for outcome in outcomes.iter() {
        println!("{}", outcome);
    }
    if let Some(slope) = session.machine().slope() {
        log::info!("final policy slope L_M {:+.4}", slope);
    }
    Ok(())
}
