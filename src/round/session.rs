use super::*;
use crate::adapt::Adaptation;
use crate::adapt::Machine;
use crate::cost::CostModel;
use crate::human::Human;
use crate::record::Recorder;
use crate::*;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

/// A human and a machine playing consecutive rounds.
///
/// The machine's policy carries over from round to round; every round
/// gets its own recorder. Rounds end when their frame budget or time is
/// used up, or when the stop check reports a quit, which also ends the
/// session.
pub struct Session<H>
where
    H: Human,
{
    model: CostModel,
    machine: Machine,
    human: H,
    root: PathBuf,
    fps: usize,
    last: Action,
    stop: Box<dyn FnMut() -> bool>,
}

impl<H> Session<H>
where
    H: Human,
{
    /// Unpaced, archiving under `root`, stopping on the global quit flag.
    pub fn new(model: CostModel, machine: Machine, human: H, root: impl AsRef<Path>) -> Self {
        Self {
            model,
            machine,
            human,
            root: root.as_ref().to_path_buf(),
            fps: 0,
            last: 0.0,
            stop: Box::new(interrupted),
        }
    }
    /// Pace frames to `fps` (zero disables pacing).
    pub fn paced(self, fps: usize) -> Self {
        Self { fps, ..self }
    }
    /// Replace the quit check, polled once per frame.
    pub fn stopping<F>(self, stop: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        Self {
            stop: Box::new(stop),
            ..self
        }
    }
    pub fn machine(&self) -> &Machine {
        &self.machine
    }
    pub fn human(&self) -> &H {
        &self.human
    }

    /// Play one round and persist whatever was recorded. A round that
    /// recorded nothing leaves no archive behind.
    pub fn play(&mut self, round: &Round) -> anyhow::Result<Outcome> {
        let mut recorder = Recorder::new(round.frames());
        let mut pacer = Pacer::new(self.fps);
        let started = Instant::now();
        let mut played = 0;
        let mut quit = false;
        log::info!(
            "starting round {} ({} frames, {})",
            round.label(),
            round.frames(),
            self.machine.name()
        );
        loop {
            let more = match round.duration() {
                Some(duration) => started.elapsed() < duration,
                None => played < round.frames(),
            };
            if !more {
                break;
            }
            if (self.stop)() {
                log::warn!("round {} quit after {} frames", round.label(), played);
                quit = true;
                break;
            }
            let h = self.human.sense(self.last);
            let m = self.machine.get_action(h);
            let ch = self.model.human_cost(h, m);
            let cm = self.model.machine_cost(h, m);
            recorder.append(h, m, ch, cm);
            self.machine.observe(h, m);
            self.last = m;
            played += 1;
            pacer.tick();
        }
        let path = match recorder.is_empty() {
            true => {
                log::warn!("round {} recorded no frames, nothing saved", round.label());
                None
            }
            false => recorder
                .persist(&self.root, round.label())
                .with_context(|| format!("persisting round {}", round.label()))
                .map(Some)?,
        };
        let ref archive = recorder.archive();
        let outcome = Outcome {
            label: round.label().clone(),
            path,
            frames: recorder.len(),
            played,
            quit,
            slope: self.machine.slope(),
            human_cost: stats::mean(archive.human_scores().iter().copied()),
            machine_cost: stats::mean(archive.machine_scores().iter().copied()),
        };
        log::info!("{}", outcome);
        Ok(outcome)
    }

    /// Play rounds in order, stopping after the first quit.
    pub fn run(&mut self, rounds: &[Round]) -> anyhow::Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(rounds.len());
        for round in rounds {
            let outcome = self.play(round)?;
            let quit = outcome.quit;
            outcomes.push(outcome);
            if quit {
                break;
            }
        }
        Ok(outcomes)
    }
}
