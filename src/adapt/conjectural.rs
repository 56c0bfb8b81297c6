use super::*;
use crate::cost::CostModel;

/// Conjectural-variation policy slope estimation.
///
/// Plays the affine policy m = L_M·(h - h0) + m0, adding `delta` on the
/// perturbed half of each trial pair. Comparing the two halves' average
/// actions estimates how the human responds to the machine,
/// L_H ≈ Δh / Δm, and the policy slope is replaced by the machine's
/// optimal slope under that conjecture.
#[derive(Debug, Clone)]
pub struct ConjecturalVariation {
    model: CostModel,
    slope: Slope,
    delta: Action,
    origin: (Action, Action),
    phase: Phase,
    trial: Trial,
    nominal: Option<(Action, Action)>,
    conjecture: Option<Slope>,
    trials: usize,
    updates: usize,
}

impl Default for ConjecturalVariation {
    fn default() -> Self {
        Self::new(
            CostModel::default(),
            CONJECTURAL_SLOPE,
            CONJECTURAL_DELTA,
            MINI_ROUND_FRAMES,
        )
    }
}

impl ConjecturalVariation {
    /// Pivots around the machine's unconstrained optimum.
    pub fn new(model: CostModel, slope: Slope, delta: Action, frames: usize) -> Self {
        Self {
            model,
            slope,
            delta,
            origin: model.machine_optimum(),
            phase: Phase::Nominal,
            trial: Trial::new(frames),
            nominal: None,
            conjecture: None,
            trials: 0,
            updates: 0,
        }
    }
    pub fn with_origin(self, origin: (Action, Action)) -> Self {
        Self { origin, ..self }
    }
    pub fn origin(&self) -> (Action, Action) {
        self.origin
    }
    /// Most recent estimate of the human's response slope.
    pub fn conjecture(&self) -> Option<Slope> {
        self.conjecture
    }
}

impl Adaptation for ConjecturalVariation {
    fn get_action(&mut self, human: Action) -> Action {
        let (h0, m0) = self.origin;
        let offset = match self.phase {
            Phase::Nominal => 0.0,
            Phase::Perturbed => self.delta,
        };
        (self.slope * (human - h0) + m0 + offset).clamp(ACTION_MIN, ACTION_MAX)
    }
    fn slope(&self) -> Option<Slope> {
        Some(self.slope)
    }
    fn name(&self) -> &'static str {
        "conjectural variation"
    }
}

impl TrialLearning for ConjecturalVariation {
    fn store_frame(&mut self, human: Action, machine: Action) {
        if self.trial.push(human, machine) {
            self.finish_trial();
        }
    }
    fn finish_trial(&mut self) {
        let Some(mean) = self.trial.mean() else {
            return;
        };
        self.trial.clear();
        self.trials += 1;
        match self.phase {
            Phase::Nominal => self.nominal = Some(mean),
            Phase::Perturbed => {
                if let Some((h1, m1)) = self.nominal.take() {
                    let (h2, m2) = mean;
                    let conjecture = (h2 - h1) / stats::guard(m2 - m1);
                    let slope = self.model.conjectural_slope(conjecture);
                    log::debug!(
                        "conjectural trial {}: L_H {:+.4}, L_M {:+.4} -> {:+.4}",
                        self.trials,
                        conjecture,
                        self.slope,
                        slope
                    );
                    self.conjecture = Some(conjecture);
                    self.slope = slope;
                    self.updates += 1;
                }
            }
        }
        self.phase = self.phase.flip();
    }
    fn phase(&self) -> Phase {
        self.phase
    }
    fn trials(&self) -> usize {
        self.trials
    }
    fn updates(&self) -> usize {
        self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(machine: &mut ConjecturalVariation, human: Action, frames: usize) {
        for _ in 0..frames {
            let m = machine.get_action(human);
            machine.store_frame(human, m);
        }
    }

    #[test]
    fn pivots_around_machine_optimum() {
        let machine = ConjecturalVariation::default();
        assert_eq!(machine.origin(), CostModel::default().machine_optimum());
        assert_eq!(machine.slope(), Some(CONJECTURAL_SLOPE));
        assert_eq!(machine.phase(), Phase::Nominal);
    }

    #[test]
    fn perturbation_shifts_action() {
        let mut machine = ConjecturalVariation::new(CostModel::default(), 0.5, 0.05, 1);
        assert!((machine.get_action(0.4) - 0.2).abs() < 1e-12);
        machine.store_frame(0.4, 0.2);
        assert_eq!(machine.phase(), Phase::Perturbed);
        assert!((machine.get_action(0.4) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn actions_are_clamped() {
        let mut machine = ConjecturalVariation::new(CostModel::default(), 10.0, 0.05, 1);
        assert_eq!(machine.get_action(1.0), ACTION_MAX);
        assert_eq!(machine.get_action(-1.0), ACTION_MIN);
    }

    #[test]
    fn hand_computed_update() {
        // L_M = 0, delta = 0.05: Δm = 0.05, Δh = 0.1, L_H = 2, L_M = (1 - 4) / (1 - 2) = 3
        let mut machine = ConjecturalVariation::new(CostModel::default(), 0.0, 0.05, 300);
        play(&mut machine, 0.1, 300);
        assert_eq!(machine.slope(), Some(0.0));
        play(&mut machine, 0.2, 300);
        assert!((machine.conjecture().unwrap() - 2.0).abs() < 1e-9);
        assert!((machine.slope().unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn one_update_per_trial_pair() {
        let mut machine = ConjecturalVariation::new(CostModel::default(), 1.0, 0.05, 300);
        play(&mut machine, -0.1, 300);
        assert_eq!((machine.trials(), machine.updates()), (1, 0));
        assert_eq!(machine.phase(), Phase::Perturbed);
        play(&mut machine, 0.05, 300);
        assert_eq!((machine.trials(), machine.updates()), (2, 1));
        assert_eq!(machine.phase(), Phase::Nominal);
        play(&mut machine, 0.0, 299);
        assert_eq!((machine.trials(), machine.updates()), (2, 1));
    }

    #[test]
    fn update_is_deterministic() {
        let run = || {
            let mut machine = ConjecturalVariation::new(CostModel::default(), 0.3, 0.05, 10);
            play(&mut machine, 0.15, 10);
            play(&mut machine, 0.35, 10);
            machine.slope().unwrap()
        };
        assert_eq!(run().to_bits(), run().to_bits());
    }

    #[test]
    fn empty_trial_is_ignored() {
        let mut machine = ConjecturalVariation::default();
        machine.finish_trial();
        assert_eq!(machine.trials(), 0);
        assert_eq!(machine.phase(), Phase::Nominal);
    }

    #[test]
    fn manual_finish_uses_partial_trial() {
        let mut machine = ConjecturalVariation::new(CostModel::default(), 0.0, 0.05, 300);
        play(&mut machine, 0.1, 20);
        machine.finish_trial();
        assert_eq!(machine.phase(), Phase::Perturbed);
        play(&mut machine, 0.2, 20);
        machine.finish_trial();
        assert_eq!(machine.updates(), 1);
        assert!((machine.slope().unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn unchanged_machine_action_is_guarded() {
        // delta = 0 leaves Δm = 0; the guard keeps the estimate finite
        let mut machine = ConjecturalVariation::new(CostModel::default(), 0.0, 0.0, 1);
        play(&mut machine, 0.1, 1);
        play(&mut machine, 0.1, 1);
        assert_eq!(machine.conjecture(), Some(0.0));
        assert_eq!(machine.slope(), Some(1.0));
        play(&mut machine, 0.1, 1);
        play(&mut machine, 0.1 + 1e-10, 1);
        // Δm ≈ 1e-10 falls under the guard and is read as EPSILON
        let conjecture = machine.conjecture().unwrap();
        assert!((conjecture - 0.1).abs() < 1e-6);
        assert!((machine.slope().unwrap() - 0.8 / 0.9).abs() < 1e-5);
    }
}
