use super::*;
use crate::cost::CostModel;

/// Policy-gradient slope estimation by finite differences.
///
/// Plays m = L·(h - h0) + m0 with L = L_M on the nominal half of a trial
/// pair and L = L_M + Δ on the perturbed half. The difference in average
/// machine cost between the halves, divided by Δ, estimates dc_M/dL_M and
/// the slope takes one step of size γ against it.
#[derive(Debug, Clone)]
pub struct PolicyGradient {
    model: CostModel,
    slope: Slope,
    delta: Slope,
    gamma: f64,
    origin: (Action, Action),
    phase: Phase,
    trial: Trial,
    nominal: Option<Cost>,
    gradient: Option<f64>,
    trials: usize,
    updates: usize,
}

impl Default for PolicyGradient {
    fn default() -> Self {
        Self::new(
            CostModel::default(),
            POLICY_SLOPE,
            POLICY_DELTA,
            POLICY_GAMMA,
            MINI_ROUND_FRAMES,
        )
    }
}

impl PolicyGradient {
    /// Pivots around the machine's unconstrained optimum.
    pub fn new(model: CostModel, slope: Slope, delta: Slope, gamma: f64, frames: usize) -> Self {
        Self {
            model,
            slope,
            delta,
            gamma,
            origin: model.machine_optimum(),
            phase: Phase::Nominal,
            trial: Trial::new(frames),
            nominal: None,
            gradient: None,
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
    /// Most recent finite-difference gradient estimate.
    pub fn gradient(&self) -> Option<f64> {
        self.gradient
    }
}

impl Adaptation for PolicyGradient {
    fn get_action(&mut self, human: Action) -> Action {
        let (h0, m0) = self.origin;
        let slope = match self.phase {
            Phase::Nominal => self.slope,
            Phase::Perturbed => self.slope + self.delta,
        };
        (slope * (human - h0) + m0).clamp(ACTION_MIN, ACTION_MAX)
    }
    fn slope(&self) -> Option<Slope> {
        Some(self.slope)
    }
    fn name(&self) -> &'static str {
        "policy gradient"
    }
}

impl TrialLearning for PolicyGradient {
    fn store_frame(&mut self, human: Action, machine: Action) {
        if self.trial.push(human, machine) {
            self.finish_trial();
        }
    }
    fn finish_trial(&mut self) {
        let ref model = self.model;
        let Some(cost) = self.trial.mean_by(|h, m| model.machine_cost(h, m)) else {
            return;
        };
        self.trial.clear();
        self.trials += 1;
        match self.phase {
            Phase::Nominal => self.nominal = Some(cost),
            Phase::Perturbed => {
                if let Some(nominal) = self.nominal.take() {
                    let gradient = (cost - nominal) / stats::guard(self.delta);
                    let slope = self.slope - self.gamma * gradient;
                    log::debug!(
                        "policy trial {}: dc/dL {:+.4}, L_M {:+.4} -> {:+.4}",
                        self.trials,
                        gradient,
                        self.slope,
                        slope
                    );
                    self.gradient = Some(gradient);
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
