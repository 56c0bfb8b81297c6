use super::*;
use crate::cost::CostModel;

/// The machine player: exactly one adaptation rule.
///
/// Whether completed frames feed a trial learner is decided by the variant,
/// once, when the machine is built.
#[derive(Debug, Clone)]
pub enum Machine {
    Gradient(GradientDescent),
    Conjectural(ConjecturalVariation),
    Policy(PolicyGradient),
}

impl Machine {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Gradient(_) => Algorithm::Gradient,
            Self::Conjectural(_) => Algorithm::Conjectural,
            Self::Policy(_) => Algorithm::Policy,
        }
    }
    /// The trial-learning capability, if this rule has one.
    pub fn learner(&self) -> Option<&dyn TrialLearning> {
        match self {
            Self::Gradient(_) => None,
            Self::Conjectural(rule) => Some(rule),
            Self::Policy(rule) => Some(rule),
        }
    }
    pub fn learner_mut(&mut self) -> Option<&mut dyn TrialLearning> {
        match self {
            Self::Gradient(_) => None,
            Self::Conjectural(rule) => Some(rule),
            Self::Policy(rule) => Some(rule),
        }
    }
    /// Hand a completed frame to the trial learner; continuous rules ignore it.
    pub fn observe(&mut self, human: Action, machine: Action) {
        if let Some(learner) = self.learner_mut() {
            learner.store_frame(human, machine);
        }
    }
    fn rule(&self) -> &dyn Adaptation {
        match self {
            Self::Gradient(rule) => rule,
            Self::Conjectural(rule) => rule,
            Self::Policy(rule) => rule,
        }
    }
    fn rule_mut(&mut self) -> &mut dyn Adaptation {
        match self {
            Self::Gradient(rule) => rule,
            Self::Conjectural(rule) => rule,
            Self::Policy(rule) => rule,
        }
    }
}

impl Adaptation for Machine {
    fn get_action(&mut self, human: Action) -> Action {
        self.rule_mut().get_action(human)
    }
    fn slope(&self) -> Option<Slope> {
        self.rule().slope()
    }
    fn name(&self) -> &'static str {
        self.rule().name()
    }
}

impl From<GradientDescent> for Machine {
    fn from(rule: GradientDescent) -> Self {
        Self::Gradient(rule)
    }
}
impl From<ConjecturalVariation> for Machine {
    fn from(rule: ConjecturalVariation) -> Self {
        Self::Conjectural(rule)
    }
}
impl From<PolicyGradient> for Machine {
    fn from(rule: PolicyGradient) -> Self {
        Self::Policy(rule)
    }
}

/// Selects an adaptation rule; experiments 1, 2, 3 use them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Gradient,
    Conjectural,
    Policy,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::Gradient, Self::Conjectural, Self::Policy];

    /// Build the rule with default tuning over the given model.
    pub fn machine(self, model: CostModel) -> Machine {
        match self {
            Self::Gradient => GradientDescent::new(model, GRADIENT_ALPHA, 0.0).into(),
            Self::Conjectural => ConjecturalVariation::new(
                model,
                CONJECTURAL_SLOPE,
                CONJECTURAL_DELTA,
                MINI_ROUND_FRAMES,
            )
            .into(),
            Self::Policy => PolicyGradient::new(
                model,
                POLICY_SLOPE,
                POLICY_DELTA,
                POLICY_GAMMA,
                MINI_ROUND_FRAMES,
            )
            .into(),
        }
    }
    pub fn experiment(self) -> usize {
        match self {
            Self::Gradient => 1,
            Self::Conjectural => 2,
            Self::Policy => 3,
        }
    }
    pub fn from_experiment(n: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.experiment() == n)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gradient => write!(f, "gradient"),
            Self::Conjectural => write!(f, "conjectural"),
            Self::Policy => write!(f, "policy"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gradient" | "1" => Ok(Self::Gradient),
            "conjectural" | "2" => Ok(Self::Conjectural),
            "policy" | "3" => Ok(Self::Policy),
            other => Err(format!("unknown algorithm: {}", other)),
        }
    }
}
