use crate::cost::CostModel;
use crate::*;

/// Best-response curves of both players, sampled over the action range.
/// Points are (h, m) pairs; the two curves cross at the Nash point.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    human: Vec<(Action, Action)>,
    machine: Vec<(Action, Action)>,
    nash: (Action, Action),
}

impl Reaction {
    pub fn new(model: &CostModel, points: usize) -> Self {
        Self {
            human: Self::axis(points)
                .map(|m| (model.human_best_response(m), m))
                .collect(),
            machine: Self::axis(points)
                .map(|h| (h, model.machine_best_response(h)))
                .collect(),
            nash: model.nash(),
        }
    }
    /// `points` evenly spaced values spanning [ACTION_MIN, ACTION_MAX].
    fn axis(points: usize) -> impl Iterator<Item = Action> {
        let step = (ACTION_MAX - ACTION_MIN) / points.saturating_sub(1).max(1) as f64;
        (0..points).map(move |i| ACTION_MIN + step * i as f64)
    }
    /// h = BR_H(m) for m across the range.
    pub fn human(&self) -> &[(Action, Action)] {
        &self.human
    }
    /// m = BR_M(h) for h across the range.
    pub fn machine(&self) -> &[(Action, Action)] {
        &self.machine
    }
    pub fn nash(&self) -> (Action, Action) {
        self.nash
    }
}

impl Default for Reaction {
    fn default() -> Self {
        Self::new(&CostModel::default(), REACTION_POINTS)
    }
}
