use super::*;
use crate::cost::CostModel;

/// Gradient descent in action space.
///
/// Every frame takes one step down ∂c_M/∂m at the current human action
/// and clamps the result to the action range. No trial structure.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    model: CostModel,
    action: Action,
    alpha: f64,
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new(CostModel::default(), GRADIENT_ALPHA, 0.0)
    }
}

impl GradientDescent {
    pub fn new(model: CostModel, alpha: f64, start: Action) -> Self {
        Self {
            model,
            alpha,
            action: start.clamp(ACTION_MIN, ACTION_MAX),
        }
    }
    pub fn action(&self) -> Action {
        self.action
    }
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Adaptation for GradientDescent {
    fn get_action(&mut self, human: Action) -> Action {
        let gradient = self.model.machine_gradient(human, self.action);
        self.action = (self.action - self.alpha * gradient).clamp(ACTION_MIN, ACTION_MAX);
        self.action
    }
    fn name(&self) -> &'static str {
        "gradient descent"
    }
}
