use super::*;
use crate::cost::CostModel;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Simulated participant.
///
/// Each frame moves a fraction `rate` of the way toward its best response
/// to the machine's last action, plus uniform jitter of width `noise`.
/// Stands in for a person in headless sessions.
#[derive(Debug, Clone)]
pub struct Responder {
    model: CostModel,
    action: Action,
    rate: f64,
    noise: f64,
    rng: SmallRng,
}

impl Responder {
    pub fn new(model: CostModel, rate: f64, noise: f64, seed: u64) -> Self {
        Self {
            model,
            action: 0.0,
            rate: rate.clamp(0.0, 1.0),
            noise: noise.abs(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn starting_at(self, action: Action) -> Self {
        Self {
            action: action.clamp(ACTION_MIN, ACTION_MAX),
            ..self
        }
    }
    pub fn action(&self) -> Action {
        self.action
    }
}

impl Human for Responder {
    fn sense(&mut self, machine: Action) -> Action {
        let target = self.model.human_best_response(machine);
        let jitter = if self.noise > 0.0 {
            self.noise * self.rng.random_range(-1.0..=1.0f64)
        } else {
            0.0
        };
        self.action = (self.action + self.rate * (target - self.action) + jitter)
            .clamp(ACTION_MIN, ACTION_MAX);
        self.action
    }
}
