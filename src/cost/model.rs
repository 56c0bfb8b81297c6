use super::*;
use crate::*;

/// The human/machine cost pair.
///
/// Constructed once and handed by value to every component that needs it:
/// the adaptation rules, the round driver, and the offline analyzer all see
/// the same coefficients. `Default` is the published surface used by the
/// experiments; the human surface carries a constant offset so that its
/// minimum over the plane is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    human: Quadratic,
    machine: Quadratic,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(
            Quadratic {
                hh: 1. / 2.,
                mm: 7. / 30.,
                hm: -1. / 3.,
                h1: 2. / 15.,
                m1: -22. / 75.,
                c0: 12. / 125.,
            },
            Quadratic {
                hh: 1.,
                mm: 1. / 2.,
                hm: -1.,
                h1: 0.,
                m1: 0.,
                c0: 0.,
            },
        )
    }
}

impl CostModel {
    pub const fn new(human: Quadratic, machine: Quadratic) -> Self {
        Self { human, machine }
    }
    pub fn human(&self) -> &Quadratic {
        &self.human
    }
    pub fn machine(&self) -> &Quadratic {
        &self.machine
    }

    pub fn human_cost(&self, h: Action, m: Action) -> Cost {
        self.human.cost(h, m)
    }
    pub fn machine_cost(&self, h: Action, m: Action) -> Cost {
        self.machine.cost(h, m)
    }
    /// ∂c_H/∂h, the direction a myopic human would descend.
    pub fn human_gradient(&self, h: Action, m: Action) -> f64 {
        self.human.dh(h, m)
    }
    /// ∂c_M/∂m, the machine's own-action gradient.
    pub fn machine_gradient(&self, h: Action, m: Action) -> f64 {
        self.machine.dm(h, m)
    }

    /// Human action minimizing c_H for a fixed machine action.
    pub fn human_best_response(&self, m: Action) -> Action {
        let (a, b) = self.human.h_response();
        a + b * m
    }
    /// Machine action minimizing c_M for a fixed human action.
    pub fn machine_best_response(&self, h: Action) -> Action {
        let (a, b) = self.machine.m_response();
        a + b * h
    }
    /// Intersection of both best responses.
    pub fn nash(&self) -> (Action, Action) {
        // h = ah + bh·m, m = am + bm·h
        let (ah, bh) = self.human.h_response();
        let (am, bm) = self.machine.m_response();
        let h = (ah + bh * am) / stats::guard(1.0 - bh * bm);
        let m = am + bm * h;
        (h, m)
    }
    /// Joint minimizer of the machine cost; the reference point (h0, m0)
    /// the policy-space rules pivot around.
    pub fn machine_optimum(&self) -> (Action, Action) {
        self.machine.stationary()
    }
    /// Machine policy slope that is optimal when the human is conjectured
    /// to respond to machine actions with slope `l_h`.
    ///
    /// Stationarity of c_M(h(m), m) with dh/dm = l_h gives
    /// L_M = -(hm + 2·hh·l_h) / (2·mm + hm·l_h).
    pub fn conjectural_slope(&self, l_h: Slope) -> Slope {
        let q = &self.machine;
        -(q.hm + 2.0 * q.hh * l_h) / stats::guard(2.0 * q.mm + q.hm * l_h)
    }
    /// Largest human cost over the action square; scales the display bar.
    pub fn human_ceiling(&self) -> Cost {
        self.human.ceiling()
    }
}
