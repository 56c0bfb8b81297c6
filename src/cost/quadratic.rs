use crate::*;

/// One player's cost surface over the joint action (h, m).
///
/// c(h, m) = hh·h² + mm·m² + hm·h·m + h1·h + m1·m + c0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub hh: f64,
    pub mm: f64,
    pub hm: f64,
    pub h1: f64,
    pub m1: f64,
    pub c0: f64,
}

impl Quadratic {
    pub fn cost(&self, h: Action, m: Action) -> Cost {
        self.hh * h * h + self.mm * m * m + self.hm * h * m + self.h1 * h + self.m1 * m + self.c0
    }
    /// ∂c/∂h
    pub fn dh(&self, h: Action, m: Action) -> f64 {
        2.0 * self.hh * h + self.hm * m + self.h1
    }
    /// ∂c/∂m
    pub fn dm(&self, h: Action, m: Action) -> f64 {
        2.0 * self.mm * m + self.hm * h + self.m1
    }
    /// argmin over h for fixed m, as (intercept, slope) of h = a + b·m.
    pub fn h_response(&self) -> (f64, f64) {
        let curvature = stats::guard(2.0 * self.hh);
        (-self.h1 / curvature, -self.hm / curvature)
    }
    /// argmin over m for fixed h, as (intercept, slope) of m = a + b·h.
    pub fn m_response(&self) -> (f64, f64) {
        let curvature = stats::guard(2.0 * self.mm);
        (-self.m1 / curvature, -self.hm / curvature)
    }
    /// Stationary point of the full surface (joint minimizer when convex).
    pub fn stationary(&self) -> (Action, Action) {
        // [2hh  hm ] [h]   [-h1]
        // [hm   2mm] [m] = [-m1]
        let det = stats::guard(4.0 * self.hh * self.mm - self.hm * self.hm);
        let h = (-self.h1 * 2.0 * self.mm + self.m1 * self.hm) / det;
        let m = (-self.m1 * 2.0 * self.hh + self.h1 * self.hm) / det;
        (h, m)
    }
    /// Largest value over the action square. Exact for convex surfaces,
    /// whose maximum over a box lies on a corner.
    pub fn ceiling(&self) -> Cost {
        [
            (ACTION_MIN, ACTION_MIN),
            (ACTION_MIN, ACTION_MAX),
            (ACTION_MAX, ACTION_MIN),
            (ACTION_MAX, ACTION_MAX),
        ]
        .into_iter()
        .map(|(h, m)| self.cost(h, m))
        .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOWL: Quadratic = Quadratic {
        hh: 1.0,
        mm: 1.0,
        hm: 0.0,
        h1: -2.0,
        m1: 4.0,
        c0: 0.0,
    };

    #[test]
    fn derivatives_match_finite_differences() {
        let q = Quadratic {
            hh: 0.5,
            mm: 7. / 30.,
            hm: -1. / 3.,
            h1: 2. / 15.,
            m1: -22. / 75.,
            c0: 0.0,
        };
        let eps = 1e-6;
        for (h, m) in [(0.3, -0.4), (-1.0, 1.0), (0.0, 0.0), (0.9, 0.2)] {
            let dh = (q.cost(h + eps, m) - q.cost(h - eps, m)) / (2. * eps);
            let dm = (q.cost(h, m + eps) - q.cost(h, m - eps)) / (2. * eps);
            assert!((dh - q.dh(h, m)).abs() < 1e-6);
            assert!((dm - q.dm(h, m)).abs() < 1e-6);
        }
    }

    #[test]
    fn stationary_point_of_bowl() {
        let (h, m) = BOWL.stationary();
        assert!((h - 1.0).abs() < 1e-12);
        assert!((m + 2.0).abs() < 1e-12);
        assert!(BOWL.dh(h, m).abs() < 1e-12);
        assert!(BOWL.dm(h, m).abs() < 1e-12);
    }

    #[test]
    fn responses_of_bowl() {
        assert_eq!(BOWL.h_response(), (1.0, -0.0));
        assert_eq!(BOWL.m_response(), (-2.0, -0.0));
    }

    #[test]
    fn ceiling_of_bowl() {
        // corner (-1, 1): 1 + 1 + 2 + 4
        assert_eq!(BOWL.ceiling(), 8.0);
    }
}
