use crate::*;

/// Display geometry for the pointer-driven game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    /// Horizontal pointer pixel mapped linearly from [0, width] onto [-1, 1].
    pub fn pointer(&self, x: f64) -> Action {
        x / (self.width / 2.0) - 1.0
    }
    /// Height of the cost bar in pixels. The square root keeps small
    /// costs visible; `ceiling` maps to the full screen height.
    pub fn bar(&self, cost: Cost, ceiling: Cost) -> f64 {
        let root = cost.max(0.0).sqrt();
        self.height * root / ceiling.max(EPSILON).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_spans_action_range() {
        let screen = Screen::new(1920.0, 1080.0);
        assert_eq!(screen.pointer(0.0), -1.0);
        assert_eq!(screen.pointer(960.0), 0.0);
        assert_eq!(screen.pointer(1920.0), 1.0);
        assert_eq!(screen.pointer(480.0), -0.5);
    }

    #[test]
    fn bar_is_square_root_scaled() {
        let screen = Screen::new(800.0, 400.0);
        assert_eq!(screen.bar(0.0, 4.0), 0.0);
        assert_eq!(screen.bar(1.0, 4.0), 200.0);
        assert_eq!(screen.bar(4.0, 4.0), 400.0);
        assert_eq!(screen.bar(-1e-12, 4.0), 0.0);
    }
}
