use crate::*;

/// Frames collected within one trial, cleared at every trial boundary.
#[derive(Debug, Clone)]
pub struct Trial {
    frames: Vec<(Action, Action)>,
    size: usize,
}

impl Trial {
    /// `size` frames complete a trial; zero is treated as one.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            frames: Vec::with_capacity(size),
            size,
        }
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    /// Record a frame; true once the trial is complete.
    pub fn push(&mut self, human: Action, machine: Action) -> bool {
        self.frames.push((human, machine));
        self.frames.len() >= self.size
    }
    /// Mean (human, machine) action.
    pub fn mean(&self) -> Option<(Action, Action)> {
        let h = stats::mean(self.frames.iter().map(|&(h, _)| h))?;
        let m = stats::mean(self.frames.iter().map(|&(_, m)| m))?;
        Some((h, m))
    }
    /// Mean of a per-frame statistic.
    pub fn mean_by<F>(&self, f: F) -> Option<f64>
    where
        F: Fn(Action, Action) -> f64,
    {
        stats::mean(self.frames.iter().map(|&(h, m)| f(h, m)))
    }
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_at_size() {
        let mut trial = Trial::new(3);
        assert!(!trial.push(0.1, 0.2));
        assert!(!trial.push(0.2, 0.2));
        assert!(trial.push(0.3, 0.2));
        assert_eq!(trial.len(), 3);
    }

    #[test]
    fn zero_size_completes_every_frame() {
        let mut trial = Trial::new(0);
        assert_eq!(trial.size(), 1);
        assert!(trial.push(0.0, 0.0));
    }

    #[test]
    fn averages() {
        let mut trial = Trial::new(4);
        assert_eq!(trial.mean(), None);
        trial.push(1.0, -1.0);
        trial.push(0.0, 0.5);
        assert_eq!(trial.mean(), Some((0.5, -0.25)));
        assert_eq!(trial.mean_by(|h, m| h * m), Some(-0.5));
        trial.clear();
        assert!(trial.is_empty());
        assert_eq!(trial.mean_by(|h, _| h), None);
    }
}
