/// Half of a trial pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Played under the unmodified policy.
    #[default]
    Nominal,
    /// Played under a small fixed perturbation.
    Perturbed,
}

impl Phase {
    pub fn flip(self) -> Self {
        match self {
            Self::Nominal => Self::Perturbed,
            Self::Perturbed => Self::Nominal,
        }
    }
    pub fn is_perturbed(self) -> bool {
        self == Self::Perturbed
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nominal => write!(f, "Nominal"),
            Self::Perturbed => write!(f, "Perturbed"),
        }
    }
}
