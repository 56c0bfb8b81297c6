use std::path::Path;
use std::path::PathBuf;

/// Identifies the archive directory of a round, e.g. `2_Exp2_Pair3_Nominal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundLabel {
    number: usize,
    tag: Option<String>,
}

impl RoundLabel {
    pub fn new(number: usize) -> Self {
        Self { number, tag: None }
    }
    pub fn tagged(number: usize, tag: impl Into<String>) -> Self {
        Self {
            number,
            tag: Some(tag.into()).filter(|t: &String| !t.is_empty()),
        }
    }
    /// Label used by experiment `n`: round `n`, tag `Exp{n}`.
    pub fn experiment(n: usize) -> Self {
        Self::tagged(n, format!("Exp{}", n))
    }
    pub fn number(&self) -> usize {
        self.number
    }
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
    /// `<root>/round_<label>`
    pub fn directory(&self, root: &Path) -> PathBuf {
        root.join(format!("round_{}", self))
    }
}

impl std::fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tag {
            Some(ref tag) => write!(f, "{}_{}", self.number, tag),
            None => write!(f, "{}", self.number),
        }
    }
}

impl std::str::FromStr for RoundLabel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches("round_");
        let (number, tag) = match s.split_once('_') {
            Some((number, tag)) => (number, tag),
            None => (s, ""),
        };
        number
            .parse::<usize>()
            .map(|n| Self::tagged(n, tag))
            .map_err(|_| format!("invalid round label: {}", s))
    }
}
