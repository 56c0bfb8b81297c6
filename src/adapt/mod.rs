//! Machine adaptation rules.
//!
//! Every rule answers a human action with a machine action once per frame.
//! Rules that learn from trials additionally consume completed frames and
//! update their policy slope at the end of each nominal/perturbed pair.
//!
//! - [`GradientDescent`]: Continuous descent on the machine's own cost
//! - [`ConjecturalVariation`]: Estimates the human's response slope, then
//!   best-responds in policy space
//! - [`PolicyGradient`]: Finite-difference descent on the policy slope
//! - [`Machine`]: Exactly one active rule, with its capabilities fixed by variant

mod conjectural;
mod gradient;
mod machine;
mod phase;
mod policy;
mod trial;

pub use conjectural::*;
pub use gradient::*;
pub use machine::*;
pub use phase::*;
pub use policy::*;
pub use trial::*;

use crate::*;

/// Produces a machine action per frame.
pub trait Adaptation {
    /// Machine action in answer to the current human action.
    fn get_action(&mut self, human: Action) -> Action;
    /// Current policy slope, for rules that learn one.
    fn slope(&self) -> Option<Slope> {
        None
    }
    fn name(&self) -> &'static str;
}

/// Rules that learn from averaged trials of completed frames.
///
/// Trials alternate nominal → perturbed. The nominal half stashes its
/// statistic; the perturbed half combines it with the stash and updates
/// the policy.
pub trait TrialLearning: Adaptation {
    /// Record one completed frame. Finishes the trial once the
    /// configured number of frames has accumulated.
    fn store_frame(&mut self, human: Action, machine: Action);
    /// Consume the accumulated frames and advance the nominal/perturbed
    /// alternation. A trial without frames is ignored.
    fn finish_trial(&mut self);
    /// Which half of the pair is being played.
    fn phase(&self) -> Phase;
    /// Trials finished so far.
    fn trials(&self) -> usize;
    /// Policy updates applied so far.
    fn updates(&self) -> usize;
}
