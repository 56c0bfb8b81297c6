//! Per-round frame capture and persistence.
//!
//! - [`Recorder`]: Fixed-capacity buffer of frame samples for one round
//! - [`Archive`]: Compressed on-disk form of a finished round
//! - [`RoundLabel`]: Round number plus optional experiment tag
//! - [`hash`]: Random archive identifiers

mod archive;
mod hash;
mod label;
mod recorder;

pub use archive::*;
pub use hash::*;
pub use label::*;
pub use recorder::*;
