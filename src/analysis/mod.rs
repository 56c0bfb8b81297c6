//! Offline reports over persisted rounds.
//!
//! Every archive under a round directory is one run of that round.
//! Runs are trimmed to a common length, reduced to an elementwise median,
//! smoothed, and written as CSV (and PNG with the `server` feature) next
//! to a JSON summary.

mod analyzer;
mod dataset;
#[cfg(feature = "server")]
mod plot;
mod reaction;
mod report;
mod summary;

pub use analyzer::*;
pub use dataset::*;
#[cfg(feature = "server")]
pub use plot::*;
pub use reaction::*;
pub use report::*;
pub use summary::*;
