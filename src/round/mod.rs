//! Frame loop for live rounds.
//!
//! One thread, one frame at a time: sense the human, ask the machine,
//! score both, record, let the machine learn, then sleep out the rest of
//! the frame budget. A quit request ends the round at the next frame
//! boundary and the frames already played are still written to disk.

mod outcome;
mod pacer;
mod round;
mod session;

pub use outcome::*;
pub use pacer::*;
pub use round::*;
pub use session::*;
