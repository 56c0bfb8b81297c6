//! Human input channel.
//!
//! The round driver samples one human action per frame through [`Human`].
//! A windowed front end supplies pointer positions to [`Pointer`];
//! headless sessions and tests use the simulated [`Responder`] or a
//! [`Steady`] hand.

mod pointer;
mod responder;
mod screen;

pub use pointer::*;
pub use responder::*;
pub use screen::*;

use crate::*;

/// Source of one human action per frame.
pub trait Human {
    /// The human's action for this frame, given the machine action shown last frame.
    fn sense(&mut self, machine: Action) -> Action;
}

/// A human holding the pointer still.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steady(pub Action);

impl Human for Steady {
    fn sense(&mut self, _: Action) -> Action {
        self.0
    }
}
