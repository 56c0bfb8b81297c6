use super::*;
use crate::*;

/// Human driven by a pointing device.
///
/// `position` yields the pointer's horizontal pixel each frame; the
/// windowing front end owns the device and hands it over as a closure.
pub struct Pointer<F>
where
    F: FnMut() -> f64,
{
    screen: Screen,
    position: F,
}

impl<F> Pointer<F>
where
    F: FnMut() -> f64,
{
    pub fn new(screen: Screen, position: F) -> Self {
        Self { screen, position }
    }
}

impl<F> Human for Pointer<F>
where
    F: FnMut() -> f64,
{
    fn sense(&mut self, _: Action) -> Action {
        self.screen
            .pointer((self.position)())
            .clamp(ACTION_MIN, ACTION_MAX)
    }
}
