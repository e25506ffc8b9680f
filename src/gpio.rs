//! GPIO seam
//!
//! The blinker never touches hardware directly: it asks a [`GpioBank`] to reset
//! and configure a pin by number and gets back an output handle.

use core::convert::Infallible;
use core::fmt;

use embedded_hal::digital::OutputPin;

/// GPIO number of a physical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(u8);

impl PinId {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Source of output pins
///
/// Both operations are infallible. Implementations do not validate the pin
/// number against the board; an unusable pin is a wiring problem, not a
/// runtime condition.
pub trait GpioBank {
    /// Handle driving a configured output pin
    type Output: OutputPin<Error = Infallible>;

    /// Return `pin` to its power-on default: GPIO function, input and output
    /// drivers disabled, output latch low.
    fn reset(&mut self, pin: PinId);

    /// Configure `pin` as a push-pull output and hand out its driver.
    fn configure_output(&mut self, pin: PinId) -> Self::Output;
}
