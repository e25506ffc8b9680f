//! ESP32-C3 GPIO bank backed by `esp-hal`

use esp_hal::{
    gpio::{AnyPin, DriveMode, Flex, Level, OutputConfig},
    peripherals::IO_MUX,
};

use crate::gpio::{GpioBank, PinId};

/// Hands out pins by GPIO number.
///
/// Holding the `IO_MUX` singleton means nothing else in the program can route
/// pins while the bank exists.
pub struct EspGpio<'d> {
    _io_mux: IO_MUX<'d>,
}

impl<'d> EspGpio<'d> {
    pub fn new(io_mux: IO_MUX<'d>) -> Self {
        Self { _io_mux: io_mux }
    }

    fn flex(&mut self, pin: PinId) -> Flex<'static> {
        // SAFETY: the bank owns IO_MUX and the firmware hands the bank no pin
        // singletons, so the stolen pin has no other driver. The pin number is
        // not validated.
        Flex::new(unsafe { AnyPin::steal(pin.number()) })
    }
}

impl GpioBank for EspGpio<'_> {
    type Output = Flex<'static>;

    fn reset(&mut self, pin: PinId) {
        let mut flex = self.flex(pin);
        flex.set_output_enable(false);
        flex.set_input_enable(false);
        flex.set_level(Level::Low);
    }

    fn configure_output(&mut self, pin: PinId) -> Flex<'static> {
        let mut flex = self.flex(pin);
        flex.apply_output_config(&OutputConfig::default().with_drive_mode(DriveMode::PushPull));
        flex.set_output_enable(true);
        flex
    }
}
