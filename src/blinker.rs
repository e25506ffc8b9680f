//! Blink loop
//!
//! Drives one output pin as a square wave: log, drive, suspend for half a
//! period, then the same for the opposite level, forever.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;
use log::{debug, info};

use crate::{config::BlinkConfig, gpio::GpioBank};

/// Log target of every record emitted by the blinker
pub const TAG: &str = "blink";

/// Half of a blink cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    On,
    Off,
}

impl Phase {
    pub const fn next(self) -> Self {
        match self {
            Phase::On => Phase::Off,
            Phase::Off => Phase::On,
        }
    }

    pub const fn level(self) -> PinState {
        match self {
            Phase::On => PinState::High,
            Phase::Off => PinState::Low,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Phase::On => "LED ON",
            Phase::Off => "LED OFF",
        }
    }
}

/// Owns the LED pin and the delay source for the lifetime of the program.
pub struct Blinker<P, D> {
    pin: P,
    delay: D,
    half_period_ms: u32,
    phase: Phase,
}

impl<P, D> Blinker<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Reset and configure `config.pin` as an output.
    ///
    /// This is the only place the pin is configured; the loop never touches
    /// the bank again.
    pub fn init<G>(gpio: &mut G, delay: D, config: BlinkConfig) -> Self
    where
        G: GpioBank<Output = P>,
    {
        gpio.reset(config.pin);
        let pin = gpio.configure_output(config.pin);
        debug!(
            target: TAG,
            "{} configured as output, half period {} ms", config.pin, config.half_period_ms
        );

        Self {
            pin,
            delay,
            half_period_ms: config.half_period_ms,
            phase: Phase::On,
        }
    }

    /// Phase the next [`step`](Self::step) will enter
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter the current phase: log it, drive the pin, then hold the level for
    /// half a period.
    pub async fn step(&mut self) {
        let phase = self.phase;

        // Log before driving the pin, matching the order the LED is reported.
        info!(target: TAG, "{}", phase.message());
        let Ok(()) = self.pin.set_state(phase.level());

        // Suspends for at least the requested time; the scheduler may add more.
        self.delay.delay_ms(self.half_period_ms).await;

        self.phase = phase.next();
    }

    /// Blink forever.
    pub async fn run(mut self) -> ! {
        loop {
            self.step().await;
        }
    }
}
