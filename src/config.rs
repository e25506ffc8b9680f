//! Blink configuration
//!
//! Values are baked in at build time, e.g.
//! `LED_GPIO=8 BLINK_HALF_PERIOD_MS=250 cargo firmware`.

use crate::{error::ConfigError, gpio::PinId};

const LED_GPIO: Option<&'static str> = option_env!("LED_GPIO");
const BLINK_HALF_PERIOD_MS: Option<&'static str> = option_env!("BLINK_HALF_PERIOD_MS");

/// GPIO13 in the reference wiring
pub const DEFAULT_PIN: PinId = PinId::new(13);
pub const DEFAULT_HALF_PERIOD_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    /// Pin driving the LED
    pub pin: PinId,
    /// Time each level is held, in milliseconds
    pub half_period_ms: u32,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN,
            half_period_ms: DEFAULT_HALF_PERIOD_MS,
        }
    }
}

impl BlinkConfig {
    /// Load the configuration captured from the build environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(LED_GPIO, BLINK_HALF_PERIOD_MS)
    }

    /// Build a configuration from raw values, using the default for any that
    /// are missing.
    pub fn parse(
        pin: Option<&'static str>,
        half_period_ms: Option<&'static str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = pin {
            let number = raw
                .trim()
                .parse::<u8>()
                .map_err(|_| ConfigError::InvalidPin(raw))?;
            config.pin = PinId::new(number);
        }

        if let Some(raw) = half_period_ms {
            let ms = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidHalfPeriod(raw))?;
            if ms == 0 {
                return Err(ConfigError::ZeroHalfPeriod);
            }
            config.half_period_ms = ms;
        }

        Ok(config)
    }
}
