//! Configuration errors

use core::fmt;

/// Errors raised while loading [`BlinkConfig`](crate::BlinkConfig)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `LED_GPIO` is not a GPIO number
    InvalidPin(&'static str),
    /// `BLINK_HALF_PERIOD_MS` is not a number of milliseconds
    InvalidHalfPeriod(&'static str),
    /// `BLINK_HALF_PERIOD_MS` is zero
    ZeroHalfPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPin(raw) => write!(f, "invalid LED_GPIO value {raw:?}"),
            ConfigError::InvalidHalfPeriod(raw) => {
                write!(f, "invalid BLINK_HALF_PERIOD_MS value {raw:?}")
            }
            ConfigError::ZeroHalfPeriod => f.write_str("BLINK_HALF_PERIOD_MS must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}
