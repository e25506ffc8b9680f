#![cfg_attr(not(test), no_std)]

//! blinky - drives one GPIO line as a fixed-period square wave
//!
//! The blink loop is written against `embedded-hal` traits so it runs on the
//! ESP32-C3 (`firmware` feature) and against mocks on the host.

pub mod blinker;
pub mod config;
pub mod error;
pub mod gpio;

#[cfg(feature = "firmware")]
pub mod esp;

#[cfg(test)]
mod mock;

pub use blinker::{Blinker, Phase, TAG};
pub use config::BlinkConfig;
pub use error::ConfigError;
pub use gpio::{GpioBank, PinId};
