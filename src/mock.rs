//! Mock hardware for host tests
//!
//! Pin operations, delays and log records all land in one per-thread trace so
//! tests can check their relative order.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::sync::Once;

use embassy_futures::yield_now;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::gpio::{GpioBank, PinId};

/// Something observable happened at the hardware or logging boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Reset(PinId),
    ConfigureOutput(PinId),
    Level { state: PinState, at_ms: u64 },
    Log {
        level: Level,
        target: String,
        message: String,
    },
}

thread_local! {
    static TRACE: RefCell<Vec<Event>> = const { RefCell::new(Vec::new()) };
    static NOW_NS: Cell<u64> = const { Cell::new(0) };
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

/// Clear this thread's trace and rewind the fake clock. Installs the capturing
/// logger on first use.
pub fn reset() {
    INIT_LOGGER.call_once(|| {
        // Only fails if another logger is installed, which tests never do.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    TRACE.with(|trace| trace.borrow_mut().clear());
    NOW_NS.with(|now| now.set(0));
}

pub fn events() -> Vec<Event> {
    TRACE.with(|trace| trace.borrow().clone())
}

/// Every level written so far, with the fake time it was written at
pub fn levels() -> Vec<(PinState, u64)> {
    TRACE.with(|trace| {
        trace
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Level { state, at_ms } => Some((*state, *at_ms)),
                _ => None,
            })
            .collect()
    })
}

pub fn level_count() -> usize {
    TRACE.with(|trace| {
        trace
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Level { .. }))
            .count()
    })
}

pub fn now_ms() -> u64 {
    NOW_NS.with(|now| now.get()) / 1_000_000
}

fn record(event: Event) {
    TRACE.with(|trace| trace.borrow_mut().push(event));
}

/// GPIO bank handing out [`MockPin`]s
#[derive(Debug, Default)]
pub struct MockGpio;

impl GpioBank for MockGpio {
    type Output = MockPin;

    fn reset(&mut self, pin: PinId) {
        record(Event::Reset(pin));
    }

    fn configure_output(&mut self, pin: PinId) -> MockPin {
        record(Event::ConfigureOutput(pin));
        MockPin
    }
}

#[derive(Debug)]
pub struct MockPin;

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        record(Event::Level {
            state: PinState::Low,
            at_ms: now_ms(),
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        record(Event::Level {
            state: PinState::High,
            at_ms: now_ms(),
        });
        Ok(())
    }
}

/// Delay that advances the fake clock instead of sleeping
///
/// Yields once per call so a never-ending loop still hands control back to
/// the executor.
#[derive(Debug, Default)]
pub struct FakeDelay;

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        NOW_NS.with(|now| now.set(now.get() + u64::from(ns)));
        yield_now().await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        NOW_NS.with(|now| now.set(now.get() + u64::from(ms) * 1_000_000));
        yield_now().await;
    }
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, entry: &Record) {
        record(Event::Log {
            level: entry.level(),
            target: entry.target().to_string(),
            message: entry.args().to_string(),
        });
    }

    fn flush(&self) {}
}
