// Blinky
// 1. Wire an LED (with resistor) to GPIO13, or pick another pin with LED_GPIO
// 2. Run the app
// cargo firmware
// LED_GPIO=8 BLINK_HALF_PERIOD_MS=250 cargo firmware
#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use blinky::{BlinkConfig, Blinker, esp::EspGpio};
use embassy_executor::Spawner;
use embassy_time::Delay;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock, interrupt::software::SoftwareInterruptControl, timer::timg::TimerGroup,
};
use log::info;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    let blink_config = BlinkConfig::from_env().expect("Invalid blink configuration");
    info!(
        "Blinking {} every {} ms",
        blink_config.pin, blink_config.half_period_ms
    );

    let mut gpio = EspGpio::new(peripherals.IO_MUX);
    Blinker::init(&mut gpio, Delay, blink_config).run().await
}
