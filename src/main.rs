//! Remote LED Firmware: Main Entry Point
//!
//! A bare polling loop couples one debounced push-button to one LED.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  HalInput / HalOutput   Esp32TimeAdapter   LogEventSink    │
//! │  (Input+OutputPort)     (ClockPort)        (EventSink)     │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │        ControlLoop (pure logic)                  │      │
//! │  │  DebouncedButton · Actuator                      │      │
//! │  └──────────────────────────────────────────────────┘      │
//! │                                                            │
//! │  RemoteLink (commands in, output state out)                │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{Pin, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use remote_led::adapters::gpio::{HalInput, HalOutput};
use remote_led::adapters::log_sink::LogEventSink;
use remote_led::adapters::time::Esp32TimeAdapter;
use remote_led::app::ports::ClockPort;
use remote_led::app::service::ControlLoop;
use remote_led::config::SwitchConfig;
use remote_led::error::Error;
use remote_led::remote::RemoteLink;

/// Shared with any task that wants to drive or observe the LED remotely.
static REMOTE: RemoteLink = RemoteLink::new();

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Remote LED v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SwitchConfig::default();
    config.validate().map_err(Error::from)?;

    // ── 3. Pins ───────────────────────────────────────────────
    let peripherals = Peripherals::take().context("taking peripherals")?;
    let button_pin = peripherals.pins.gpio23;
    let led_pin = peripherals.pins.gpio26;
    if button_pin.pin() != config.button_gpio || led_pin.pin() != config.led_gpio {
        return Err(Error::Init("config pins differ from board wiring").into());
    }

    // The button has an external pull-up; no internal pull is configured.
    let button = PinDriver::input(button_pin).context("configuring button input")?;
    let led = PinDriver::output(led_pin).context("configuring LED output")?;

    let input = HalInput::new(button, config.button_gpio, !config.active_level());
    let output = HalOutput::new(led, config.led_gpio);

    // ── 4. Control loop ───────────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();
    let mut control = ControlLoop::new(&config, input, output);
    REMOTE.publish(control.output_on());
    info!(
        "Button GPIO{} ({}ms debounce), LED GPIO{}",
        control.button().gpio(),
        control.button().debounce_ms(),
        config.led_gpio
    );
    control.start(&mut sink);

    info!("System ready. Entering poll loop.");

    loop {
        control.tick_with_remote(clock.now_ms(), &REMOTE, &mut sink);
        // Yield so the idle task can feed the task watchdog.
        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}

