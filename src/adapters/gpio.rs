//! GPIO adapters: bridge `embedded-hal` pins to the domain port traits.
//!
//! Any pin implementing [`embedded_hal::digital::InputPin`] /
//! [`OutputPin`] (an ESP-IDF `PinDriver` on hardware, a mock pin on host)
//! can back the control loop.
//!
//! The ports are infallible, so pin errors stop here:
//!
//! - A failed read reports the last good level. To the debouncer a flaky
//!   pin looks like "no change", never like an edge.
//! - A failed write is logged and dropped; the next synchronize retries it.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::{InputPort, OutputPort};

/// Input port backed by an `embedded-hal` pin.
pub struct HalInput<P: InputPin> {
    pin: P,
    gpio: i32,
    last_good: PinState,
    read_failures: u32,
}

impl<P: InputPin> HalInput<P> {
    /// Wrap `pin`. `idle_level` is reported if the very first read fails.
    pub fn new(pin: P, gpio: i32, idle_level: PinState) -> Self {
        Self {
            pin,
            gpio,
            last_good: idle_level,
            read_failures: 0,
        }
    }

    /// Reads that failed since construction.
    pub fn read_failures(&self) -> u32 {
        self.read_failures
    }
}

impl<P: InputPin> InputPort for HalInput<P> {
    fn read_level(&mut self) -> PinState {
        match self.pin.is_high() {
            Ok(high) => {
                self.last_good = PinState::from(high);
            }
            Err(e) => {
                self.read_failures = self.read_failures.saturating_add(1);
                warn!("GPIO{} read failed: {:?}", self.gpio, e);
            }
        }
        self.last_good
    }
}

/// Output port backed by an `embedded-hal` pin.
pub struct HalOutput<P: OutputPin> {
    pin: P,
    gpio: i32,
    write_failures: u32,
}

impl<P: OutputPin> HalOutput<P> {
    pub fn new(pin: P, gpio: i32) -> Self {
        Self {
            pin,
            gpio,
            write_failures: 0,
        }
    }

    /// Writes that failed since construction.
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }
}

impl<P: OutputPin> OutputPort for HalOutput<P> {
    fn write_level(&mut self, level: PinState) {
        if let Err(e) = self.pin.set_state(level) {
            self.write_failures = self.write_failures.saturating_add(1);
            warn!("GPIO{} write failed: {:?}", self.gpio, e);
        }
    }
}
