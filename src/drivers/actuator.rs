//! Binary output actuator (LED).
//!
//! Holds the *desired* state separately from the physical pin. Callers flip
//! or set the desired state freely; only [`Actuator::synchronize`] touches
//! the hardware, so the pin always reflects `desired` once it returns.
//!
//! ## Dual-target design
//!
//! The pin is any [`OutputPort`]: a GPIO adapter on ESP-IDF, a recording
//! mock on host/test.

use embedded_hal::digital::PinState;

use crate::app::ports::OutputPort;

pub struct Actuator<O: OutputPort> {
    output: O,
    desired: bool,
    /// Level most recently written to the pin.
    applied: bool,
}

impl<O: OutputPort> Actuator<O> {
    /// Take ownership of `output` and drive it to `initially_on` immediately.
    pub fn new(output: O, initially_on: bool) -> Self {
        let mut actuator = Self {
            output,
            desired: initially_on,
            applied: initially_on,
        };
        actuator.synchronize();
        actuator
    }

    /// Write `desired` to the physical output.
    pub fn synchronize(&mut self) {
        self.output.write_level(PinState::from(self.desired));
        self.applied = self.desired;
    }

    /// Flip the desired state. Takes effect on the next [`synchronize`](Self::synchronize).
    pub fn toggle(&mut self) {
        self.desired = !self.desired;
    }

    /// Set the desired state. Takes effect on the next [`synchronize`](Self::synchronize).
    pub fn set_desired(&mut self, on: bool) {
        self.desired = on;
    }

    pub fn desired(&self) -> bool {
        self.desired
    }

    /// State the physical output was last driven to.
    pub fn is_on(&self) -> bool {
        self.applied
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
