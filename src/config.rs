//! System configuration parameters
//!
//! Pin identities, debounce window, and loop pacing for the remote LED
//! firmware. Values are compiled in; nothing is persisted across resets.

use embedded_hal::digital::PinState;
use serde::{Deserialize, Serialize};

use crate::drivers::button::DEFAULT_DEBOUNCE_MS;
use crate::error::ConfigError;
use crate::pins;

/// Upper bound on the debounce window. Anything longer reads as a dead button.
const MAX_DEBOUNCE_MS: u32 = 1000;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchConfig {
    // --- Pins ---
    /// GPIO the push-button is wired to.
    pub button_gpio: i32,
    /// GPIO driving the LED.
    pub led_gpio: i32,

    // --- Button ---
    /// Quiet time after the last raw edge before a reading is trusted (ms).
    pub debounce_ms: u32,
    /// Input is pulled up and a press pulls it LOW.
    pub button_active_low: bool,

    // --- LED ---
    /// LED state applied at boot.
    pub led_initially_on: bool,

    // --- Timing ---
    /// Delay between poll ticks on hardware (ms).
    pub poll_interval_ms: u32,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            // Pins
            button_gpio: pins::BUTTON_GPIO,
            led_gpio: pins::LED_GPIO,

            // Button
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            button_active_low: true,

            // LED
            led_initially_on: false,

            // Timing
            poll_interval_ms: 1,
        }
    }
}

impl SwitchConfig {
    /// Logic level observed on the button pin while it is pressed.
    pub fn active_level(&self) -> PinState {
        if self.button_active_low {
            PinState::Low
        } else {
            PinState::High
        }
    }

    /// Reject configurations the hardware cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pin in [self.button_gpio, self.led_gpio] {
            if !(0..=pins::MAX_GPIO).contains(&pin) {
                return Err(ConfigError::PinOutOfRange(pin));
            }
        }
        if self.button_gpio == self.led_gpio {
            return Err(ConfigError::PinConflict(self.led_gpio));
        }
        if self.led_gpio >= pins::FIRST_INPUT_ONLY_GPIO {
            return Err(ConfigError::InputOnlyPin(self.led_gpio));
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::ValidationFailed(
                "debounce_ms must not exceed 1000",
            ));
        }
        Ok(())
    }
}
