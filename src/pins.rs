//! GPIO pin assignments for the remote LED board.
//!
//! Single source of truth; the default configuration references this module
//! rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// User button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button. Idles HIGH, reads LOW while pressed.
pub const BUTTON_GPIO: i32 = 23;

// ---------------------------------------------------------------------------
// Indicator LED
// ---------------------------------------------------------------------------

/// Green LED, driven HIGH to light.
pub const LED_GPIO: i32 = 26;

// ---------------------------------------------------------------------------
// ESP32 GPIO matrix limits
// ---------------------------------------------------------------------------

/// Highest GPIO number on the ESP32.
pub const MAX_GPIO: i32 = 39;

/// GPIO34..=39 have no output driver.
pub const FIRST_INPUT_ONLY_GPIO: i32 = 34;
