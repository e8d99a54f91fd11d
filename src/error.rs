//! Error types for the remote LED firmware.
//!
//! The control core itself is total; these errors only arise while bringing
//! the device up (configuration checks, peripheral setup). All variants are
//! `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible boot-time operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation.
    Config(ConfigError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Button and LED were assigned the same GPIO.
    PinConflict(i32),
    /// GPIO number does not exist on this chip.
    PinOutOfRange(i32),
    /// The LED was assigned a pin with no output driver.
    InputOnlyPin(i32),
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinConflict(pin) => write!(f, "GPIO{pin} used for both button and LED"),
            Self::PinOutOfRange(pin) => write!(f, "GPIO{pin} out of range"),
            Self::InputOnlyPin(pin) => write!(f, "GPIO{pin} is input-only"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
