//! Inbound commands to the control loop.
//!
//! These represent actions requested by the outside world (a web client,
//! serial console, test harness) that the
//! [`ControlLoop`](super::service::ControlLoop) applies between ticks.

/// Commands that external adapters can send into the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Flip the LED's desired state.
    Toggle,

    /// Set the LED's desired state explicitly.
    SetOutput(bool),

    /// Re-publish the current output state without changing it.
    Refresh,
}
