//! Port traits: the hexagonal boundary between the control core and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (GPIO pins, clocks, event sinks) implement these traits.
//! The [`ControlLoop`](super::service::ControlLoop) consumes them via
//! generics, so the domain core never touches hardware directly and can be
//! exercised with simulated inputs.

use embedded_hal::digital::PinState;

// ───────────────────────────────────────────────────────────────
// Digital input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for a single binary input.
pub trait InputPort {
    /// Sample the current raw logic level.
    fn read_level(&mut self) -> PinState;
}

// ───────────────────────────────────────────────────────────────
// Digital output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for a single binary output.
///
/// Writes are infallible at this layer; adapters absorb and log hardware
/// failures.
pub trait OutputPort {
    /// Drive the output to `level`.
    fn write_level(&mut self, level: PinState);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock. Wraps at `u32::MAX`.
pub trait ClockPort {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a
/// WebSocket broadcast, a display, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
