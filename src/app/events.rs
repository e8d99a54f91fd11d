//! Outbound application events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them, for example log to serial or notify
//! connected clients.

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The control loop has started (carries the initial output state).
    Started { output_on: bool },

    /// A debounced press edge was confirmed.
    ButtonPressed,

    /// A debounced release edge was confirmed.
    /// `held_ticks` is the last held count before release (0 for a tap).
    ButtonReleased { held_ticks: u16 },

    /// The physical output changed state.
    OutputChanged { on: bool },

    /// The current output state was re-published on request.
    OutputReported { on: bool },
}
