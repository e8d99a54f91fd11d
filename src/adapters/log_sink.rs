//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A WebSocket notifier would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::remote::OutputStatus;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { output_on } => {
                info!("START | led={}", OutputStatus::from(*output_on));
            }
            AppEvent::ButtonPressed => {
                info!("BUTTON | press");
            }
            AppEvent::ButtonReleased { held_ticks } => {
                info!("BUTTON | release (held {} ticks)", held_ticks);
            }
            AppEvent::OutputChanged { on } => {
                info!("OUTPUT | {}", OutputStatus::from(*on));
            }
            AppEvent::OutputReported { on } => {
                info!("REPORT | led={}", OutputStatus::from(*on));
            }
        }
    }
}
