//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements             | Connects to                    |
//! |------------|------------------------|--------------------------------|
//! | `gpio`     | InputPort, OutputPort  | Any `embedded-hal` digital pin |
//! | `log_sink` | EventSink              | Serial log output              |
//! | `time`     | ClockPort              | ESP32 system timer             |

pub mod gpio;
pub mod log_sink;
pub mod time;
