//! ESP32 time adapter.
//!
//! Provides the monotonic millisecond clock the poll loop debounces against.
//!
//! - **`target_os = "espidf"`**: wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`**: uses `std::time::Instant` for
//!   host-side testing and simulation.

use crate::app::ports::ClockPort;

/// Time adapter for the ESP32 platform.
pub struct Esp32TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    fn uptime_us(&self) -> u64 {
        // SAFETY: esp_timer_get_time only reads the system timer.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since the adapter was created (monotonic).
    #[cfg(not(target_os = "espidf"))]
    fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl ClockPort for Esp32TimeAdapter {
    /// Milliseconds since boot, truncated to `u32` (wraps after ~49.7 days).
    fn now_ms(&self) -> u32 {
        (self.uptime_us() / 1000) as u32
    }
}
