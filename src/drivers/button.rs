//! Polled, time-debounced push-button driver.
//!
//! ## Hardware
//!
//! Momentary switch on a pulled input. Pressing drives the pin to the
//! configured active level. No interrupts: the main loop calls
//! [`DebouncedButton::sample`] once per tick with the current time and the
//! raw level it just read.
//!
//! ## Debouncing
//!
//! Every raw level change restarts a settling timer. The debounced state only
//! advances on ticks where the raw level has been stable for longer than the
//! debounce window. Elapsed time is compared, not tick counts, so the tick
//! rate may vary freely.
//!
//! ## State encoding
//!
//! | State         | Counter          | Meaning                               |
//! |---------------|------------------|---------------------------------------|
//! | `Idle`        | `0`              | Released and settled                  |
//! | `PressEdge`   | `1`              | Press just confirmed                  |
//! | `Held(n)`     | `2..=0xFFFE`     | Held; `n` counts settled held ticks   |
//! | `ReleaseEdge` | `0xFFFF`         | Release just confirmed                |
//!
//! A hold that counts up to `0xFFFE` wraps back to `Held(2)` so it never
//! collides with the release sentinel.
//!
//! The state only moves on settled ticks, so an edge state persists through
//! any unsettled ticks that follow it. Callers wanting one action per edge
//! compare the state before and after [`DebouncedButton::sample`].

use embedded_hal::digital::PinState;

/// Default quiet time before a raw reading is trusted.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

const PRESS_EDGE: u16 = 1;
const HELD_MIN: u16 = 2;
const HELD_MAX: u16 = 0xFFFE;
const RELEASE_EDGE: u16 = 0xFFFF;

/// Debounced button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    PressEdge,
    /// Held, with a count in `2..=0xFFFE`.
    Held(u16),
    ReleaseEdge,
}

impl ButtonState {
    /// The 16-bit counter encoding of this state.
    pub const fn counter(self) -> u16 {
        match self {
            Self::Idle => 0,
            Self::PressEdge => PRESS_EDGE,
            Self::Held(n) => n,
            Self::ReleaseEdge => RELEASE_EDGE,
        }
    }

    /// Decode a counter value. Total over `u16`.
    pub const fn from_counter(counter: u16) -> Self {
        match counter {
            0 => Self::Idle,
            PRESS_EDGE => Self::PressEdge,
            RELEASE_EDGE => Self::ReleaseEdge,
            n => Self::Held(n),
        }
    }

    /// Next state for a tick on which the settled reading is "pressed".
    fn on_pressed(self) -> Self {
        match self {
            // A re-press settling right after a release edge is a new press.
            Self::Idle | Self::ReleaseEdge => Self::PressEdge,
            Self::PressEdge => Self::Held(HELD_MIN),
            Self::Held(HELD_MAX) => Self::Held(HELD_MIN),
            Self::Held(n) => Self::Held(n + 1),
        }
    }

    /// Next state for a tick on which the settled reading is "released".
    fn on_released(self) -> Self {
        match self {
            Self::Idle | Self::ReleaseEdge => Self::Idle,
            Self::PressEdge | Self::Held(_) => Self::ReleaseEdge,
        }
    }
}

/// A single polled push-button with time-based debouncing.
#[derive(Debug, Clone)]
pub struct DebouncedButton {
    gpio: i32,
    active_level: PinState,
    debounce_ms: u32,
    last_reading: PinState,
    last_change_ms: u32,
    state: ButtonState,
}

impl DebouncedButton {
    /// Create a button on `gpio` that reads `active_level` while pressed.
    ///
    /// The last reading starts at the inactive level so the first sample of
    /// an idle button is not mistaken for a change.
    pub fn new(gpio: i32, active_level: PinState, debounce_ms: u32) -> Self {
        Self {
            gpio,
            active_level,
            debounce_ms,
            last_reading: !active_level,
            last_change_ms: 0,
            state: ButtonState::Idle,
        }
    }

    /// GPIO pin this button is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Debounce window in milliseconds.
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Feed one raw sample taken at `now_ms`.
    ///
    /// Returns the debounced state after this tick.
    pub fn sample(&mut self, now_ms: u32, level: PinState) -> ButtonState {
        if level != self.last_reading {
            self.last_change_ms = now_ms;
        }

        if now_ms.wrapping_sub(self.last_change_ms) > self.debounce_ms {
            self.state = if level == self.active_level {
                self.state.on_pressed()
            } else {
                self.state.on_released()
            };
        }

        // Bounce tracking runs every tick, settled or not.
        self.last_reading = level;
        self.state
    }

    /// Current debounced state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Current state in its 16-bit counter encoding.
    pub fn counter(&self) -> u16 {
        self.state.counter()
    }

    /// A press was confirmed on the most recent tick.
    pub fn is_press_edge(&self) -> bool {
        self.counter() == PRESS_EDGE
    }

    /// A release was confirmed on the most recent tick.
    pub fn is_release_edge(&self) -> bool {
        self.counter() == RELEASE_EDGE
    }

    /// The button has been held for more than `min_ticks` ticks past the
    /// press edge.
    pub fn is_held(&self, min_ticks: u16) -> bool {
        let counter = u32::from(self.counter());
        counter > 1 + u32::from(min_ticks) && counter < u32::from(RELEASE_EDGE)
    }

    /// Most recent raw (unfiltered) level.
    pub fn last_reading(&self) -> PinState {
        self.last_reading
    }
}
