//! Simulated hardware for integration tests.
//!
//! The button and LED are `embedded-hal` pins backed by shared cells, so the
//! tests drive the real GPIO adapters end to end. The sink records every
//! event for assertions.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};
use remote_led::adapters::gpio::{HalInput, HalOutput};
use remote_led::app::events::AppEvent;
use remote_led::app::ports::EventSink;
use remote_led::app::service::{ControlLoop, TickOutcome};
use remote_led::config::SwitchConfig;
use remote_led::remote::RemoteLink;

// ── Simulated pins ────────────────────────────────────────────

/// Push-button pin. `true` = HIGH (released, pulled up).
pub struct SimButtonPin {
    high: Rc<Cell<bool>>,
}

impl ErrorType for SimButtonPin {
    type Error = Infallible;
}

impl InputPin for SimButtonPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

/// LED pin recording every level written.
pub struct SimLedPin {
    writes: Rc<RefCell<Vec<bool>>>,
}

impl ErrorType for SimLedPin {
    type Error = Infallible;
}

impl OutputPin for SimLedPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(true);
        Ok(())
    }
}

// ── Recording sink ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, wanted: AppEvent) -> usize {
        self.events.iter().filter(|e| **e == wanted).count()
    }

    pub fn presses(&self) -> usize {
        self.count(AppEvent::ButtonPressed)
    }

    pub fn releases(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ButtonReleased { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Test rig ──────────────────────────────────────────────────

pub type SimLoop = ControlLoop<HalInput<SimButtonPin>, HalOutput<SimLedPin>>;

/// A control loop wired to simulated pins and a manual clock.
pub struct Rig {
    pub ctl: SimLoop,
    pub sink: RecordingSink,
    pub now_ms: u32,
    button_high: Rc<Cell<bool>>,
    led_writes: Rc<RefCell<Vec<bool>>>,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(&SwitchConfig::default())
    }

    pub fn with_config(config: &SwitchConfig) -> Self {
        let button_high = Rc::new(Cell::new(config.button_active_low));
        let led_writes = Rc::new(RefCell::new(Vec::new()));

        let input = HalInput::new(
            SimButtonPin {
                high: Rc::clone(&button_high),
            },
            config.button_gpio,
            !config.active_level(),
        );
        let output = HalOutput::new(
            SimLedPin {
                writes: Rc::clone(&led_writes),
            },
            config.led_gpio,
        );

        let ctl = ControlLoop::new(config, input, output);
        let mut sink = RecordingSink::default();
        ctl.start(&mut sink);

        Self {
            ctl,
            sink,
            now_ms: 0,
            button_high,
            led_writes,
        }
    }

    /// Set the raw pin level (active-low wiring: LOW = pressed).
    pub fn set_level(&self, level: PinState) {
        self.button_high.set(level == PinState::High);
    }

    pub fn press(&self) {
        self.set_level(PinState::Low);
    }

    pub fn release(&self) {
        self.set_level(PinState::High);
    }

    /// Advance the clock by `ms`, then tick once.
    pub fn step(&mut self, ms: u32) -> TickOutcome {
        self.now_ms = self.now_ms.wrapping_add(ms);
        self.ctl.tick(self.now_ms, &mut self.sink)
    }

    /// Same as [`step`](Self::step) but through a remote link.
    pub fn step_remote(&mut self, ms: u32, link: &RemoteLink) -> TickOutcome {
        self.now_ms = self.now_ms.wrapping_add(ms);
        self.ctl.tick_with_remote(self.now_ms, link, &mut self.sink)
    }

    /// Tick every `every_ms` for `duration_ms` at the current level.
    pub fn hold_for(&mut self, duration_ms: u32, every_ms: u32) {
        let mut elapsed = 0;
        while elapsed < duration_ms {
            self.step(every_ms);
            elapsed += every_ms;
        }
    }

    /// A clean press-and-release, each phase well past the debounce window.
    pub fn click(&mut self) {
        self.press();
        self.hold_for(30, 1);
        self.release();
        self.hold_for(30, 1);
    }

    pub fn counter(&self) -> u16 {
        self.ctl.button().counter()
    }

    pub fn led_on(&self) -> bool {
        self.ctl.output_on()
    }

    pub fn led_writes(&self) -> Vec<bool> {
        self.led_writes.borrow().clone()
    }
}
