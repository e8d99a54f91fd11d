//! Control loop: the hexagonal core.
//!
//! [`ControlLoop`] owns the debounced button, the LED actuator, and the
//! button's input port. Each tick flows strictly one way:
//!
//! ```text
//!  InputPort ──▶ DebouncedButton ──▶ edge ──▶ Actuator ──▶ OutputPort
//!                                              ▲
//!                          AppCommand ─────────┘ (between ticks)
//! ```
//!
//! The loop is stateless across ticks except through the components it owns.
//! It never blocks; whatever drives it decides the tick rate.

use log::debug;

use crate::config::SwitchConfig;
use crate::drivers::actuator::Actuator;
use crate::drivers::button::{ButtonState, DebouncedButton};
use crate::remote::RemoteLink;

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{EventSink, InputPort, OutputPort};

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A press edge was confirmed.
    pub pressed: bool,
    /// A release edge was confirmed.
    pub released: bool,
    /// The physical output changed state.
    pub output_changed: bool,
}

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

pub struct ControlLoop<I: InputPort, O: OutputPort> {
    input: I,
    button: DebouncedButton,
    led: Actuator<O>,
}

impl<I: InputPort, O: OutputPort> ControlLoop<I, O> {
    /// Build the loop from configuration.
    ///
    /// The LED is driven to `config.led_initially_on` immediately.
    pub fn new(config: &SwitchConfig, input: I, output: O) -> Self {
        let button = DebouncedButton::new(
            config.button_gpio,
            config.active_level(),
            config.debounce_ms,
        );
        let led = Actuator::new(output, config.led_initially_on);

        Self {
            input,
            button,
            led,
        }
    }

    /// Announce the initial output state.
    pub fn start(&self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            output_on: self.led.is_on(),
        });
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one cycle: read input → debounce → toggle on press → synchronize.
    pub fn tick(&mut self, now_ms: u32, sink: &mut impl EventSink) -> TickOutcome {
        let before = self.button.state();
        let was_on = self.led.is_on();

        // 1. Sample
        let level = self.input.read_level();
        let after = self.button.sample(now_ms, level);

        // An edge state survives unsettled ticks; act only where it was confirmed.
        let confirmed = after != before;
        let mut outcome = TickOutcome::default();

        // 2. Edges. Only the press edge toggles.
        if confirmed && self.button.is_press_edge() {
            outcome.pressed = true;
            self.led.toggle();
            sink.emit(&AppEvent::ButtonPressed);
        } else if confirmed && self.button.is_release_edge() {
            outcome.released = true;
            let held_ticks = match before {
                ButtonState::Held(n) => n - 1,
                _ => 0,
            };
            sink.emit(&AppEvent::ButtonReleased { held_ticks });
        }

        // 3. Output always follows desired
        self.led.synchronize();

        let now_on = self.led.is_on();
        if now_on != was_on {
            outcome.output_changed = true;
            sink.emit(&AppEvent::OutputChanged { on: now_on });
        }

        outcome
    }

    /// Apply pending remote commands, run a tick, then publish the result.
    pub fn tick_with_remote(
        &mut self,
        now_ms: u32,
        link: &RemoteLink,
        sink: &mut impl EventSink,
    ) -> TickOutcome {
        while let Some(cmd) = link.take_command() {
            self.handle_command(cmd, sink);
        }
        let outcome = self.tick(now_ms, sink);
        link.publish(self.led.is_on());
        outcome
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command. Output changes land on the next tick.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) {
        debug!("command: {:?}", cmd);
        match cmd {
            AppCommand::Toggle => self.led.toggle(),
            AppCommand::SetOutput(on) => self.led.set_desired(on),
            AppCommand::Refresh => sink.emit(&AppEvent::OutputReported {
                on: self.led.is_on(),
            }),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current physical output state.
    pub fn output_on(&self) -> bool {
        self.led.is_on()
    }

    /// Read-only view of the debounced button for edge queries.
    pub fn button(&self) -> &DebouncedButton {
        &self.button
    }

    pub fn output(&self) -> &O {
        self.led.output()
    }
}
