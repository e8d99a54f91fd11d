//! Fuzz target: `ControlLoop::tick_with_remote`
//!
//! Interleaves raw button levels with remote commands and checks the LED
//! against a simple model: every confirmed press and every `Toggle` flips
//! it, `SetOutput` forces it, nothing else moves it. The published status
//! must match the physical output after every tick.
//!
//! cargo fuzz run fuzz_control_loop

#![no_main]

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::PinState;
use libfuzzer_sys::fuzz_target;
use remote_led::app::commands::AppCommand;
use remote_led::app::events::AppEvent;
use remote_led::app::ports::{EventSink, InputPort, OutputPort};
use remote_led::app::service::ControlLoop;
use remote_led::config::SwitchConfig;
use remote_led::remote::RemoteLink;

struct ByteInput(Rc<Cell<PinState>>);

impl InputPort for ByteInput {
    fn read_level(&mut self) -> PinState {
        self.0.get()
    }
}

struct LastLevel(PinState);

impl OutputPort for LastLevel {
    fn write_level(&mut self, level: PinState) {
        self.0 = level;
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let config = SwitchConfig::default();
    let link = RemoteLink::new();
    let level = Rc::new(Cell::new(PinState::High));
    let input = ByteInput(Rc::clone(&level));
    let mut ctl = ControlLoop::new(&config, input, LastLevel(PinState::Low));
    let mut model = config.led_initially_on;
    let mut now = 0u32;

    for pair in data.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1]);
        match op % 4 {
            0 => {
                if link.submit(AppCommand::Toggle) {
                    model = !model;
                }
            }
            1 => {
                if link.submit(AppCommand::SetOutput(arg & 1 == 1)) {
                    model = arg & 1 == 1;
                }
            }
            2 => {
                let _ = link.submit(AppCommand::Refresh);
            }
            _ => {}
        }

        level.set(if arg & 0x80 == 0 { PinState::High } else { PinState::Low });
        now = now.wrapping_add(u32::from(arg & 0x1F));
        let outcome = ctl.tick_with_remote(now, &link, &mut NullSink);
        if outcome.pressed {
            model = !model;
        }

        assert_eq!(ctl.output_on(), model);
        assert_eq!(ctl.output().0, PinState::from(model));
        assert_eq!(link.output_on(), model);
        assert_eq!(link.pending(), 0);
    }
});
