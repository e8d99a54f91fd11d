//! Fuzz target: `DebouncedButton::sample`
//!
//! Each input byte pair is one tick: the first byte is the time since the
//! previous tick, the low bit of the second is the raw level. Asserts that
//! confirmed edges alternate press/release and that the state only moves
//! on ticks where the level has been quiet for longer than the window.
//!
//! cargo fuzz run fuzz_button_samples

#![no_main]

use embedded_hal::digital::PinState;
use libfuzzer_sys::fuzz_target;
use remote_led::drivers::button::{ButtonState, DEFAULT_DEBOUNCE_MS, DebouncedButton};

fuzz_target!(|data: &[u8]| {
    let Some((&seed, ticks)) = data.split_first() else {
        return;
    };

    // Start the clock anywhere so rollover gets exercised.
    let mut now = u32::from(seed).wrapping_mul(0x0101_0101).wrapping_neg();
    let mut btn = DebouncedButton::new(23, PinState::Low, DEFAULT_DEBOUNCE_MS);
    let mut quiet_since = now;
    let mut last = PinState::High;
    let mut pressed = false;

    for pair in ticks.chunks_exact(2) {
        now = now.wrapping_add(u32::from(pair[0]));
        let level = if pair[1] & 1 == 0 { PinState::Low } else { PinState::High };
        if level != last {
            quiet_since = now;
        }
        last = level;

        let before = btn.state();
        let after = btn.sample(now, level);
        let settled = now.wrapping_sub(quiet_since) > DEFAULT_DEBOUNCE_MS;

        if !settled {
            assert_eq!(before, after, "state moved while bouncing");
        }
        if after != before {
            match after {
                ButtonState::PressEdge => {
                    assert!(!pressed, "two presses without a release");
                    pressed = true;
                }
                ButtonState::ReleaseEdge => {
                    assert!(pressed, "release without a press");
                    pressed = false;
                }
                ButtonState::Held(n) => assert!((2..=0xFFFE).contains(&n)),
                ButtonState::Idle => assert_eq!(before, ButtonState::ReleaseEdge),
            }
        }
        assert_eq!(ButtonState::from_counter(btn.counter()), after);
    }
});
