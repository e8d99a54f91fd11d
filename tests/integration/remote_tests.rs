//! Integration tests for the remote-control boundary.
//!
//! Commands submitted through a [`RemoteLink`] must only land between ticks,
//! and the published output state must track the physical LED.

use remote_led::app::commands::AppCommand;
use remote_led::app::events::AppEvent;
use remote_led::remote::{OutputStatus, RemoteLink};

use super::mock_hw::Rig;

#[test]
fn remote_toggle_applies_on_next_tick() {
    let link = RemoteLink::new();
    let mut rig = Rig::new();

    assert!(link.submit(AppCommand::Toggle));
    assert!(!rig.led_on(), "nothing happens until the loop runs");

    let out = rig.step_remote(1, &link);
    assert!(out.output_changed);
    assert!(rig.led_on());
    assert!(link.output_on());
    assert_eq!(link.status(), OutputStatus::On);
    assert_eq!(link.status_json(), r#"{"led":"on"}"#);
    assert_eq!(link.pending(), 0);
}

#[test]
fn set_output_is_idempotent() {
    let link = RemoteLink::new();
    let mut rig = Rig::new();

    link.submit(AppCommand::SetOutput(true));
    rig.step_remote(1, &link);
    link.submit(AppCommand::SetOutput(true));
    let out = rig.step_remote(1, &link);

    assert!(!out.output_changed);
    assert!(rig.led_on());
    assert_eq!(rig.sink.count(AppEvent::OutputChanged { on: true }), 1);
}

#[test]
fn remote_toggle_and_press_edge_in_same_tick_cancel() {
    let link = RemoteLink::new();
    let mut rig = Rig::new();

    rig.press();
    rig.step_remote(0, &link);
    rig.hold_for(10, 1); // t=10, one tick short of the edge

    link.submit(AppCommand::Toggle);
    let out = rig.step_remote(1, &link);
    assert!(out.pressed);
    assert!(!out.output_changed);
    assert!(!rig.led_on());
    assert!(!link.output_on());
}

#[test]
fn button_toggle_is_published() {
    let link = RemoteLink::new();
    let mut rig = Rig::new();

    rig.press();
    for _ in 0..20 {
        rig.step_remote(1, &link);
    }
    assert!(link.output_on());
    assert_eq!(link.status().to_string(), "on");
}

#[test]
fn refresh_reports_current_state() {
    let link = RemoteLink::new();
    let mut rig = Rig::new();

    link.submit(AppCommand::Refresh);
    let out = rig.step_remote(1, &link);
    assert!(!out.output_changed);
    assert!(rig.sink.events.contains(&AppEvent::OutputReported { on: false }));
}

#[test]
fn overflowing_commands_are_dropped_not_queued() {
    let link = RemoteLink::new();
    let mut rig = Rig::new();

    let accepted = (0..6).filter(|_| link.submit(AppCommand::Toggle)).count();
    assert_eq!(accepted, 4);

    rig.step_remote(1, &link);
    assert_eq!(link.pending(), 0);
    // Four toggles cancel out.
    assert!(!rig.led_on());
}

#[test]
fn commands_from_another_thread_reach_the_loop() {
    static LINK: RemoteLink = RemoteLink::new();
    let mut rig = Rig::new();

    std::thread::spawn(|| {
        assert!(LINK.submit(AppCommand::SetOutput(true)));
    })
    .join()
    .unwrap();

    rig.step_remote(1, &LINK);

    let observed = std::thread::spawn(|| LINK.output_on()).join().unwrap();
    assert!(observed);
}
