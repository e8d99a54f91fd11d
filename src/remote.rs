//! Remote-control boundary between the poll loop and other execution contexts.
//!
//! A web handler, console, or any task running outside the poll loop talks
//! to the LED only through a [`RemoteLink`]:
//!
//! ```text
//! ┌──────────────┐  AppCommand   ┌──────────────┐
//! │ Remote task  │──────────────▶│  Poll loop   │
//! │ (any thread) │◀──────────────│  (owner)     │
//! └──────────────┘  output_on    └──────────────┘
//!                   (atomic mirror)
//! ```
//!
//! Commands go through a bounded `embassy-sync` channel; the loop drains it
//! between ticks. The output state comes back as an atomic mirror that the
//! loop publishes after every tick. Remote tasks never see the button or the
//! actuator.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use serde::Serialize;

use crate::app::commands::AppCommand;

/// Channel depth for pending remote commands.
const COMMAND_DEPTH: usize = 4;

/// LED state as reported to remote clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStatus {
    On,
    Off,
}

impl From<bool> for OutputStatus {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for OutputStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
        }
    }
}

#[derive(Serialize)]
struct StatusReport {
    led: OutputStatus,
}

/// Shared command queue plus output-state mirror.
///
/// Designed to live in a `static` so producers on any context can reach it.
pub struct RemoteLink {
    commands: Channel<CriticalSectionRawMutex, AppCommand, COMMAND_DEPTH>,
    output_on: AtomicBool,
}

impl Default for RemoteLink {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteLink {
    pub const fn new() -> Self {
        Self {
            commands: Channel::new(),
            output_on: AtomicBool::new(false),
        }
    }

    /// Queue a command for the poll loop.
    /// Returns `false` if the queue is full (command dropped).
    pub fn submit(&self, cmd: AppCommand) -> bool {
        self.commands.try_send(cmd).is_ok()
    }

    /// Pop the next pending command. Called by the poll loop only.
    pub fn take_command(&self) -> Option<AppCommand> {
        self.commands.try_receive().ok()
    }

    /// Number of commands waiting.
    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Mirror the actuator's output state. Called by the poll loop only.
    pub fn publish(&self, on: bool) {
        self.output_on.store(on, Ordering::Release);
    }

    /// Last published output state.
    pub fn output_on(&self) -> bool {
        self.output_on.load(Ordering::Acquire)
    }

    pub fn status(&self) -> OutputStatus {
        OutputStatus::from(self.output_on())
    }

    /// Status document for remote clients, e.g. `{"led":"on"}`.
    pub fn status_json(&self) -> String {
        let report = StatusReport { led: self.status() };
        // A two-variant enum in a flat struct cannot fail to serialise.
        serde_json::to_string(&report).unwrap_or_else(|_| String::from("{}"))
    }
}
