//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules coupling the debounced button to the LED:
//! edge detection feeds toggle-on-press, and the actuator is synchronized
//! every tick. All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
