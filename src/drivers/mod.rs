//! Button and actuator drivers.

pub mod actuator;
pub mod button;
