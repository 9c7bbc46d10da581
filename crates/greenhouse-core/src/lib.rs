#![no_std]

//! Greenhouse controller core
//!
//! Hardware-agnostic part of the greenhouse firmware:
//! - `color` - hex color codec producing the strip's native channel order
//! - `brightness` - percent <-> 8-bit brightness register mapping
//! - `state` - device state store reflected by the control page
//! - `strip` - LED strip buffer and the [`LedDriver`] port
//! - `servo` - angle to PWM duty conversion for the window servo
//! - `sensors` - sensor ports and the on-demand [`SensorSnapshot`]
//! - `actuators` - actuator control over `embedded-hal` outputs
//! - `routes` - HTTP route table bound to the [`Greenhouse`] context
//! - `http` - request-line parsing and response head serialization
//! - `page` - control page rendering
//! - `dhcp` - stateless DHCP codec for the access point
//!
//! The firmware binds these to ESP32 peripherals; tests bind them to mocks.

extern crate alloc;

pub mod actuators;
pub mod brightness;
pub mod color;
pub mod dhcp;
pub mod http;
pub mod page;
pub mod routes;
pub mod sensors;
pub mod servo;
pub mod state;
pub mod strip;

pub use actuators::ActuatorControl;
pub use brightness::BrightnessLevel;
pub use color::{NativeColor, hex_to_native_color};
pub use routes::{Greenhouse, Route};
pub use sensors::{ClimateSensor, LightSensor, SensorReading, SensorSnapshot};
pub use servo::Servo;
pub use state::{ActuatorExtra, ActuatorKind, ActuatorState, DeviceState};
pub use strip::{LedDriver, LedStrip};
