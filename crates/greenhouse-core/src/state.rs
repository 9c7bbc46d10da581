//! Device state store
//!
//! Holds the logical state of every actuator as last commanded. The store is
//! owned by [`crate::ActuatorControl`], which is the only writer.

use crate::brightness::BrightnessLevel;

/// Window servo angle when closed, in degrees.
pub const WINDOW_CLOSED_ANGLE: u8 = 0;
/// Window servo angle when open, in degrees.
pub const WINDOW_OPEN_ANGLE: u8 = 90;
/// Global strip brightness register at boot.
pub const INITIAL_STRIP_BRIGHTNESS: u8 = 50;

/// Controllable device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorKind {
    Pump,
    Fan,
    Window,
    Light,
}

/// Numeric detail carried alongside the on/off flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorExtra {
    /// Servo angle in degrees
    Angle(u8),
    /// Strip brightness register (0-255)
    Brightness(u8),
}

/// State of a single actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorState {
    pub kind: ActuatorKind,
    pub is_on: bool,
    pub extra: Option<ActuatorExtra>,
}

impl ActuatorState {
    const fn switch(kind: ActuatorKind) -> Self {
        Self {
            kind,
            is_on: false,
            extra: None,
        }
    }
}

/// Logical state of all actuators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    pump: ActuatorState,
    fan: ActuatorState,
    window: ActuatorState,
    light: ActuatorState,
}

impl DeviceState {
    /// Everything off and closed, strip at its boot brightness.
    pub const fn new() -> Self {
        Self {
            pump: ActuatorState::switch(ActuatorKind::Pump),
            fan: ActuatorState::switch(ActuatorKind::Fan),
            window: ActuatorState {
                kind: ActuatorKind::Window,
                is_on: false,
                extra: Some(ActuatorExtra::Angle(WINDOW_CLOSED_ANGLE)),
            },
            light: ActuatorState {
                kind: ActuatorKind::Light,
                is_on: false,
                extra: Some(ActuatorExtra::Brightness(INITIAL_STRIP_BRIGHTNESS)),
            },
        }
    }

    pub const fn get(&self, kind: ActuatorKind) -> &ActuatorState {
        match kind {
            ActuatorKind::Pump => &self.pump,
            ActuatorKind::Fan => &self.fan,
            ActuatorKind::Window => &self.window,
            ActuatorKind::Light => &self.light,
        }
    }

    pub fn is_on(&self, kind: ActuatorKind) -> bool {
        self.get(kind).is_on
    }

    /// Overwrite the on/off flag of `kind`.
    pub fn set_on(&mut self, kind: ActuatorKind, is_on: bool) {
        self.get_mut(kind).is_on = is_on;
    }

    /// Overwrite the numeric detail of `kind`.
    pub fn set_extra(&mut self, kind: ActuatorKind, extra: ActuatorExtra) {
        self.get_mut(kind).extra = Some(extra);
    }

    /// Current window servo angle.
    pub fn window_angle(&self) -> u8 {
        match self.window.extra {
            Some(ActuatorExtra::Angle(angle)) => angle,
            _ => WINDOW_CLOSED_ANGLE,
        }
    }

    /// Current strip brightness register.
    pub fn brightness_register(&self) -> u8 {
        match self.light.extra {
            Some(ActuatorExtra::Brightness(value)) => value,
            _ => 0,
        }
    }

    /// Current strip brightness as shown on the control page.
    pub fn brightness(&self) -> BrightnessLevel {
        BrightnessLevel::from_register(self.brightness_register())
    }

    fn get_mut(&mut self, kind: ActuatorKind) -> &mut ActuatorState {
        match kind {
            ActuatorKind::Pump => &mut self.pump,
            ActuatorKind::Fan => &mut self.fan,
            ActuatorKind::Window => &mut self.window,
            ActuatorKind::Light => &mut self.light,
        }
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}
