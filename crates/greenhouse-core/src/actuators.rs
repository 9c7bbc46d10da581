//! Actuator control
//!
//! Translates logical commands into output levels, servo angles and strip
//! updates, then records them in the [`DeviceState`]. Every write is a direct
//! hardware access with no retry; output errors are not reported back.

use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};
use log::info;

use crate::{
    brightness::BrightnessLevel,
    color::NativeColor,
    servo::Servo,
    state::{
        ActuatorExtra,
        ActuatorKind,
        DeviceState,
        WINDOW_CLOSED_ANGLE,
        WINDOW_OPEN_ANGLE,
    },
    strip::{LedDriver, LedStrip},
};

/// Output pins driven by [`ActuatorControl`]
pub struct ActuatorPins<O: OutputPin> {
    pub pump: O,
    pub fan: O,
    pub light: O,
}

/// Owner of every actuator and of the state store
pub struct ActuatorControl<O, P, D, const N: usize>
where
    O: OutputPin,
    P: SetDutyCycle,
    D: LedDriver<N>,
{
    pins: ActuatorPins<O>,
    window: Servo<P>,
    strip: LedStrip<D, N>,
    state: DeviceState,
}

impl<O, P, D, const N: usize> ActuatorControl<O, P, D, N>
where
    O: OutputPin,
    P: SetDutyCycle,
    D: LedDriver<N>,
{
    /// Take ownership of the hardware and bring it to the boot state.
    ///
    /// Outputs go low, the window closes and the strip shows white at the
    /// initial brightness.
    pub fn new(pins: ActuatorPins<O>, window: Servo<P>, driver: D) -> Self {
        let state = DeviceState::new();
        let mut control = Self {
            pins,
            window,
            strip: LedStrip::new(driver, state.brightness_register()),
            state,
        };
        write_level(&mut control.pins.pump, false);
        write_level(&mut control.pins.fan, false);
        write_level(&mut control.pins.light, false);
        control.window.set_angle(WINDOW_CLOSED_ANGLE);
        control.strip.fill(NativeColor::WHITE);
        control
    }

    pub fn set_pump(&mut self, on: bool) {
        write_level(&mut self.pins.pump, on);
        self.state.set_on(ActuatorKind::Pump, on);
        info!("actuators: pump {}", on_off(on));
    }

    pub fn set_fan(&mut self, on: bool) {
        write_level(&mut self.pins.fan, on);
        self.state.set_on(ActuatorKind::Fan, on);
        info!("actuators: fan {}", on_off(on));
    }

    pub fn set_window(&mut self, open: bool) {
        let angle = if open {
            WINDOW_OPEN_ANGLE
        } else {
            WINDOW_CLOSED_ANGLE
        };
        self.window.set_angle(angle);
        self.state.set_on(ActuatorKind::Window, open);
        self.state
            .set_extra(ActuatorKind::Window, ActuatorExtra::Angle(angle));
        info!(
            "actuators: window {}",
            if open { "open" } else { "closed" }
        );
    }

    /// Switch the lighting output.
    ///
    /// Overrides the slider: on forces the strip to full brightness, off
    /// forces it to zero.
    pub fn set_light(&mut self, on: bool) {
        write_level(&mut self.pins.light, on);
        let register = if on { u8::MAX } else { 0 };
        self.apply_brightness_register(register);
        self.state.set_on(ActuatorKind::Light, on);
        info!("actuators: light {}", on_off(on));
    }

    /// Set the strip brightness from a percent.
    ///
    /// Leaves the light's on/off flag and output pin untouched.
    pub fn set_brightness(&mut self, level: BrightnessLevel) {
        self.apply_brightness_register(level.to_register());
        info!("actuators: brightness {}%", level.percent());
    }

    /// Fill the whole strip with one color.
    pub fn fill_strip(&mut self, color: NativeColor) {
        self.strip.fill(color);
        info!(
            "actuators: strip color g={} r={} b={}",
            color.g, color.r, color.b
        );
    }

    pub const fn state(&self) -> &DeviceState {
        &self.state
    }

    pub const fn strip(&self) -> &LedStrip<D, N> {
        &self.strip
    }

    pub const fn window(&self) -> &Servo<P> {
        &self.window
    }

    fn apply_brightness_register(&mut self, register: u8) {
        self.strip.set_brightness(register);
        self.state
            .set_extra(ActuatorKind::Light, ActuatorExtra::Brightness(register));
    }
}

fn write_level<O: OutputPin>(pin: &mut O, high: bool) {
    let result = if high { pin.set_high() } else { pin.set_low() };
    if result.is_err() {
        log::warn!("actuators: output write failed");
    }
}

const fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}
