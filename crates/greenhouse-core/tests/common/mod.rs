//! Hand-written doubles for the hardware ports.

#![allow(dead_code, unreachable_pub)]

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
};

use embedded_hal::{digital, pwm};
use greenhouse_core::{
    ClimateSensor,
    Greenhouse,
    LedDriver,
    LightSensor,
    NativeColor,
    SensorSnapshot,
    Servo,
    actuators::{ActuatorControl, ActuatorPins},
};

pub const LED_COUNT: usize = 64;

/// Output pin remembering its last level (`None` until first write).
#[derive(Clone, Default)]
pub struct MockPin {
    pub level: Rc<Cell<Option<bool>>>,
}

impl MockPin {
    pub fn is_high(&self) -> bool {
        self.level.get() == Some(true)
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(Some(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(Some(true));
        Ok(())
    }
}

/// PWM channel whose full scale equals the 20 ms servo period in µs,
/// so the recorded duty reads directly as the pulse width.
#[derive(Clone, Default)]
pub struct MockPwm {
    pub duty: Rc<Cell<u16>>,
}

impl pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        20_000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.set(duty);
        Ok(())
    }
}

/// Strip driver keeping the last frame and a write counter.
#[derive(Clone, Default)]
pub struct MockStrip {
    pub frame: Rc<RefCell<Vec<NativeColor>>>,
    pub writes: Rc<Cell<usize>>,
}

impl<const N: usize> LedDriver<N> for MockStrip {
    fn write(&mut self, colors: &[NativeColor; N]) {
        *self.frame.borrow_mut() = colors.to_vec();
        self.writes.set(self.writes.get() + 1);
    }
}

#[derive(Clone, Copy)]
pub struct MockClimate {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure_pa: f32,
}

impl ClimateSensor for MockClimate {
    fn read_temperature(&mut self) -> f32 {
        self.temperature
    }

    fn read_humidity(&mut self) -> f32 {
        self.humidity
    }

    fn read_pressure(&mut self) -> f32 {
        self.pressure_pa
    }
}

#[derive(Clone, Copy)]
pub struct MockLight {
    pub lux: f32,
}

impl LightSensor for MockLight {
    fn read_lux(&mut self) -> f32 {
        self.lux
    }
}

pub type TestControl = ActuatorControl<MockPin, MockPwm, MockStrip, LED_COUNT>;
pub type TestGreenhouse =
    Greenhouse<MockPin, MockPwm, MockStrip, MockClimate, MockLight, LED_COUNT>;

/// Shared handles to everything the device under test writes to.
#[derive(Clone, Default)]
pub struct Outputs {
    pub pump: MockPin,
    pub fan: MockPin,
    pub light: MockPin,
    pub servo: MockPwm,
    pub strip: MockStrip,
}

impl Outputs {
    pub fn frame(&self) -> Vec<NativeColor> {
        self.strip.frame.borrow().clone()
    }
}

pub const CLIMATE: MockClimate = MockClimate {
    temperature: 21.46,
    humidity: 55.04,
    pressure_pa: 101_325.0,
};

pub const LIGHT: MockLight = MockLight { lux: 312.25 };

pub fn control() -> (TestControl, Outputs) {
    let outputs = Outputs::default();
    let pins = ActuatorPins {
        pump: outputs.pump.clone(),
        fan: outputs.fan.clone(),
        light: outputs.light.clone(),
    };
    let control = ActuatorControl::new(
        pins,
        Servo::new(outputs.servo.clone()),
        outputs.strip.clone(),
    );
    (control, outputs)
}

pub fn greenhouse_with(climate: MockClimate, light: MockLight) -> (TestGreenhouse, Outputs) {
    let (control, outputs) = control();
    (
        Greenhouse::new(control, SensorSnapshot::new(climate, light)),
        outputs,
    )
}

pub fn greenhouse() -> (TestGreenhouse, Outputs) {
    greenhouse_with(CLIMATE, LIGHT)
}
