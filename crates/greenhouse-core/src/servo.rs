//! Hobby servo on a 50 Hz PWM channel
//!
//! Position is open loop: the pulse width is set and never read back.

use embedded_hal::pwm::SetDutyCycle;

/// PWM period of a 50 Hz servo signal, in microseconds.
pub const PERIOD_US: u32 = 20_000;
/// Pulse width at 0 degrees, in microseconds.
pub const MIN_PULSE_US: u32 = 544;
/// Pulse width at 180 degrees, in microseconds.
pub const MAX_PULSE_US: u32 = 2400;
/// Largest commandable angle, in degrees.
pub const MAX_ANGLE: u8 = 180;

/// Servo driven through any `embedded-hal` PWM channel
pub struct Servo<P: SetDutyCycle> {
    pwm: P,
    angle: Option<u8>,
}

impl<P: SetDutyCycle> Servo<P> {
    pub const fn new(pwm: P) -> Self {
        Self { pwm, angle: None }
    }

    /// Command the servo to `degrees`, clamped to `0..=180`.
    ///
    /// PWM errors are dropped; the last commanded angle is kept either way.
    pub fn set_angle(&mut self, degrees: u8) {
        let degrees = degrees.min(MAX_ANGLE);
        let duty = duty_for_angle(degrees, self.pwm.max_duty_cycle());
        if self.pwm.set_duty_cycle(duty).is_err() {
            log::warn!("servo: failed to set duty {}", duty);
        }
        self.angle = Some(degrees);
    }

    /// Last commanded angle, `None` until the first command.
    pub const fn angle(&self) -> Option<u8> {
        self.angle
    }
}

/// Pulse width in microseconds for an angle in `0..=180`.
pub const fn pulse_width_us(degrees: u8) -> u32 {
    let degrees = if degrees > MAX_ANGLE { MAX_ANGLE } else { degrees };
    MIN_PULSE_US + (MAX_PULSE_US - MIN_PULSE_US) * degrees as u32 / MAX_ANGLE as u32
}

/// Duty cycle for an angle given the channel's full-scale duty.
#[allow(clippy::cast_possible_truncation)]
pub const fn duty_for_angle(degrees: u8, max_duty: u16) -> u16 {
    (pulse_width_us(degrees) * max_duty as u32 / PERIOD_US) as u16
}
