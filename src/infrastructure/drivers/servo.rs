use esp_hal::{
    gpio::interconnect::PeripheralOutput,
    ledc::{
        LSGlobalClkSource,
        Ledc,
        LowSpeed,
        channel::{self, Channel, ChannelIFace as _},
        timer::{self, Timer, TimerIFace as _},
    },
    peripherals::LEDC,
    time::Rate,
};
use greenhouse_core::{Servo, servo::MIN_PULSE_US, servo::PERIOD_US};
use static_cell::make_static;

use crate::infrastructure::config;

pub(crate) type ServoChannel = Channel<'static, LowSpeed>;

/// Window servo on LEDC low-speed timer 0, channel 0
pub(crate) fn init_window_servo<O>(ledc: LEDC<'static>, pin: O) -> Servo<ServoChannel>
where
    O: PeripheralOutput<'static>,
{
    let ledc = make_static!(Ledc::new(ledc));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let servo_timer: &'static mut Timer<'static, LowSpeed> =
        make_static!(ledc.timer::<LowSpeed>(timer::Number::Timer0));
    servo_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty14Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(config::SERVO.frequency_hz),
        })
        .unwrap();
    let servo_timer: &'static Timer<'static, LowSpeed> = servo_timer;

    let mut channel = ledc.channel(channel::Number::Channel0, pin);
    #[allow(clippy::cast_possible_truncation)]
    let closed_pct = (MIN_PULSE_US * 100 / PERIOD_US) as u8;
    channel
        .configure(channel::config::Config {
            timer: servo_timer,
            duty_pct: closed_pct,
            pin_config: channel::config::PinConfig::PushPull,
        })
        .unwrap();

    Servo::new(channel)
}
