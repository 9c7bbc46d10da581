//! HTTP route table
//!
//! Every recognized route answers `200`. Query parameters are parsed
//! leniently and clamped; nothing a client sends is ever rejected.

use alloc::string::String;

use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};
use log::{debug, warn};

use crate::{
    actuators::ActuatorControl,
    brightness::BrightnessLevel,
    color::hex_to_native_color,
    http::{HttpMethod, RequestTarget, Response, parse_int_lenient},
    page::render_page,
    sensors::{ClimateSensor, LightSensor, SensorSnapshot},
    strip::LedDriver,
};

const JSON_BUFFER_SIZE: usize = 160;

/// Logical operation behind a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Page,
    SensorData,
    Pump(bool),
    Fan(bool),
    Window(bool),
    Light(bool),
    Brightness,
    Color,
}

impl Route {
    /// Resolve a GET path; any other method matches nothing.
    pub fn parse(method: HttpMethod, path: &str) -> Option<Self> {
        if method != HttpMethod::Get {
            return None;
        }
        Some(match path {
            "/" => Route::Page,
            "/sensor/data" => Route::SensorData,
            "/pump/on" => Route::Pump(true),
            "/pump/off" => Route::Pump(false),
            "/wind/on" => Route::Fan(true),
            "/wind/off" => Route::Fan(false),
            "/window/open" => Route::Window(true),
            "/window/close" => Route::Window(false),
            "/light/on" => Route::Light(true),
            "/light/off" => Route::Light(false),
            "/light/brightness/" => Route::Brightness,
            "/light/color/" => Route::Color,
            _ => return None,
        })
    }
}

/// Controller context: all actuators plus the sensors
///
/// One instance lives for the whole program and is borrowed mutably by one
/// request at a time.
pub struct Greenhouse<O, P, D, C, L, const N: usize>
where
    O: OutputPin,
    P: SetDutyCycle,
    D: LedDriver<N>,
    C: ClimateSensor,
    L: LightSensor,
{
    actuators: ActuatorControl<O, P, D, N>,
    sensors: SensorSnapshot<C, L>,
}

impl<O, P, D, C, L, const N: usize> Greenhouse<O, P, D, C, L, N>
where
    O: OutputPin,
    P: SetDutyCycle,
    D: LedDriver<N>,
    C: ClimateSensor,
    L: LightSensor,
{
    pub const fn new(actuators: ActuatorControl<O, P, D, N>, sensors: SensorSnapshot<C, L>) -> Self {
        Self { actuators, sensors }
    }

    /// Dispatch one request and build its response.
    pub fn handle(&mut self, method: HttpMethod, raw_target: &str) -> Response {
        let target = RequestTarget::parse(raw_target);
        let Some(route) = Route::parse(method, target.path) else {
            debug!("routes: no route for {:?} {}", method, target.path);
            return Response::not_found();
        };

        match route {
            Route::Page => self.page(),
            Route::SensorData => self.sensor_data(),
            Route::Pump(on) => {
                self.actuators.set_pump(on);
                Response::ok()
            }
            Route::Fan(on) => {
                self.actuators.set_fan(on);
                Response::ok()
            }
            Route::Window(open) => {
                self.actuators.set_window(open);
                Response::ok()
            }
            Route::Light(on) => {
                self.actuators.set_light(on);
                Response::ok()
            }
            Route::Brightness => self.brightness(&target),
            Route::Color => self.color(&target),
        }
    }

    pub const fn actuators(&self) -> &ActuatorControl<O, P, D, N> {
        &self.actuators
    }

    fn page(&mut self) -> Response {
        let reading = self.sensors.read_all();
        Response::html(render_page(&reading, self.actuators.state()))
    }

    fn sensor_data(&mut self) -> Response {
        let reading = self.sensors.read_all();
        match serde_json_core::to_string::<_, JSON_BUFFER_SIZE>(&reading) {
            Ok(json) => Response::json(String::from(json.as_str())),
            Err(e) => {
                warn!("routes: failed to serialize readings: {:?}", e);
                Response::text(500, "Internal Server Error")
            }
        }
    }

    /// Without a `value` parameter nothing changes.
    fn brightness(&mut self, target: &RequestTarget<'_>) -> Response {
        if let Some(value) = target.query_param("value") {
            let level = BrightnessLevel::clamped(parse_int_lenient(&value));
            self.actuators.set_brightness(level);
        }
        Response::ok()
    }

    fn color(&mut self, target: &RequestTarget<'_>) -> Response {
        if let Some(value) = target.query_param("value") {
            self.actuators.fill_strip(hex_to_native_color(&value));
        }
        Response::ok()
    }
}
