//! Control page rendering
//!
//! Plain `%TOKEN%` substitution over the static template; every occurrence of
//! a token is replaced.

use alloc::{
    format,
    string::{String, ToString},
};

use teplica_page::PAGE_TEMPLATE;

use crate::{
    sensors::{SensorReading, round_one_decimal},
    state::{ActuatorKind, DeviceState},
};

/// Render the control page template with live readings and switch states.
pub fn render_page(reading: &SensorReading, state: &DeviceState) -> String {
    render_template(PAGE_TEMPLATE, reading, state)
}

/// Render an arbitrary template with the control page tokens.
pub fn render_template(template: &str, reading: &SensorReading, state: &DeviceState) -> String {
    let brightness = state.brightness().percent().to_string();
    let substitutions = [
        ("%TEMPERATURE%", format_reading(reading.temperature_c)),
        ("%HUMIDITY%", format_reading(reading.humidity_pct)),
        ("%PRESSURE%", format_reading(reading.pressure_hpa)),
        ("%LUX%", format_reading(reading.illuminance_lux)),
        ("%WINDOW_STATE%", checked(state, ActuatorKind::Window)),
        ("%PUMP_STATE%", checked(state, ActuatorKind::Pump)),
        ("%WIND_STATE%", checked(state, ActuatorKind::Fan)),
        ("%LIGHT_STATE%", checked(state, ActuatorKind::Light)),
        ("%BRIGHTNESS%", brightness),
    ];

    substitute(template, &substitutions)
}

/// Replace each `(token, value)` pair throughout `template`.
pub fn substitute(template: &str, substitutions: &[(&str, String)]) -> String {
    let mut page = String::from(template);
    for (token, value) in substitutions {
        if page.contains(token) {
            page = page.replace(token, value);
        }
    }
    page
}

/// One-decimal number; non-finite readings render as `nan` / `inf`.
pub fn format_reading(value: f32) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    format!("{:.1}", round_one_decimal(value))
}

fn checked(state: &DeviceState, kind: ActuatorKind) -> String {
    if state.is_on(kind) {
        String::from("checked")
    } else {
        String::new()
    }
}
