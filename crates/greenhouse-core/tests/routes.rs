//! End-to-end route dispatch over mocked hardware.

mod common;

use common::{CLIMATE, LIGHT, MockClimate, greenhouse, greenhouse_with};
use greenhouse_core::{
    ActuatorKind,
    NativeColor,
    Route,
    http::{ContentType, HttpMethod, Response},
};

#[test]
fn pump_round_trip_is_reflected_on_the_page() {
    let (mut greenhouse, outputs) = greenhouse();

    let response = greenhouse.handle(HttpMethod::Get, "/pump/off");
    assert_eq!(response.status, 200);
    assert_eq!(response.body.as_str(), "OK");
    assert_eq!(response.content_type, ContentType::TextPlain);
    assert!(!greenhouse.actuators().state().is_on(ActuatorKind::Pump));

    let response = greenhouse.handle(HttpMethod::Get, "/pump/on");
    assert_eq!(response.body.as_str(), "OK");
    assert!(greenhouse.actuators().state().is_on(ActuatorKind::Pump));
    assert!(outputs.pump.is_high());

    let page = greenhouse.handle(HttpMethod::Get, "/");
    assert_eq!(page.status, 200);
    assert_eq!(page.content_type, ContentType::TextHtml);
    assert!(page.body.as_str().contains(r#"id="pump-switch" checked>"#));
    assert!(page.body.as_str().contains(r#"id="wind-switch" >"#));
}

#[test]
fn every_toggle_route_answers_ok() {
    let (mut greenhouse, outputs) = greenhouse();

    for path in [
        "/wind/on",
        "/window/open",
        "/light/on",
        "/light/off",
        "/window/close",
        "/wind/off",
    ] {
        let response = greenhouse.handle(HttpMethod::Get, path);
        assert_eq!(response.status, 200, "{path}");
        assert_eq!(response.body.as_str(), "OK", "{path}");
    }

    let state = greenhouse.actuators().state();
    assert!(!state.is_on(ActuatorKind::Fan));
    assert!(!state.is_on(ActuatorKind::Window));
    assert!(!state.is_on(ActuatorKind::Light));
    assert!(!outputs.fan.is_high());
}

#[test]
fn brightness_above_range_is_clamped() {
    let (mut greenhouse, _outputs) = greenhouse();

    let response = greenhouse.handle(HttpMethod::Get, "/light/brightness/?value=150");

    assert_eq!(response.body.as_str(), "OK");
    assert_eq!(greenhouse.actuators().strip().brightness(), 255);
}

#[test]
fn non_numeric_brightness_becomes_zero() {
    let (mut greenhouse, outputs) = greenhouse();

    let response = greenhouse.handle(HttpMethod::Get, "/light/brightness/?value=abc");

    assert_eq!(response.status, 200);
    assert_eq!(response.body.as_str(), "OK");
    assert_eq!(greenhouse.actuators().strip().brightness(), 0);
    assert!(outputs.frame().iter().all(|&p| p == NativeColor::BLACK));
}

#[test]
fn missing_brightness_value_changes_nothing() {
    let (mut greenhouse, _outputs) = greenhouse();

    for target in ["/light/brightness/", "/light/brightness/?level=80"] {
        let response = greenhouse.handle(HttpMethod::Get, target);
        assert_eq!(response.body.as_str(), "OK");
        assert_eq!(greenhouse.actuators().strip().brightness(), 50);
    }
}

#[test]
fn brightness_accepts_leading_digits_and_negative_values() {
    let (mut greenhouse, _outputs) = greenhouse();

    greenhouse.handle(HttpMethod::Get, "/light/brightness/?value=60%25");
    assert_eq!(greenhouse.actuators().strip().brightness(), 153);

    greenhouse.handle(HttpMethod::Get, "/light/brightness/?value=-5");
    assert_eq!(greenhouse.actuators().strip().brightness(), 0);
}

#[test]
fn slider_is_shown_as_percent_on_the_page() {
    let (mut greenhouse, _outputs) = greenhouse();

    greenhouse.handle(HttpMethod::Get, "/light/brightness/?value=35");
    let page = greenhouse.handle(HttpMethod::Get, "/");

    assert!(page.body.as_str().contains(r#"value="35""#));
    assert!(page.body.as_str().contains(">35%<"));
}

#[test]
fn sensor_data_is_json_with_one_decimal() {
    let (mut greenhouse, _outputs) = greenhouse();

    let response = greenhouse.handle(HttpMethod::Get, "/sensor/data");

    assert_eq!(response.status, 200);
    assert_eq!(response.content_type, ContentType::Json);
    assert_eq!(
        response.body.as_str(),
        r#"{"temperature":21.5,"humidity":55.0,"pressure":1013.3,"lux":312.3}"#
    );
}

#[test]
fn uninitialized_sensor_is_reported_not_rejected() {
    let broken = MockClimate {
        temperature: f32::NAN,
        ..CLIMATE
    };
    let (mut greenhouse, _outputs) = greenhouse_with(broken, LIGHT);

    let response = greenhouse.handle(HttpMethod::Get, "/sensor/data");
    assert_eq!(response.status, 200);
    assert!(response.body.as_str().starts_with(r#"{"temperature":null,"#));

    let page = greenhouse.handle(HttpMethod::Get, "/");
    assert_eq!(page.status, 200);
    assert!(page.body.as_str().contains("nan °C"));
}

#[test]
fn finite_driver_sentinel_passes_through() {
    let sentinel = MockClimate {
        temperature: -145.0,
        ..CLIMATE
    };
    let (mut greenhouse, _outputs) = greenhouse_with(sentinel, LIGHT);

    let response = greenhouse.handle(HttpMethod::Get, "/sensor/data");

    assert!(response.body.as_str().starts_with(r#"{"temperature":-145.0,"#));
}

#[test]
fn color_route_fills_the_strip() {
    let (mut greenhouse, outputs) = greenhouse();
    greenhouse.handle(HttpMethod::Get, "/light/on");

    let response = greenhouse.handle(HttpMethod::Get, "/light/color/?value=%23FF8000");

    assert_eq!(response.body.as_str(), "OK");
    let expected = NativeColor::from_rgb(0xFF, 0x80, 0x00);
    assert!(greenhouse.actuators().strip().pixels().iter().all(|&p| p == expected));
    assert!(outputs.frame().iter().all(|&p| p == expected));
}

#[test]
fn unknown_paths_and_methods_are_not_found() {
    let (mut greenhouse, _outputs) = greenhouse();

    for (method, target) in [
        (HttpMethod::Get, "/pump"),
        (HttpMethod::Get, "/light/brightness"),
        (HttpMethod::Get, "/pump/on/extra"),
        (HttpMethod::Post, "/pump/on"),
    ] {
        let response = greenhouse.handle(method, target);
        assert_eq!(response.status, 404, "{method:?} {target}");
        assert_eq!(response.body.as_str(), "Not Found");
    }
    assert!(!greenhouse.actuators().state().is_on(ActuatorKind::Pump));
}

#[test]
fn route_table_ignores_query_when_matching() {
    assert_eq!(Route::parse(HttpMethod::Get, "/"), Some(Route::Page));
    assert_eq!(
        Route::parse(HttpMethod::Get, "/window/open"),
        Some(Route::Window(true))
    );

    let (mut greenhouse, _outputs) = greenhouse();
    let response = greenhouse.handle(HttpMethod::Get, "/pump/on?source=page");
    assert_eq!(response.status, 200);
    assert!(greenhouse.actuators().state().is_on(ActuatorKind::Pump));
}

#[test]
fn response_head_carries_length_and_close() {
    let (mut greenhouse, _outputs) = greenhouse();
    let response = greenhouse.handle(HttpMethod::Get, "/wind/on");

    let mut head = String::new();
    response.headers().write_to(&mut head).unwrap();

    assert_eq!(
        head,
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: 2\r\nConnection: close\r\n\r\n"
    );
}

#[test]
fn not_found_and_server_error_heads_use_their_reason_phrases() {
    let (mut greenhouse, _outputs) = greenhouse();

    let mut head = String::new();
    greenhouse
        .handle(HttpMethod::Get, "/missing")
        .headers()
        .write_to(&mut head)
        .unwrap();
    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));

    let mut head = String::new();
    Response::text(500, "Internal Server Error")
        .headers()
        .write_to(&mut head)
        .unwrap();
    assert!(head.starts_with("HTTP/1.1 500 Internal Server Error\r\n"));

    let mut head = String::new();
    Response::text(418, "teapot").headers().write_to(&mut head).unwrap();
    assert!(head.starts_with("HTTP/1.1 418 Unknown\r\n"));
}
