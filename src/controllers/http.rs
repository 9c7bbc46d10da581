use greenhouse_core::ActuatorKind;
use log::info;

use crate::{
    config::BUILD_VERSION,
    core::net::http::{HttpConnection, HttpHandler, HttpResult},
    infrastructure::{hardware::GreenhouseHardware, types::GreenhouseImpl},
    mk_static,
};

/// Serves the control page and API from the greenhouse context
pub struct GreenhouseHttpController {
    greenhouse: GreenhouseImpl,
}

impl HttpHandler for GreenhouseHttpController {
    async fn handle_request(&mut self, mut conn: HttpConnection<'_>) -> HttpResult {
        let (method, target) = conn.route();
        let response = self.greenhouse.handle(method, target);
        info!("http: {:?} {} -> {}", method, target, response.status);

        conn.write_response(&response).await
    }
}

/// Bring the hardware to its boot state and wrap it in the HTTP controller.
pub fn init_controllers(
    hardware: GreenhouseHardware,
) -> &'static mut GreenhouseHttpController {
    let greenhouse = hardware.init();
    let state = greenhouse.actuators().state();
    info!(
        "greenhouse {}: pump={} fan={} window={} light={} brightness={}",
        BUILD_VERSION,
        state.is_on(ActuatorKind::Pump),
        state.is_on(ActuatorKind::Fan),
        state.window_angle(),
        state.is_on(ActuatorKind::Light),
        state.brightness_register(),
    );

    mk_static!(
        GreenhouseHttpController,
        GreenhouseHttpController { greenhouse }
    )
}
