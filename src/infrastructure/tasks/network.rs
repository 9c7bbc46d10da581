use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{AccessPointConfig, AuthMethod, ModeConfig, WifiController, WifiDevice};
use log::{error, info};

use crate::infrastructure::config;

/// Background task for running the Wi-Fi access point
///
/// WPA2 with the configured password, or an open network when it is empty.
#[embassy_executor::task]
pub(crate) async fn wifi_ap_task(mut controller: WifiController<'static>) {
    let ap = &config::ACCESS_POINT;
    info!("wifi_ap: starting AP with SSID '{}'", ap.ssid);

    let ap_config = if ap.password.is_empty() {
        AccessPointConfig::default()
            .with_ssid(ap.ssid.into())
            .with_auth_method(AuthMethod::None)
    } else {
        AccessPointConfig::default()
            .with_ssid(ap.ssid.into())
            .with_password(ap.password.into())
            .with_auth_method(AuthMethod::Wpa2Personal)
    };

    if let Err(e) = controller.set_config(&ModeConfig::AccessPoint(ap_config)) {
        error!("wifi_ap: invalid configuration: {:?}", e);
        return;
    }
    if let Err(e) = controller.start_async().await {
        error!("wifi_ap: failed to start: {:?}", e);
        return;
    }
    info!("wifi_ap: AP started");

    // Keep the controller alive
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub(crate) async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
