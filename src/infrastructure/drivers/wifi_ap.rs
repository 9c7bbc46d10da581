use embassy_executor::Spawner;
use embassy_net::{Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_radio::{InitializationError, wifi::WifiError};
use greenhouse_core::dhcp::DhcpServerConfig;
use log::info;
use static_cell::make_static;

use super::random::get_seed;
use crate::infrastructure::{
    config,
    tasks::{dhcp_server_task, network_runner_task, wifi_ap_task},
};

const MAX_CONNECTIONS: usize = 6;

/// Access point bring-up failure
#[derive(Debug)]
pub enum NetworkError {
    Radio(InitializationError),
    Wifi(WifiError),
}

/// Start the access point and its network stack.
///
/// The AP owns a static address; clients get theirs from the built-in DHCP
/// server, which is spawned once the link is up.
pub async fn start_wifi_ap(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
) -> Result<Stack<'static>, NetworkError> {
    let ap = &config::ACCESS_POINT;
    let radio = esp_radio::init().map_err(NetworkError::Radio)?;
    let esp_radio_ctrl = &*make_static!(radio);
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, esp_radio::wifi::Config::default())
            .map_err(NetworkError::Wifi)?;

    let static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(ap.address, ap.prefix_len),
        gateway: Some(ap.address),
        dns_servers: heapless::Vec::default(),
    };
    let net_config = embassy_net::Config::ipv4_static(static_config);

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.ap, net_config, network_resources, get_seed());

    spawner.spawn(wifi_ap_task(controller)).ok();
    spawner.spawn(network_runner_task(runner)).ok();

    while !stack.is_link_up() {
        Timer::after(Duration::from_millis(100)).await;
    }
    info!("wifi_ap: link up, address {}", ap.address);

    spawner
        .spawn(dhcp_server_task(stack, DhcpServerConfig::new(ap.address)))
        .ok();

    Ok(stack)
}
