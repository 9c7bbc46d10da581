mod dhcp_server;
mod http_server;
mod network;

pub(crate) use dhcp_server::dhcp_server_task;
pub use http_server::http_server_task;
pub(crate) use network::{network_runner_task, wifi_ap_task};
