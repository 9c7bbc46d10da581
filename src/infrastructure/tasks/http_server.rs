use embassy_net::Stack;
use log::error;

use crate::{config::HTTP_PORT, controllers::GreenhouseHttpController, core::net::http::HttpServer};

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 4096;

#[embassy_executor::task]
pub async fn http_server_task(
    stack: Stack<'static>,
    controller: &'static mut GreenhouseHttpController,
) {
    let mut server = HttpServer::new(controller);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    if let Err(e) = server
        .listen_and_serve(stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await
    {
        error!("http_server: stopped: {:?}", e);
    }
}
