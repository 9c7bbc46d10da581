use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;
use log::warn;

use super::{HttpResult, connection::HttpConnection};

const SOCKET_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) trait HttpHandler {
    async fn handle_request(&mut self, conn: HttpConnection<'_>) -> HttpResult;
}

/// Sequential HTTP server: one connection is accepted and answered at a time.
pub(crate) struct HttpServer<'a, T: HttpHandler> {
    handler: &'a mut T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub(crate) fn new(handler: &'a mut T) -> Self {
        Self { handler }
    }

    pub(crate) async fn listen_and_serve(
        &mut self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) -> HttpResult {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(SOCKET_TIMEOUT));

            if let Err(e) = socket.accept(port).await {
                warn!("http_server: accept error: {:?}", e);
                continue;
            }

            let conn = match HttpConnection::from_socket(socket).await {
                Ok(connection) => connection,
                Err(e) => {
                    warn!("http_server: connection startup error: {:?}", e);
                    continue;
                }
            };

            if let Err(e) = self.handler.handle_request(conn).await {
                warn!("http_server: connection error: {:?}", e);
            }
        }
    }
}
