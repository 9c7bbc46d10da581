use embassy_net::{
    Ipv4Address,
    Stack,
    udp::{PacketMetadata, UdpSocket},
};
use greenhouse_core::dhcp::{DhcpServerConfig, build_reply, parse_request};
use log::{debug, info, warn};

const DHCP_SERVER_PORT: u16 = 67;
const DHCP_CLIENT_PORT: u16 = 68;

/// DHCP server task
///
/// Answers DISCOVER with OFFER and REQUEST with ACK, broadcast to the client
/// port. Addresses are derived from the client MAC.
#[embassy_executor::task]
pub(crate) async fn dhcp_server_task(stack: Stack<'static>, config: DhcpServerConfig) {
    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(e) = socket.bind(DHCP_SERVER_PORT) {
        warn!("dhcp_server: failed to bind port {}: {:?}", DHCP_SERVER_PORT, e);
        return;
    }
    info!("dhcp_server: listening on port {}", DHCP_SERVER_PORT);

    let mut packet = [0u8; 576];

    loop {
        let len = match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => len,
            Err(e) => {
                warn!("dhcp_server: recv error: {:?}", e);
                continue;
            }
        };

        let Some(request) = parse_request(&packet[..len]) else {
            continue;
        };
        let Some(reply_type) = request.message_type.reply() else {
            debug!("dhcp_server: ignoring {:?}", request.message_type);
            continue;
        };

        let Some(reply_len) = build_reply(&config, &request, reply_type, &mut packet) else {
            continue;
        };
        debug!(
            "dhcp_server: {:?} -> {:?} {}",
            request.message_type,
            reply_type,
            config.allocate(&request.client_mac)
        );

        let dest = (Ipv4Address::BROADCAST, DHCP_CLIENT_PORT);
        if let Err(e) = socket.send_to(&packet[..reply_len], dest).await {
            warn!("dhcp_server: send error: {:?}", e);
        }
    }
}
