//! DHCP codec for the access point.

use std::net::Ipv4Addr;

use greenhouse_core::dhcp::{
    DhcpServerConfig,
    MIN_RESPONSE_BUFFER,
    MessageType,
    build_reply,
    parse_request,
};

const MAC: [u8; 6] = [0x02, 0x11, 0x22, 0x33, 0x44, 0x55];
const SERVER: Ipv4Addr = Ipv4Addr::new(192, 168, 4, 1);

fn client_packet(message_type: u8) -> Vec<u8> {
    let mut packet = vec![0u8; 300];
    packet[0] = 1;
    packet[1] = 1;
    packet[2] = 6;
    packet[4..8].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    packet[28..34].copy_from_slice(&MAC);
    packet[236..240].copy_from_slice(&[99, 130, 83, 99]);
    // pad, hostname option, then message type
    packet[240] = 0;
    packet[241..246].copy_from_slice(&[12, 3, b'a', b'b', b'c']);
    packet[246..249].copy_from_slice(&[53, 1, message_type]);
    packet[249] = 255;
    packet
}

fn option<'a>(reply: &'a [u8], code: u8) -> Option<&'a [u8]> {
    let mut i = 240;
    while i < reply.len() && reply[i] != 255 {
        let len = usize::from(reply[i + 1]);
        if reply[i] == code {
            return Some(&reply[i + 2..i + 2 + len]);
        }
        i += 2 + len;
    }
    None
}

#[test]
fn parses_discover_past_other_options() {
    let request = parse_request(&client_packet(1)).unwrap();

    assert_eq!(request.message_type, MessageType::Discover);
    assert_eq!(request.client_mac, MAC);
    assert_eq!(request.xid, [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn ignores_replies_short_packets_and_bad_cookies() {
    let mut reply = client_packet(1);
    reply[0] = 2;
    assert!(parse_request(&reply).is_none());

    assert!(parse_request(&client_packet(1)[..200]).is_none());

    let mut bad_cookie = client_packet(1);
    bad_cookie[236] = 0;
    assert!(parse_request(&bad_cookie).is_none());

    assert!(parse_request(&client_packet(7)).is_none());
}

#[test]
fn discover_gets_offer_and_request_gets_ack() {
    assert_eq!(MessageType::Discover.reply(), Some(MessageType::Offer));
    assert_eq!(MessageType::Request.reply(), Some(MessageType::Ack));
    assert_eq!(MessageType::Offer.reply(), None);
}

#[test]
fn allocation_is_stable_and_inside_the_pool() {
    let config = DhcpServerConfig::new(SERVER);

    assert_eq!(config.allocate(&MAC), config.allocate(&MAC));
    for last in 0..=255u8 {
        let mac = [0, 0, 0, 0, 0, last];
        let [a, b, c, d] = config.allocate(&mac).octets();
        assert_eq!([a, b, c], [192, 168, 4]);
        assert!((2..=50).contains(&d), "{d} outside pool");
    }
}

#[test]
fn builds_offer_for_the_client() {
    let config = DhcpServerConfig::new(SERVER);
    let request = parse_request(&client_packet(1)).unwrap();
    let mut buffer = [0xAAu8; 576];

    let len = build_reply(&config, &request, MessageType::Offer, &mut buffer).unwrap();
    let reply = &buffer[..len];

    assert_eq!(len, MIN_RESPONSE_BUFFER);
    assert_eq!(reply[0], 2);
    assert_eq!(&reply[4..8], &request.xid);
    assert_eq!(&reply[16..20], &config.allocate(&MAC).octets());
    assert_eq!(&reply[20..24], &SERVER.octets());
    assert_eq!(&reply[28..34], &MAC);
    assert_eq!(option(reply, 53), Some(&[2u8][..]));
    assert_eq!(option(reply, 54), Some(&SERVER.octets()[..]));
    assert_eq!(option(reply, 1), Some(&[255u8, 255, 255, 0][..]));
    assert_eq!(option(reply, 51), Some(&3600u32.to_be_bytes()[..]));
    assert_eq!(reply[len - 1], 255);
}

#[test]
fn refuses_too_small_buffer() {
    let config = DhcpServerConfig::new(SERVER);
    let request = parse_request(&client_packet(3)).unwrap();
    let mut buffer = [0u8; 100];

    assert_eq!(
        build_reply(&config, &request, MessageType::Ack, &mut buffer),
        None
    );
}
