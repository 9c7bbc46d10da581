//! Stateless DHCP for the access point
//!
//! Clients get an address derived from their MAC, so no lease table is kept.
//! Only DISCOVER and REQUEST are answered.

use core::net::Ipv4Addr;

const OP_BOOTREQUEST: u8 = 1;
const OP_BOOTREPLY: u8 = 2;
const HTYPE_ETHERNET: u8 = 1;
const HLEN_ETHERNET: u8 = 6;
const FLAG_BROADCAST: [u8; 2] = [0x80, 0x00];

const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];
const OPTIONS_OFFSET: usize = 240;

const OPTION_PAD: u8 = 0;
const OPTION_SUBNET_MASK: u8 = 1;
const OPTION_ROUTER: u8 = 3;
const OPTION_DNS: u8 = 6;
const OPTION_LEASE_TIME: u8 = 51;
const OPTION_MESSAGE_TYPE: u8 = 53;
const OPTION_SERVER_ID: u8 = 54;
const OPTION_END: u8 = 255;

/// Smallest packet that still holds a response with our options.
pub const MIN_RESPONSE_BUFFER: usize = OPTIONS_OFFSET + 3 + 6 * 5 + 1;

/// DHCP message types handled by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Discover,
    Offer,
    Request,
    Ack,
}

impl MessageType {
    const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Discover),
            2 => Some(Self::Offer),
            3 => Some(Self::Request),
            5 => Some(Self::Ack),
            _ => None,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::Discover => 1,
            Self::Offer => 2,
            Self::Request => 3,
            Self::Ack => 5,
        }
    }

    /// Reply type for a client message, `None` for anything we ignore.
    pub const fn reply(self) -> Option<Self> {
        match self {
            Self::Discover => Some(Self::Offer),
            Self::Request => Some(Self::Ack),
            Self::Offer | Self::Ack => None,
        }
    }
}

/// Parsed client message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhcpRequest {
    pub xid: [u8; 4],
    pub client_mac: [u8; 6],
    pub message_type: MessageType,
}

/// Address plan served to clients
#[derive(Debug, Clone, Copy)]
pub struct DhcpServerConfig {
    /// Address of the access point itself, also announced as router and DNS
    pub server: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    /// Last octet of the first address handed out
    pub pool_start: u8,
    pub pool_size: u8,
    pub lease_secs: u32,
}

impl DhcpServerConfig {
    /// Pool of 49 addresses starting at `.2` of the server's /24.
    pub const fn new(server: Ipv4Addr) -> Self {
        Self {
            server,
            subnet_mask: Ipv4Addr::new(255, 255, 255, 0),
            pool_start: 2,
            pool_size: 49,
            lease_secs: 3600,
        }
    }

    /// Address for a client, stable for a given MAC.
    pub const fn allocate(&self, mac: &[u8; 6]) -> Ipv4Addr {
        let [a, b, c, _] = self.server.octets();
        let size = if self.pool_size == 0 { 1 } else { self.pool_size };
        Ipv4Addr::new(a, b, c, self.pool_start.wrapping_add(mac[5] % size))
    }
}

/// Parse a BOOTREQUEST; `None` for anything malformed or unsupported.
pub fn parse_request(packet: &[u8]) -> Option<DhcpRequest> {
    if packet.len() < OPTIONS_OFFSET || packet[0] != OP_BOOTREQUEST {
        return None;
    }
    if packet[236..OPTIONS_OFFSET] != MAGIC_COOKIE {
        return None;
    }

    let message_type = find_option(&packet[OPTIONS_OFFSET..], OPTION_MESSAGE_TYPE)
        .and_then(|data| data.first().copied())
        .and_then(MessageType::from_u8)?;

    let mut xid = [0u8; 4];
    xid.copy_from_slice(&packet[4..8]);
    let mut client_mac = [0u8; 6];
    client_mac.copy_from_slice(&packet[28..34]);

    Some(DhcpRequest {
        xid,
        client_mac,
        message_type,
    })
}

/// Write a reply of `reply_type` into `buffer`, returning its length.
///
/// Returns `None` when the buffer is shorter than [`MIN_RESPONSE_BUFFER`].
pub fn build_reply(
    config: &DhcpServerConfig,
    request: &DhcpRequest,
    reply_type: MessageType,
    buffer: &mut [u8],
) -> Option<usize> {
    if buffer.len() < MIN_RESPONSE_BUFFER {
        return None;
    }
    buffer.fill(0);

    buffer[0] = OP_BOOTREPLY;
    buffer[1] = HTYPE_ETHERNET;
    buffer[2] = HLEN_ETHERNET;
    buffer[4..8].copy_from_slice(&request.xid);
    buffer[10..12].copy_from_slice(&FLAG_BROADCAST);
    buffer[16..20].copy_from_slice(&config.allocate(&request.client_mac).octets());
    buffer[20..24].copy_from_slice(&config.server.octets());
    buffer[28..34].copy_from_slice(&request.client_mac);
    buffer[236..OPTIONS_OFFSET].copy_from_slice(&MAGIC_COOKIE);

    let server = config.server.octets();
    let mut options = OptionWriter::new(&mut buffer[OPTIONS_OFFSET..]);
    options.put(OPTION_MESSAGE_TYPE, &[reply_type.as_u8()]);
    options.put(OPTION_SERVER_ID, &server);
    options.put(OPTION_LEASE_TIME, &config.lease_secs.to_be_bytes());
    options.put(OPTION_SUBNET_MASK, &config.subnet_mask.octets());
    options.put(OPTION_ROUTER, &server);
    options.put(OPTION_DNS, &server);
    let options_len = options.finish();

    Some(OPTIONS_OFFSET + options_len)
}

/// Sequential TLV writer over the options area
struct OptionWriter<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> OptionWriter<'a> {
    const fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn put(&mut self, code: u8, data: &[u8]) {
        let start = self.position;
        self.buffer[start] = code;
        self.buffer[start + 1] = data.len() as u8;
        self.buffer[start + 2..start + 2 + data.len()].copy_from_slice(data);
        self.position = start + 2 + data.len();
    }

    fn finish(self) -> usize {
        self.buffer[self.position] = OPTION_END;
        self.position + 1
    }
}

/// Find an option's payload in the area after the magic cookie.
fn find_option(options: &[u8], wanted: u8) -> Option<&[u8]> {
    let mut i = 0;
    while let Some(&code) = options.get(i) {
        match code {
            OPTION_END => return None,
            OPTION_PAD => i += 1,
            _ => {
                let len = usize::from(*options.get(i + 1)?);
                let data = options.get(i + 2..i + 2 + len)?;
                if code == wanted {
                    return Some(data);
                }
                i += 2 + len;
            }
        }
    }
    None
}
