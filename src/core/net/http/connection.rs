use embassy_net::tcp::{Error as TcpError, TcpSocket};
use embedded_io_async::Write as _;
use greenhouse_core::http::{HttpMethod, Response, parse_request_line, request_line};
use heapless::String;

use super::{Error, HttpResult};

const HEADER_BUFFER_SIZE: usize = 1024;
const RESPONSE_HEAD_SIZE: usize = 256;
const TARGET_SIZE: usize = 256;
const STREAM_CHUNK_SIZE: usize = 1024;

/// HTTP connection context
///
/// Holds the parsed request line; the request body, if any, is never read.
pub(crate) struct HttpConnection<'a> {
    method: HttpMethod,
    target: String<TARGET_SIZE>,
    socket: TcpSocket<'a>,
}

impl<'a> HttpConnection<'a> {
    /// Read the request head from a freshly accepted socket.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        let mut header_buf = [0u8; HEADER_BUFFER_SIZE];
        let (header_end, header_len) = read_heading(&mut header_buf, &mut socket).await?;
        if header_len == 0 {
            return Err(Error::NoData);
        }

        let line = request_line(&header_buf[..header_end]).ok_or(Error::Parse)?;
        let (method, raw_target) = parse_request_line(line).ok_or(Error::Parse)?;

        let mut target = String::new();
        target.push_str(raw_target).map_err(|()| Error::Parse)?;

        Ok(Self {
            method,
            target,
            socket,
        })
    }

    /// Get request method and raw target (path plus query)
    pub(crate) fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.target.as_str())
    }

    /// Write headers and body, then close the connection.
    pub(crate) async fn write_response(&mut self, response: &Response) -> HttpResult {
        let mut head = String::<RESPONSE_HEAD_SIZE>::new();
        response.headers().write_to(&mut head)?;
        self.socket.write_all(head.as_bytes()).await?;

        for chunk in response.body.as_bytes().chunks(STREAM_CHUNK_SIZE) {
            self.socket.write_all(chunk).await?;
        }
        self.socket.flush().await?;

        self.socket.close();
        self.socket.flush().await?;
        Ok(())
    }
}

/// Read the start line and headers from the socket.
///
/// Returns the position of the end of the headers and the number of bytes read.
/// A head larger than the buffer is cut at the buffer size.
async fn read_heading(
    buf: &mut [u8],
    socket: &mut TcpSocket<'_>,
) -> Result<(usize, usize), TcpError> {
    let mut header_len = 0;
    loop {
        let n = socket.read(&mut buf[header_len..]).await?;
        if n == 0 {
            return Ok((header_len, header_len));
        }
        header_len += n;
        if let Some(pos) = buf[..header_len].windows(4).position(|w| w == b"\r\n\r\n") {
            return Ok((pos + 4, header_len));
        }
        if header_len >= buf.len() {
            return Ok((header_len, header_len));
        }
    }
}
