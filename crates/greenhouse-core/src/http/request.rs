use alloc::string::String;

use percent_encoding::percent_decode_str;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "OPTIONS" => HttpMethod::Options,
            "HEAD" => HttpMethod::Head,
            _ => return None,
        })
    }
}

/// Parse the request line from the header string.
///
/// Returns the method and the raw request target.
pub fn parse_request_line(header_str: &str) -> Option<(HttpMethod, &str)> {
    let line_end = header_str.find("\r\n").unwrap_or(header_str.len());
    let mut parts = header_str[..line_end].split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let target = parts.next()?;

    Some((method, target))
}

/// The request line of a raw request head, without its CRLF.
///
/// Only this line has to be valid UTF-8; header bytes after it are ignored.
pub fn request_line(head: &[u8]) -> Option<&str> {
    let line_end = head
        .windows(2)
        .position(|w| w == b"\r\n")
        .unwrap_or(head.len());
    core::str::from_utf8(&head[..line_end]).ok()
}

/// Request target split into path and query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTarget<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
}

impl<'a> RequestTarget<'a> {
    /// Split a raw target such as `/light/brightness/?value=40`.
    ///
    /// Any fragment is dropped.
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.split_once('#').map_or(raw, |(before, _)| before);
        match raw.split_once('?') {
            Some((path, query)) => Self {
                path,
                query: Some(query),
            },
            None => Self {
                path: raw,
                query: None,
            },
        }
    }

    /// First value of the query parameter `name`, URL-decoded.
    ///
    /// A parameter given without `=` yields an empty value.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query?
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| url_decode(key) == name)
            .map(|(_, value)| url_decode(value))
    }
}

/// Decode `%XX` escapes and `+` as a space.
///
/// Malformed escapes are kept literally; invalid UTF-8 is replaced.
pub fn url_decode(input: &str) -> String {
    percent_decode_str(&input.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Parse a decimal integer the way `atoi` does.
///
/// Leading whitespace and one sign are accepted, digits are consumed up to the
/// first non-digit, and anything unparseable yields 0. Out-of-range values
/// saturate.
pub fn parse_int_lenient(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            (acc * 10 + i64::from(digit - b'0')).min(i64::from(i32::MAX) + 1)
        });
    let value = if negative { -magnitude } else { magnitude };

    i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}
