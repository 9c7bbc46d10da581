//! HTTP request/response codec
//!
//! Socket handling lives in the firmware; this module only deals with text.

mod request;
mod response;

pub use request::{
    HttpMethod,
    RequestTarget,
    parse_int_lenient,
    parse_request_line,
    request_line,
    url_decode,
};
pub use response::{
    Body,
    ContentHeaders,
    ContentType,
    Response,
    ResponseHeaders,
    StatusCode,
    TextEncoding,
};
