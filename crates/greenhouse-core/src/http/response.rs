use alloc::string::String;
use core::fmt::Write;

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// HTTP Content Type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    TextHtml,
    TextPlain,
}

impl ContentType {
    /// Convert the content type to a string.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::TextHtml => "text/html",
            ContentType::TextPlain => "text/plain",
        }
    }
}

/// Text Encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
}

impl TextEncoding {
    /// Convert the text encoding to a string.
    pub const fn as_str(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

/// HTTP socket connection policy.
#[derive(Debug, Clone, Copy)]
enum ConnectionPolicy {
    Close,
}

impl ConnectionPolicy {
    const fn as_str(self) -> &'static str {
        match self {
            ConnectionPolicy::Close => "close",
        }
    }
}

/// HTTP Content Headers.
#[derive(Debug, Clone, Copy)]
pub struct ContentHeaders {
    content_type: ContentType,
    content_length: Option<usize>,
    text_encoding: Option<TextEncoding>,
}

impl ContentHeaders {
    /// Create a new content headers with a content type.
    pub const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            content_length: None,
            text_encoding: None,
        }
    }

    /// Set the content length.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Set the text encoding.
    #[must_use]
    pub const fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = Some(text_encoding);
        self
    }

    fn write_to(&self, writer: &mut impl Write) -> core::fmt::Result {
        write!(writer, "Content-Type: {}", self.content_type.as_str())?;
        if let Some(text_encoding) = self.text_encoding {
            write!(writer, "; charset={}", text_encoding.as_str())?;
        }
        write!(writer, "\r\n")?;
        if let Some(content_length) = self.content_length {
            write!(writer, "Content-Length: {}\r\n", content_length)?;
        }
        Ok(())
    }
}

/// Response Headers.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeaders {
    status: StatusCode,
    connection: ConnectionPolicy,
    content: Option<ContentHeaders>,
}

impl ResponseHeaders {
    /// Create empty response headers with a status code.
    pub const fn from_code(status: StatusCode) -> Self {
        Self {
            status,
            connection: ConnectionPolicy::Close,
            content: None,
        }
    }

    /// Set the content headers.
    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Write the status line and headers, including the blank line.
    pub fn write_to(&self, writer: &mut impl Write) -> core::fmt::Result {
        let reason = reason_phrase(self.status);
        write!(writer, "HTTP/1.1 {} {}\r\n", self.status, reason)?;
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        }

        write!(writer, "Connection: {}\r\n", self.connection.as_str())?;
        write!(writer, "\r\n")?;
        Ok(())
    }
}

/// Response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Static(&'static str),
    Owned(String),
}

impl Body {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Static(text) => text.as_bytes(),
            Body::Owned(text) => text.as_bytes(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Body::Static(text) => text,
            Body::Owned(text) => text.as_str(),
        }
    }
}

/// A complete response produced by the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub body: Body,
}

impl Response {
    /// `200` with a plain `OK` body, the reply to every actuator command.
    pub const fn ok() -> Self {
        Self::text(200, "OK")
    }

    pub const fn not_found() -> Self {
        Self::text(404, "Not Found")
    }

    pub const fn text(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            content_type: ContentType::TextPlain,
            body: Body::Static(body),
        }
    }

    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: ContentType::TextHtml,
            body: Body::Owned(body),
        }
    }

    pub fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: ContentType::Json,
            body: Body::Owned(body),
        }
    }

    /// Headers matching this response's status and body.
    pub fn headers(&self) -> ResponseHeaders {
        let content = ContentHeaders::new(self.content_type)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(self.body.as_bytes().len());
        ResponseHeaders::from_code(self.status).with_content(content)
    }
}
