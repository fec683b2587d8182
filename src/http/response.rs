use std::fmt;

/// HTTP status codes the server emits.
///
/// - `Ok` (200): file found and streamed
/// - `NotFound` (404): no file matches the URI
/// - `InternalServerError` (500): any other per-request failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the reason phrase written on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        status_text(self.as_u16())
    }
}

/// Maps a numeric status code to its reason phrase.
///
/// Only 200, 404 and 500 are known; everything else is `"Unknown Error"`.
///
/// # Example
///
/// ```
/// # use tinyserve::http::response::status_text;
/// assert_eq!(status_text(500), "Internal Server Error");
/// assert_eq!(status_text(418), "Unknown Error");
/// ```
pub fn status_text(code: u16) -> &'static str {
    match code {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown Error",
    }
}

const HTTP_VERSION: &str = "HTTP/1.1";

/// The header block sent ahead of every response body.
///
/// Serialises with bare `\n` line endings and a blank line terminator:
///
/// ```text
/// HTTP/1.1 <code> <text>
/// Content-Length: <n>
/// Content-Type: <type>
///
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub status_code: u16,
    pub status_text: &'static str,
    /// Body length as declared by the caller; never recomputed here.
    pub content_length: u64,
    pub content_type: String,
}

impl ResponseHeader {
    pub fn new(status_code: u16, content_length: u64, content_type: impl Into<String>) -> Self {
        Self {
            status_code,
            status_text: status_text(status_code),
            content_length,
            content_type: content_type.into(),
        }
    }
}

impl fmt::Display for ResponseHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}\nContent-Length: {}\nContent-Type: {}\n\n",
            HTTP_VERSION, self.status_code, self.status_text, self.content_length, self.content_type
        )
    }
}

/// Builds the serialised header text for a response.
pub fn build_header(status_code: u16, content_length: u64, content_type: &str) -> String {
    ResponseHeader::new(status_code, content_length, content_type).to_string()
}

pub const NOT_FOUND_BODY: &[u8] = b"<h1>404 Not Found</h1>\n";
pub const INTERNAL_SERVER_ERROR_BODY: &[u8] = b"<h1>500 Internal Server Error</h1>\n";

/// A fixed error response: status plus hard-coded HTML body.
///
/// The advertised `Content-Length` is exactly `body.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub body: &'static [u8],
}

impl CannedResponse {
    /// Creates the 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            body: NOT_FOUND_BODY,
        }
    }

    /// Creates the 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            body: INTERNAL_SERVER_ERROR_BODY,
        }
    }

    pub fn header(&self) -> ResponseHeader {
        ResponseHeader::new(self.status.as_u16(), self.body.len() as u64, "text/html")
    }

    /// Header followed by body, ready for the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = self.header().to_string().into_bytes();
        buf.extend_from_slice(self.body);
        buf
    }
}
