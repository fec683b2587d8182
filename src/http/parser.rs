use memchr::memchr;
use thiserror::Error;

use crate::http::request::Request;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request")]
    Empty,
    #[error("request line has no method")]
    MissingMethod,
    #[error("request line has no URI")]
    MissingUri,
    #[error("request line is not valid UTF-8")]
    InvalidEncoding,
}

/// Returns the bytes of the first line of `buf`, without the `\n`.
///
/// If there is no newline the whole buffer is the request line.
pub fn request_line(buf: &[u8]) -> &[u8] {
    let end = memchr(b'\n', buf).unwrap_or(buf.len());
    &buf[..end]
}

/// Parses method and URI out of a single bounded read.
///
/// Headers and body are ignored. Tokens after the URI (the version) are
/// ignored as well.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let line = std::str::from_utf8(request_line(buf))
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut parts = line.split_ascii_whitespace();
    let method = parts.next().ok_or(ParseError::MissingMethod)?;
    let uri = parts.next().ok_or(ParseError::MissingUri)?;

    Ok(Request::new(method, uri))
}
