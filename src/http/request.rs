/// A parsed request line.
///
/// Only the first two tokens of the request are kept. The method is any
/// verb token the client sent; it does not affect how the URI is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token (e.g. "GET")
    pub method: String,
    /// The request target as sent (e.g. "/index.html")
    pub uri: String,
}

impl Request {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
        }
    }

    /// Whether the request targets the root path.
    pub fn is_root(&self) -> bool {
        self.uri == "/"
    }
}
