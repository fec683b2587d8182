//! Content-type inference from file names.

/// Content type used for any extension missing from [`MIME_TYPES`].
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Extension to content-type table. Matching is exact and case-sensitive.
pub const MIME_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".gif", "image/gif"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".ico", "image/ico"),
    (".mp3", "audio/mpeg"),
    (".pdf", "application/pdf"),
];

/// Returns the suffix of `name` starting at its *first* `.`.
///
/// `"archive.tar.gz"` yields `".tar.gz"`, not `".gz"`.
pub fn extension(name: &str) -> Option<&str> {
    name.find('.').map(|idx| &name[idx..])
}

/// Resolves the content type for a file path or name.
///
/// Unknown extensions, and names without any `.`, fall back to
/// [`DEFAULT_MIME_TYPE`].
///
/// # Example
///
/// ```
/// # use tinyserve::http::mime::content_type;
/// assert_eq!(content_type("index.html"), "text/html");
/// assert_eq!(content_type("notes.md"), "text/plain");
/// ```
pub fn content_type(name: &str) -> &'static str {
    extension(name)
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(DEFAULT_MIME_TYPE)
}
