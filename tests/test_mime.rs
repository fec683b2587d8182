use tinyserve::http::mime::{content_type, extension, DEFAULT_MIME_TYPE, MIME_TYPES};

#[test]
fn test_known_extensions_map_exactly() {
    let expected = vec![
        ("index.html", "text/html"),
        ("anim.gif", "image/gif"),
        ("photo.jpg", "image/jpeg"),
        ("photo.jpeg", "image/jpeg"),
        ("favicon.ico", "image/ico"),
        ("song.mp3", "audio/mpeg"),
        ("paper.pdf", "application/pdf"),
    ];

    for (name, mime) in expected {
        assert_eq!(content_type(name), mime, "{}", name);
    }
}

#[test]
fn test_every_table_entry_resolves() {
    for (ext, mime) in MIME_TYPES {
        assert_eq!(content_type(&format!("file{}", ext)), *mime);
    }
}

#[test]
fn test_unknown_extension_falls_back() {
    assert_eq!(content_type("style.css"), DEFAULT_MIME_TYPE);
    assert_eq!(content_type("data.json"), "text/plain");
}

#[test]
fn test_matching_is_case_sensitive() {
    assert_eq!(content_type("INDEX.HTML"), "text/plain");
    assert_eq!(content_type("photo.JPG"), "text/plain");
}

#[test]
fn test_multiple_dots_match_from_first_dot() {
    assert_eq!(extension("page.min.html"), Some(".min.html"));
    assert_eq!(content_type("page.min.html"), "text/plain");
}

#[test]
fn test_name_without_dot_falls_back() {
    assert_eq!(extension("Makefile"), None);
    assert_eq!(content_type("Makefile"), "text/plain");
}
