use tinyserve::http::parser::parse_request;
use tinyserve::http::request::Request;

#[test]
fn test_request_new() {
    let req = Request::new("GET", "/index.html");

    assert_eq!(req.method, "GET");
    assert_eq!(req.uri, "/index.html");
}

#[test]
fn test_request_is_root() {
    assert!(Request::new("GET", "/").is_root());
    assert!(!Request::new("GET", "/index.html").is_root());
    assert!(!Request::new("GET", "//").is_root());
}

#[test]
fn test_request_equality() {
    assert_eq!(Request::new("GET", "/"), Request::new("GET", "/"));
    assert_ne!(Request::new("GET", "/"), Request::new("HEAD", "/"));
}

#[test]
fn test_request_from_parser_matches_constructor() {
    let parsed = parse_request(b"HEAD /a.ico HTTP/1.0\r\n\r\n").unwrap();

    assert_eq!(parsed, Request::new("HEAD", "/a.ico"));
}
