use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;
use tinyserve::config::Config;

#[test]
fn test_config_port_argument() {
    let cfg = Config::try_parse_from(["tinyserve", "8080"]).unwrap();

    assert_eq!(cfg.port, Some(8080));
    assert_eq!(
        cfg.listen_addr(),
        Some(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)))
    );
}

#[test]
fn test_config_binds_all_interfaces() {
    let cfg = Config::try_parse_from(["tinyserve", "10000"]).unwrap();

    assert!(cfg.listen_addr().unwrap().ip().is_unspecified());
}

#[test]
fn test_config_missing_port() {
    let cfg = Config::try_parse_from(["tinyserve"]).unwrap();

    assert_eq!(cfg.port, None);
    assert_eq!(cfg.listen_addr(), None);
}

#[test]
fn test_config_invalid_port_rejected() {
    assert!(Config::try_parse_from(["tinyserve", "http"]).is_err());
    assert!(Config::try_parse_from(["tinyserve", "70000"]).is_err());
}

#[test]
fn test_config_usage_mentions_port() {
    let usage = Config::usage();

    assert!(usage.contains("tinyserve"));
    assert!(usage.to_lowercase().contains("port"));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::try_parse_from(["tinyserve", "3000"]).unwrap();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.port, cfg2.port);
}
