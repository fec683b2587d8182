//! tinyserve - minimal static file server
//!
//! Core library for request handling and the connection acceptor.

pub mod config;
pub mod http;
pub mod server;
