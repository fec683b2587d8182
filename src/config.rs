use std::net::{Ipv4Addr, SocketAddr};

use clap::{CommandFactory, Parser};

/// Command-line settings.
#[derive(Debug, Clone, Parser)]
#[command(name = "tinyserve")]
#[command(about = "Serves files from the current directory over HTTP/1.1")]
#[command(version)]
pub struct Config {
    /// TCP port to listen on, on all interfaces
    pub port: Option<u16>,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }

    /// `0.0.0.0:<port>`, or `None` when no port was given.
    pub fn listen_addr(&self) -> Option<SocketAddr> {
        self.port
            .map(|port| SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
