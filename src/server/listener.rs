use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{debug, error, info, info_span, Instrument};

use crate::http::connection::Connection;

/// Pending-connection queue length passed to `listen`.
pub const LISTEN_BACKLOG: u32 = 5;

/// Creates, binds and listens on a TCP socket.
pub fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()
    } else {
        TcpSocket::new_v6()
    }
    .context("failed to create socket")?;

    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    let listener = socket
        .listen(LISTEN_BACKLOG)
        .with_context(|| format!("failed to listen on {}", addr))?;

    Ok(listener)
}

/// Accepts connections forever, one detached task per client.
///
/// The listener stays with this loop; each task owns only its client socket
/// and drops it when the response is done.
pub async fn serve(listener: TcpListener, root: PathBuf) -> anyhow::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }

    loop {
        debug!("Waiting for connections");

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let root = root.clone();
        let span = info_span!("connection", %peer);
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, root);
                match conn.run().await {
                    Ok(status) => debug!(status = status.as_u16(), "Connection closed"),
                    Err(e) => error!("Connection error from {}: {}", peer, e),
                }
            }
            .instrument(span),
        );
    }
}
