//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 static file responder: one
//! request per connection, no keep-alive, no request bodies.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the request state machine
//! - **`parser`**: Extracts method and URI from the raw request bytes
//! - **`request`**: The parsed request line
//! - **`target`**: Maps a URI onto a file below the serving root
//! - **`mime`**: MIME type detection based on file extensions
//! - **`response`**: Status phrases, header serialisation and canned error bodies
//! - **`writer`**: Writes headers and streams file bodies to the client
//!
//! # Connection State Machine
//!
//! ```text
//!   ReadRequest ─▶ ParseRequest ─▶ ResolveUri ─▶ StatFile ─▶ OpenFile
//!        │              │                           │            │
//!        │              │                           ▼            │
//!        │              │                        Send404         │
//!        ▼              ▼                                        ▼
//!     Send500 ◀─────────┴──────────────────────────────────── Send500
//!
//!   OpenFile ─▶ SendHeader ─▶ StreamBody ─▶ Done
//! ```
//!
//! Every terminal state is followed by the connection being closed.
//!
//! # Example
//!
//! ```ignore
//! use tinyserve::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, ".");
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod target;
