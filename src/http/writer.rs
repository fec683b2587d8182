use std::io;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{CannedResponse, ResponseHeader};

/// Size of each chunk copied from the file to the client.
pub const CHUNK_SIZE: usize = 2048;

/// Writes response pieces to a client stream and counts the bytes sent.
pub struct ResponseWriter<'a, W> {
    stream: &'a mut W,
    written: u64,
}

impl<'a, W> ResponseWriter<'a, W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(stream: &'a mut W) -> Self {
        Self { stream, written: 0 }
    }

    /// Total bytes handed to the stream so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    pub async fn write_header(&mut self, header: &ResponseHeader) -> io::Result<()> {
        self.write_bytes(header.to_string().as_bytes()).await
    }

    /// Writes a canned error response: header, then its fixed body.
    pub async fn write_canned(&mut self, response: &CannedResponse) -> io::Result<()> {
        self.write_header(&response.header()).await?;
        self.write_bytes(response.body).await?;
        self.stream.flush().await
    }

    /// Copies `body` to the stream in [`CHUNK_SIZE`] pieces until EOF.
    ///
    /// Returns the number of body bytes copied.
    pub async fn stream_body<R>(&mut self, body: &mut R) -> io::Result<u64>
    where
        R: AsyncRead + Unpin,
    {
        let mut chunk = BytesMut::zeroed(CHUNK_SIZE);
        let mut copied = 0u64;

        loop {
            let n = body.read(&mut chunk[..]).await?;
            if n == 0 {
                break;
            }
            self.write_bytes(&chunk[..n]).await?;
            copied += n as u64;
        }

        self.stream.flush().await?;
        Ok(copied)
    }

    async fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        let mut offset = 0;
        while offset < buf.len() {
            let n = self.stream.write(&buf[offset..]).await?;

            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "connection closed while writing",
                ));
            }

            offset += n;
            self.written += n as u64;
        }

        Ok(())
    }
}
