use std::io;
use std::path::PathBuf;

use bytes::{Bytes, BytesMut};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, info, warn};

use crate::http::parser::{parse_request, request_line, ParseError};
use crate::http::request::Request;
use crate::http::response::{CannedResponse, ResponseHeader, StatusCode};
use crate::http::target::{local_path, ResolvedTarget};
use crate::http::writer::ResponseWriter;

/// Upper bound for the single read of the request.
pub const BUF_SIZE: usize = 2048;

/// Failures while handling one request.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to read request: {0}")]
    Read(#[source] io::Error),
    #[error("malformed request: {0}")]
    Parse(#[from] ParseError),
    #[error("no file found matching {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to send response: {0}")]
    Stream(#[source] io::Error),
}

impl HandlerError {
    /// The canned response this failure maps to, if one can still be sent.
    pub fn fallback(&self) -> Option<CannedResponse> {
        match self {
            HandlerError::NotFound(_) => Some(CannedResponse::not_found()),
            HandlerError::Stream(_) => None,
            _ => Some(CannedResponse::internal_error()),
        }
    }
}

/// Steps of a single request/response exchange.
#[derive(Debug)]
pub enum HandlerState {
    ReadRequest,
    ParseRequest(Bytes),
    ResolveUri(Request),
    StatFile(PathBuf),
    OpenFile(ResolvedTarget),
    SendHeader(ResolvedTarget, File),
    StreamBody(File),
    Send404,
    Send500,
    Done(StatusCode),
}

/// Serves exactly one request on a client stream, then is dropped.
pub struct Connection<S> {
    stream: S,
    root: PathBuf,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: impl Into<PathBuf>) -> Self {
        Self {
            stream,
            root: root.into(),
        }
    }

    /// Drives the exchange to completion and returns the status sent.
    ///
    /// Per-request failures are answered with a canned 404 or 500 and do not
    /// surface here. `Err` means the client could not be written to.
    pub async fn run(&mut self) -> Result<StatusCode, HandlerError> {
        let mut state = HandlerState::ReadRequest;

        loop {
            state = match state {
                HandlerState::ReadRequest => match self.read_request().await {
                    Ok(buf) => HandlerState::ParseRequest(buf),
                    Err(e) => Self::fail(e),
                },

                HandlerState::ParseRequest(buf) => {
                    info!(
                        "[HTTP Request] {}",
                        String::from_utf8_lossy(request_line(&buf)).trim_end()
                    );
                    match parse_request(&buf) {
                        Ok(req) => HandlerState::ResolveUri(req),
                        Err(e) => Self::fail(e.into()),
                    }
                }

                HandlerState::ResolveUri(req) => {
                    info!(method = %req.method, uri = %req.uri, "Receiving request");
                    HandlerState::StatFile(local_path(&req.uri))
                }

                HandlerState::StatFile(path) => {
                    let target = ResolvedTarget::stat(&self.root, path).await;
                    if target.exists {
                        HandlerState::OpenFile(target)
                    } else {
                        Self::fail(HandlerError::NotFound(target.local_path))
                    }
                }

                HandlerState::OpenFile(target) => {
                    let path = target.full_path(&self.root);
                    match File::open(&path).await {
                        Ok(file) => HandlerState::SendHeader(target, file),
                        Err(source) => Self::fail(HandlerError::Open { path, source }),
                    }
                }

                HandlerState::SendHeader(target, file) => {
                    let header = ResponseHeader::new(
                        StatusCode::Ok.as_u16(),
                        target.size,
                        target.content_type(),
                    );
                    ResponseWriter::new(&mut self.stream)
                        .write_header(&header)
                        .await
                        .map_err(HandlerError::Stream)?;
                    HandlerState::StreamBody(file)
                }

                HandlerState::StreamBody(mut file) => {
                    let mut writer = ResponseWriter::new(&mut self.stream);
                    let copied = writer
                        .stream_body(&mut file)
                        .await
                        .map_err(HandlerError::Stream)?;
                    debug!(bytes = copied, written = writer.bytes_written(), "Body streamed");
                    HandlerState::Done(StatusCode::Ok)
                }

                HandlerState::Send404 => {
                    self.send_canned(CannedResponse::not_found()).await?;
                    HandlerState::Done(StatusCode::NotFound)
                }

                HandlerState::Send500 => {
                    self.send_canned(CannedResponse::internal_error()).await?;
                    HandlerState::Done(StatusCode::InternalServerError)
                }

                HandlerState::Done(status) => {
                    info!(
                        status = status.as_u16(),
                        reason = status.reason_phrase(),
                        "[HTTP Response]"
                    );
                    return Ok(status);
                }
            };
        }
    }

    /// Reads once, at most [`BUF_SIZE`] bytes. A request split across
    /// several reads is not reassembled.
    async fn read_request(&mut self) -> Result<Bytes, HandlerError> {
        let mut buf = BytesMut::zeroed(BUF_SIZE);
        let n = self
            .stream
            .read(&mut buf[..])
            .await
            .map_err(HandlerError::Read)?;
        buf.truncate(n);
        Ok(buf.freeze())
    }

    async fn send_canned(&mut self, response: CannedResponse) -> Result<(), HandlerError> {
        ResponseWriter::new(&mut self.stream)
            .write_canned(&response)
            .await
            .map_err(HandlerError::Stream)
    }

    fn fail(err: HandlerError) -> HandlerState {
        warn!(error = %err, "Request failed");
        match err.fallback().map(|r| r.status) {
            Some(StatusCode::NotFound) => HandlerState::Send404,
            _ => HandlerState::Send500,
        }
    }
}
