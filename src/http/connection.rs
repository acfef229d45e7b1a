use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::error::ConnectionError;
use crate::http::parser::RequestParser;
use crate::http::request::Request;
use crate::http::response::Responder;
use crate::http::writer::ResponseWriter;

/// Read buffer capacity; requests arrive in chunks of at most this size.
const READ_BUF_SIZE: usize = 1024;

/// Handles one accepted connection: reads a single request, asks the
/// responder for the reply bytes, writes them, and closes.
///
/// The stream is owned by this handler and closes when it drops, on
/// every exit path.
pub struct Connection {
    stream: TcpStream,
    responder: Arc<dyn Responder>,
}

impl Connection {
    pub fn new(stream: TcpStream, responder: Arc<dyn Responder>) -> Self {
        Self { stream, responder }
    }

    /// Drives one request to completion and writes the reply.
    pub async fn run(&mut self) -> Result<(), ConnectionError> {
        let request = self.read_request().await?;
        debug!("Request complete: {}", request.request_line());

        let reply = self.responder.respond(&request);
        ResponseWriter::new(reply)
            .write_to_stream(&mut self.stream)
            .await?;

        Ok(())
    }

    /// Reads chunks into the parser until the request is complete. A
    /// zero-byte read before that point means the peer gave up.
    async fn read_request(&mut self) -> Result<Request, ConnectionError> {
        let mut parser = RequestParser::new();
        let mut buf = [0u8; READ_BUF_SIZE];

        while parser.needs_more_chunks() {
            let n = self.stream.read(&mut buf).await?;

            if n == 0 {
                return Err(ConnectionError::PrematureClose);
            }

            parser.push_chunk(&buf[..n])?;
        }

        Ok(parser.finish())
    }
}
