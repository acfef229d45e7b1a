use std::collections::HashMap;

use bytes::BytesMut;
use thiserror::Error;

use crate::http::request::Request;

/// End-of-header marker.
const DELIMITER: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid Content-Length value {0:?}")]
    InvalidContentLength(String),

    #[error("header block is not valid UTF-8")]
    InvalidHeader,
}

/// Incremental parser for one request.
///
/// Accumulates header bytes until the CRLF-CRLF delimiter appears, then
/// accumulates body bytes until the declared `Content-Length` is
/// satisfied. The final state is identical no matter how the input is
/// fragmented across `push_chunk` calls.
#[derive(Debug, Default)]
pub struct RequestParser {
    header: BytesMut,
    body: BytesMut,
    content_length: usize,
    header_complete: bool,
    body_complete: bool,
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next chunk read from the connection.
    ///
    /// The body buffer is seeded with the bytes that followed the
    /// delimiter; the delimiter itself never counts toward the
    /// content-length threshold. Chunks pushed after completion are
    /// ignored.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<(), ParseError> {
        if self.body_complete {
            return Ok(());
        }

        if self.header_complete {
            self.body.extend_from_slice(chunk);
        } else {
            self.header.extend_from_slice(chunk);
            if let Some(pos) = find_delimiter(&self.header) {
                self.body
                    .extend_from_slice(&self.header[pos + DELIMITER.len()..]);
                self.header.truncate(pos);
                self.header_complete = true;
                self.content_length = declared_content_length(&self.header)?;
            }
        }

        if self.header_complete && self.body.len() >= self.content_length {
            self.body_complete = true;
        }

        Ok(())
    }

    pub fn is_header_complete(&self) -> bool {
        self.header_complete
    }

    /// True until the request is complete; idempotent afterwards.
    pub fn needs_more_chunks(&self) -> bool {
        !self.body_complete
    }

    /// Only trustworthy once the header is complete.
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    /// Consumes the parser once complete, yielding the finalized request
    /// with the body truncated to the declared content length.
    pub fn finish(self) -> Request {
        debug_assert!(self.body_complete);

        let header_text = String::from_utf8_lossy(&self.header).into_owned();
        let headers = header_fields(&header_text);
        let mut body = self.body.to_vec();
        body.truncate(self.content_length);

        Request {
            header_text,
            headers,
            body,
        }
    }
}

fn find_delimiter(buf: &[u8]) -> Option<usize> {
    buf.windows(DELIMITER.len()).position(|w| w == DELIMITER)
}

/// Extracts the declared content length from a finalized header block.
/// When the field repeats, the last occurrence wins.
fn declared_content_length(header: &[u8]) -> Result<usize, ParseError> {
    let text = std::str::from_utf8(header).map_err(|_| ParseError::InvalidHeader)?;

    let mut declared = 0;
    for line in text.split("\r\n") {
        if let Some((name, value)) = line.split_once(": ") {
            if name.eq_ignore_ascii_case("content-length") {
                declared = value
                    .parse()
                    .map_err(|_| ParseError::InvalidContentLength(value.to_string()))?;
            }
        }
    }

    Ok(declared)
}

/// Splits a finalized header block into fields, names lowercased.
fn header_fields(text: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for line in text.split("\r\n") {
        if let Some((name, value)) = line.split_once(": ") {
            fields.insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    fields
}
