use std::collections::HashMap;

use crate::http::request::Request;
use crate::http::writer::serialize_response;

/// HTTP status codes this server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete response ready to be serialized.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Builder for constructing responses in a fluent style.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final response, adding a Content-Length header from
    /// the body size if none was set.
    pub fn build(mut self) -> Response {
        self.headers
            .entry("Content-Length".to_string())
            .or_insert_with(|| self.body.len().to_string());

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a simple 200 OK response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .body(body.into())
            .build()
    }
}

/// Decides what bytes go back for a completed request. The connection
/// handler writes exactly the bytes returned and then closes.
pub trait Responder: Send + Sync {
    fn respond(&self, request: &Request) -> Vec<u8>;
}

/// The fixed reply wired in by default: every request gets the same
/// 200 OK, serialized once at construction.
pub struct StaticResponder {
    reply: Vec<u8>,
}

impl StaticResponder {
    pub fn new() -> Self {
        let response = ResponseBuilder::new(StatusCode::Ok)
            .header("Server", "coho")
            .header("Connection", "close")
            .body(b"Hello from coho\n".to_vec())
            .build();

        Self {
            reply: serialize_response(&response),
        }
    }
}

impl Default for StaticResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder for StaticResponder {
    fn respond(&self, _request: &Request) -> Vec<u8> {
        self.reply.clone()
    }
}
