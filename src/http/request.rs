use std::collections::HashMap;

/// A complete request as delivered to the responder.
///
/// The request line is not interpreted; it simply remains the first line
/// of `header_text`.
#[derive(Debug, Clone)]
pub struct Request {
    /// Finalized header block, delimiter excluded.
    pub header_text: String,
    /// Header fields with names lowercased.
    pub headers: HashMap<String, String>,
    /// Body bytes, truncated to the declared content length.
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// The declared content length; 0 when the header is absent.
    pub fn content_length(&self) -> usize {
        self.header("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// The first line of the header block.
    pub fn request_line(&self) -> &str {
        self.header_text.split("\r\n").next().unwrap_or("")
    }
}
