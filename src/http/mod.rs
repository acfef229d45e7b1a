//! HTTP protocol implementation.
//!
//! One request per connection: bytes are read in arbitrary-sized chunks
//! and fed to an incremental parser, so a request fragmented anywhere by
//! the transport still parses identically.
//!
//! - **`parser`**: the incremental header/body state machine
//! - **`request`**: the completed request handed to the responder
//! - **`response`**: response representation and the responder seam
//! - **`connection`**: drives the read -> parse loop and the reply write
//! - **`writer`**: serializes and writes reply bytes to the client
//!
//! # Parser state machine
//!
//! ```text
//! AwaitingHeader --CRLF-CRLF seen--> AwaitingBody --enough body bytes--> Complete
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
