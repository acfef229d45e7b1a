use std::io;
use std::net::SocketAddr;

use thiserror::Error;

use crate::http::parser::ParseError;

/// Failures that stop the server: everything up to and including the
/// accept loop. None of these are retried.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("cannot resolve {host}:{service}: {reason}")]
    Resolution {
        host: String,
        service: String,
        reason: String,
    },

    #[error("socket creation failed: {0}")]
    SocketCreate(#[source] io::Error),

    #[error("bind to {addr} failed: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("listen failed: {0}")]
    Listen(#[source] io::Error),

    #[error("accept failed: {0}")]
    Accept(#[source] io::Error),
}

/// Failures scoped to a single connection. These are logged at the task
/// boundary and never affect other connections or the process.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("peer closed the connection before the request completed")]
    PrematureClose,

    #[error("malformed request: {0}")]
    Malformed(#[from] ParseError),

    #[error("connection i/o failed: {0}")]
    Io(#[from] io::Error),
}
