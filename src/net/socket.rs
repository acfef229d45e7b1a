use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket};
use tracing::warn;

use crate::error::ServerError;

/// Listen backlog; the kernel clamps this to its own maximum.
const BACKLOG: u32 = 1024;

/// Creates a listening socket on one resolved candidate.
///
/// The reuse options are best-effort so a restart on the same port does
/// not fail with "address in use"; every other step is fatal and nothing
/// is retried.
pub fn bind_and_listen(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .map_err(ServerError::SocketCreate)?;

    if let Err(e) = socket.set_reuseaddr(true) {
        warn!("Could not set SO_REUSEADDR: {}", e);
    }
    #[cfg(unix)]
    if let Err(e) = socket.set_reuseport(true) {
        warn!("Could not set SO_REUSEPORT: {}", e);
    }

    socket
        .bind(addr)
        .map_err(|source| ServerError::Bind { addr, source })?;

    socket.listen(BACKLOG).map_err(ServerError::Listen)
}
