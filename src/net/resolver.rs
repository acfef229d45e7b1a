use std::net::SocketAddr;
use std::slice;

use tokio::net::lookup_host;

use crate::error::ServerError;

/// Candidate addresses for one host/service pair, in resolver order.
///
/// The set is never empty: `resolve` fails instead of returning an empty
/// result, so `first` is always safe.
#[derive(Debug, Clone)]
pub struct ResolvedAddrs {
    addrs: Vec<SocketAddr>,
}

impl ResolvedAddrs {
    /// The candidate the listener binds.
    pub fn first(&self) -> SocketAddr {
        self.addrs[0]
    }

    pub fn iter(&self) -> slice::Iter<'_, SocketAddr> {
        self.addrs.iter()
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}

/// Resolves a host name (or literal address) and a service string to
/// candidate socket addresses.
///
/// The service must be a numeric port; the system resolver used here has
/// no service-name database. Any failure is fatal to startup and carries
/// the resolver's diagnostic.
pub async fn resolve(host: &str, service: &str) -> Result<ResolvedAddrs, ServerError> {
    if host.is_empty() || service.is_empty() {
        return Err(resolution_error(
            host,
            service,
            "host and service must be non-empty",
        ));
    }

    let port: u16 = service
        .parse()
        .map_err(|_| resolution_error(host, service, "service must be a port number"))?;

    let addrs: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(|e| resolution_error(host, service, &e.to_string()))?
        .collect();

    if addrs.is_empty() {
        return Err(resolution_error(host, service, "no addresses found"));
    }

    Ok(ResolvedAddrs { addrs })
}

fn resolution_error(host: &str, service: &str, reason: &str) -> ServerError {
    ServerError::Resolution {
        host: host.to_string(),
        service: service.to_string(),
        reason: reason.to_string(),
    }
}
