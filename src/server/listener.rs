use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::error::ServerError;
use crate::http::connection::Connection;
use crate::http::response::Responder;

/// Owns the handle of every spawned connection task for the server's
/// lifetime. Appended only by the accept loop, drained only after the
/// loop has stopped.
pub struct ServerContext {
    tasks: JoinSet<()>,
}

impl ServerContext {
    pub fn new() -> Self {
        Self {
            tasks: JoinSet::new(),
        }
    }

    /// Spawns a connection task and retains its handle.
    pub fn register<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn(task);
    }

    /// Waits for every registered task to finish.
    pub async fn join_all(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                error!("Connection task failed to join: {}", e);
            }
        }
    }
}

impl Default for ServerContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts connections until accept itself fails, then waits for every
/// in-flight connection before surfacing the error.
pub async fn run(listener: TcpListener, responder: Arc<dyn Responder>) -> Result<(), ServerError> {
    let mut ctx = ServerContext::new();
    let result = accept_loop(&listener, &mut ctx, responder).await;
    ctx.join_all().await;
    result
}

async fn accept_loop(
    listener: &TcpListener,
    ctx: &mut ServerContext,
    responder: Arc<dyn Responder>,
) -> Result<(), ServerError> {
    loop {
        // An accept failure stops the loop; transient errno values are
        // not retried.
        let (socket, peer) = listener.accept().await.map_err(ServerError::Accept)?;
        info!("Accepted connection from {}", peer);

        let responder = Arc::clone(&responder);
        ctx.register(async move {
            let mut conn = Connection::new(socket, responder);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
