mod config;
mod error;
mod http;
mod net;
mod server;

use std::sync::Arc;

use config::Config;
use http::response::StaticResponder;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let addrs = net::resolver::resolve(&cfg.host, &cfg.service).await?;
    let listener = net::socket::bind_and_listen(addrs.first())?;
    info!("Listening on {}:{}", cfg.host, cfg.service);

    let responder = Arc::new(StaticResponder::new());

    tokio::select! {
        res = server::listener::run(listener, responder) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}
