use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::{Connection, ConnectionError};
use crate::routing::Router;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Binds `listen_addr` and serves connections until the task is dropped.
pub async fn run(listen_addr: &str, router: Arc<Router>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, router).await
}

/// Accept loop over an already-bound listener.
pub async fn serve(listener: TcpListener, router: Arc<Router>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                // EMFILE and friends; the listener itself is still usable.
                tracing::warn!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            match conn.run().await {
                Ok(()) => {}
                Err(e @ ConnectionError::Handler { .. }) => {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
                Err(e) => {
                    tracing::warn!("Connection error from {}: {}", peer, e);
                }
            }
        });
    }
}
