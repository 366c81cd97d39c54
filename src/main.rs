use std::sync::Arc;

use ferrocat::app::{self, InMemoryUserStore};
use ferrocat::config::Config;
use ferrocat::routing::DirAssetStore;
use ferrocat::server;
use ferrocat::session::MemorySessionStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    tracing::info!(static_root = %cfg.static_files.root.display(), "configuration loaded");

    let router = app::build_router(
        Arc::new(DirAssetStore::new(&cfg.static_files.root)),
        Arc::new(MemorySessionStore::new()),
        Arc::new(InMemoryUserStore::seeded()),
    );

    tokio::select! {
        res = server::listener::run(&cfg.server.listen_addr, Arc::new(router)) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
