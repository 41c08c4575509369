pub mod routes;
pub mod shared;

use anyhow::Context;
use contracts::docs::{validate_catalog, DocPageKey};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let (config, source) = shared::config::load_config()?;
    shared::logging::init_tracing(&config.logging)?;
    tracing::info!("Configuration loaded from {}", source);

    validate_catalog().context("documentation catalog is incomplete")?;
    tracing::info!("Documentation catalog: {} pages", DocPageKey::ALL.len());

    if !config.assets.index_path().exists() {
        tracing::warn!(
            "{} not found, build the frontend with `trunk build` first",
            config.assets.index_path().display()
        );
    }

    let app = routes::configure_routes(&config.assets);
    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
