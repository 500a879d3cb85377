pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use shared::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize(&system::tracing::default_log_dir())?;

    let config = config::load_config()?;

    shared::data::db::initialize_database(&config::get_database_path(&config))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let app = routes::configure_routes(config::get_static_dir(&config));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    shared::logger::log("startup", &format!("Server started on {}", addr));

    axum::serve(listener, app).await?;

    Ok(())
}
