use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::env::ensure_static_dir;
use configs::{AppConfig, ServerConfig};
use service::catalog::{CatalogStore, ServiceStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the router for a given store and server config.
pub fn build_app(cfg: &ServerConfig, store: Arc<dyn CatalogStore>) -> Router {
    routes::build_router(AppState::new(store), build_cors(), &cfg.static_dir)
}

fn parse_bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", cfg.bind_addr())))
}

fn log_endpoints(addr: SocketAddr) {
    info!(%addr, "NEXA Digital Marketing Agency server running on http://{}", addr);
    info!("GET    /api/services      - List all services");
    info!("POST   /api/services      - Add new service");
    info!("DELETE /api/services/:id  - Remove service by ID");
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: seed the catalog, bind and run the HTTP server until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let server_cfg = cfg.server;
    ensure_static_dir(&server_cfg.static_dir).await;

    let store = ServiceStore::seeded();
    let app = build_app(&server_cfg, store);

    let addr = parse_bind_addr(&server_cfg)?;
    let listener = TcpListener::bind(addr).await.map_err(|source| StartupError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    log_endpoints(listener.local_addr().unwrap_or(addr));

    serve(listener, app, shutdown).await?;
    info!("server stopped accepting connections");
    Ok(())
}
