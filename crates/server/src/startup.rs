use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::ServerState};
use service::{
    customer::repo::{InMemoryCustomerRepository, SeaOrmCustomerRepository},
    CustomerRepository, CustomerService,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Construct the repository selected by `storage.backend`, running
/// migrations first when the database backend asks for it.
pub async fn build_repository(cfg: &AppConfig) -> Result<Arc<dyn CustomerRepository>, StartupError> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!(event = "storage_memory", "using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryCustomerRepository::new()))
        }
        StorageBackend::Database => {
            let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&db_cfg)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            if cfg.database.auto_migrate {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Database(format!("migrate up: {e}")))?;
                info!(event = "migrated", "database schema up to date");
            }
            Ok(Arc::new(SeaOrmCustomerRepository::new(db)))
        }
    }
}

/// Wire repository -> service -> router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let repo = build_repository(cfg).await?;
    let customers = CustomerService::new(repo);
    let state = ServerState::new(customers).with_silent_update_miss(cfg.compat.silent_update_miss);
    Ok(routes::build_router(state, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve until Ctrl+C using an already validated configuration.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "starting customer api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bind_addr_rejects_hostnames() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn sqlite_backend_is_migrated_on_start() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        cfg.database.min_connections = 1;
        cfg.database.max_connections = 1;
        let repo = build_repository(&cfg).await?;
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn memory_backend_builds() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let repo = build_repository(&cfg).await?;
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }
}
