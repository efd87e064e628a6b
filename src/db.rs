//! Database connection management
//!
//! Handles connection pooling and schema bootstrap.

pub mod queries;
pub mod service;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::info;

/// Create a connection pool from the database settings.
///
/// Pool creation is lazy: no connection is opened until the first checkout,
/// so this never touches the network. Call [`verify_connection`] at startup
/// to fail fast when the store is unreachable.
pub fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    if config.require_tls {
        let certs = rustls_native_certs::load_native_certs();
        let mut root_store = rustls::RootCertStore::empty();
        for cert in certs.certs {
            root_store.add(cert).ok();
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);
        cfg.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))
    } else {
        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
    }
}

/// Verify the store is reachable before serving traffic.
pub async fn verify_connection(pool: &Pool) -> Result<(), AppError> {
    let client = pool.get().await?;
    client.query_one("SELECT 1", &[]).await?;

    info!("Database connection verified");
    Ok(())
}

/// Create the todos table if it does not exist. Safe to run on every startup.
pub async fn ensure_schema(pool: &Pool) -> Result<(), AppError> {
    let client = pool.get().await?;
    client.execute(queries::CREATE_TODOS_TABLE, &[]).await?;

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_pool_is_lazy() {
        // No database needs to be listening; connections open on first get().
        let pool = create_pool(&DatabaseConfig::default()).unwrap();
        assert_eq!(pool.status().size, 0);
    }
}
