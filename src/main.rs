//! Todo Backend - JSON CRUD API over PostgreSQL
//!
//! A single-table todo service: every item has an id, a title, and a status.
//! All storage is backed by PostgreSQL, no in-memory fallbacks.

mod config;
mod db;
mod error;
mod extractors;
mod models;
mod routes;
mod state;

use crate::config::Settings;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How long in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🚀 Starting Todo Backend...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    // Initialize database pool - REQUIRED (no fallback to in-memory)
    let pool = db::create_pool(&settings.database)?;
    if let Err(e) = db::verify_connection(&pool).await {
        error!("❌ FATAL: Failed to connect to database: {}", e);
        error!("DATABASE_URL (or DB_*) must point at a reachable PostgreSQL instance");
        return Err(e.into());
    }
    info!("✅ Database pool created successfully");

    // Create the todos table if it doesn't exist
    db::ensure_schema(&pool).await?;

    let state = Arc::new(AppState::new(pool));

    // Build the router
    let app = create_router(state, &settings);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    let listener = TcpListener::bind(addr).await?;
    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 API Endpoints:");
    info!("   GET    /health                    - Health check");
    info!("   GET    /api/v1/todos              - List all todos");
    info!("   POST   /api/v1/todos              - Create a todo");
    info!("   GET    /api/v1/todos/{{id}}         - Get a todo");
    info!("   PUT    /api/v1/todos/{{id}}         - Replace title and status");
    info!("   DELETE /api/v1/todos/{{id}}         - Delete a todo");
    info!("   PATCH  /api/v1/todos/{{id}}/status  - Update status only");
    info!("   PATCH  /api/v1/todos/{{id}}/title   - Update title only");
    info!("");

    // Serve on a task so shutdown can bound the drain period. On a signal the
    // listener stops accepting and in-flight requests get SHUTDOWN_GRACE to
    // finish before the task is aborted.
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result??;
        }
        () = shutdown_signal() => {
            let _ = shutdown_tx.send(());
            match tokio::time::timeout(SHUTDOWN_GRACE, &mut server).await {
                Ok(result) => result??,
                Err(_) => {
                    warn!("⏱️  In-flight requests did not finish within {:?}, aborting", SHUTDOWN_GRACE);
                    server.abort();
                }
            }
        }
    }

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,todo_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
