//! Toybox Server: toy catalog backend
//!
//! Main entry point that loads configuration, selects the record store,
//! and serves the HTTP API until a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use toybox_api::AppState;
use toybox_core::config::{AppConfig, StoreBackend};
use toybox_core::error::AppError;
use toybox_database::{
    DatabasePool, MemoryToyStore, MemoryUserStore, PgToyRepository, PgUserRepository, ToyStore,
    UserStore,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("TOYBOX_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Stores selected by configuration, plus the pool to close on shutdown.
struct Stores {
    toys: Arc<dyn ToyStore>,
    users: Arc<dyn UserStore>,
    pool: Option<DatabasePool>,
}

async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(Stores {
                toys: Arc::new(MemoryToyStore::new()),
                users: Arc::new(MemoryUserStore::new()),
                pool: None,
            })
        }
        StoreBackend::Postgres => {
            let db = DatabasePool::connect(&config.database).await?;
            if config.store.run_migrations {
                toybox_database::migration::run_migrations(db.pool()).await?;
            }
            Ok(Stores {
                toys: Arc::new(PgToyRepository::new(db.pool().clone())),
                users: Arc::new(PgUserRepository::new(db.pool().clone())),
                pool: Some(db),
            })
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.store.backend,
        "Starting Toybox"
    );

    let stores = open_stores(&config).await?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let bootstrap_admin = config.auth.bootstrap_admin.clone();

    let state = AppState::new(config, stores.toys, stores.users)?;
    if let Some(admin) = &bootstrap_admin {
        state.auth_service.ensure_admin(admin).await?;
    }

    let app = toybox_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "Toybox server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.changed().await;
    });
    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server_task => {
            return finish(result, stores.pool).await;
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, draining connections");
        }
    }

    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(grace, &mut server_task).await {
        Ok(result) => finish(result, stores.pool).await,
        Err(_) => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, aborting");
            server_task.abort();
            if let Some(pool) = stores.pool {
                pool.close().await;
            }
            Ok(())
        }
    }
}

/// Close the pool and translate the server task outcome.
async fn finish(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
    pool: Option<DatabasePool>,
) -> Result<(), AppError> {
    if let Some(pool) = pool {
        pool.close().await;
    }

    match result {
        Ok(Ok(())) => {
            tracing::info!("Toybox server shut down gracefully");
            Ok(())
        }
        Ok(Err(e)) => Err(AppError::internal(format!("Server error: {e}"))),
        Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
