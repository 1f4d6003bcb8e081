//! FileDepot — user-owned file namespace with async thumbnail renditions.
//!
//! Worker daemon entry point: wires the blob store, record store, and
//! queue into the job runner and processes thumbnail jobs until
//! interrupted. The transport layer in front of `FileService` is
//! deployment-specific and not part of this binary.

use std::sync::Arc;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{fmt, EnvFilter};

use filedepot_blob::rendition::ThumbnailGenerator;
use filedepot_blob::LocalBlobStore;
use filedepot_core::config::AppConfig;
use filedepot_core::error::AppError;
use filedepot_store::{MemoryFileRecords, MemoryWorkQueue};
use filedepot_worker::{JobExecutor, ThumbnailJobHandler, WorkerRunner};

#[tokio::main]
async fn main() {
    let env = std::env::var("FILEDEPOT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {}", e);
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
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Wire the worker's collaborators and run until interrupted.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FileDepot v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(root = %config.storage.root_path, "Initializing blob store");
    let blobs = Arc::new(LocalBlobStore::new(&config.storage.root_path).await?);

    let records = Arc::new(MemoryFileRecords::new());
    let queue = Arc::new(MemoryWorkQueue::new());

    let mut executor = JobExecutor::new();
    executor.register(Arc::new(ThumbnailJobHandler::new(
        records.clone(),
        ThumbnailGenerator::new(blobs.clone()),
    )));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker_handle = if config.worker.enabled {
        let runner = WorkerRunner::new(queue.clone(), Arc::new(executor), config.worker.clone());
        Some(tokio::spawn(async move { runner.run(shutdown_rx).await }))
    } else {
        tracing::info!("Worker disabled by configuration");
        None
    };

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::internal(format!("Failed to listen for shutdown: {e}")))?;
    tracing::info!("Shutdown signal received");

    let _ = shutdown_tx.send(true);
    if let Some(handle) = worker_handle {
        let _ = handle.await;
    }

    tracing::info!("FileDepot stopped");
    Ok(())
}
