//! Worker runner — main loop that polls the work queue and executes jobs.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing;

use filedepot_core::config::worker::WorkerConfig;
use filedepot_core::traits::queue::WorkQueue;

use crate::executor::{JobExecutionError, JobExecutor};

/// Main worker runner that polls the queue and executes jobs.
///
/// Handlers never retry; every failure is reported to the queue, whose
/// redelivery policy decides whether the job comes back.
#[derive(Debug)]
pub struct WorkerRunner {
    /// Work queue to poll.
    queue: Arc<dyn WorkQueue>,
    /// Job executor for dispatching.
    executor: Arc<JobExecutor>,
    /// Worker configuration.
    config: WorkerConfig,
}

impl WorkerRunner {
    /// Create a new worker runner.
    pub fn new(queue: Arc<dyn WorkQueue>, executor: Arc<JobExecutor>, config: WorkerConfig) -> Self {
        Self {
            queue,
            executor,
            config,
        }
    }

    /// Start the worker runner — runs until the cancel signal is received.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            "Worker started with concurrency={}, poll_interval={}ms",
            self.config.concurrency,
            self.config.poll_interval_ms
        );

        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.concurrency));
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Worker received shutdown signal");
                        break;
                    }
                }
                _ = self.poll_and_execute(&semaphore) => {
                    tokio::select! {
                        _ = cancel.changed() => {
                            if *cancel.borrow() {
                                tracing::info!("Worker shutting down");
                                break;
                            }
                        }
                        _ = time::sleep(poll_interval) => {}
                    }
                }
            }
        }

        tracing::info!("Worker waiting for in-flight jobs to complete...");

        let max_permits = self.config.concurrency as u32;
        let _ =
            tokio::time::timeout(Duration::from_secs(30), semaphore.acquire_many(max_permits))
                .await;

        tracing::info!("Worker shut down complete");
    }

    /// Poll for a job and execute it if available.
    async fn poll_and_execute(&self, semaphore: &Arc<tokio::sync::Semaphore>) {
        let permit = match semaphore.clone().try_acquire_owned() {
            Ok(p) => p,
            Err(_) => {
                tracing::trace!("All worker slots occupied, waiting...");
                return;
            }
        };

        match self.queue.dequeue().await {
            Ok(Some(job)) => {
                let queue = Arc::clone(&self.queue);
                let executor = Arc::clone(&self.executor);
                let job_id = job.id;
                let job_type = job.job_type.clone();
                let attempts = job.attempts;

                tokio::spawn(async move {
                    let _permit = permit;

                    tracing::info!(
                        "Processing job: id={}, type='{}', attempt={}",
                        job_id,
                        job_type,
                        attempts
                    );

                    match executor.execute(&job).await {
                        Ok(_result) => {
                            if let Err(e) = queue.complete(job_id).await {
                                tracing::error!(
                                    "Failed to mark job {} as completed: {}",
                                    job_id,
                                    e
                                );
                            }
                            tracing::info!("Job {} completed successfully", job_id);
                        }
                        Err(JobExecutionError::Transient(msg)) => {
                            tracing::warn!("Job {} failed (transient): {}", job_id, msg);
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                tracing::error!("Failed to mark job {} as failed: {}", job_id, e);
                            }
                        }
                        Err(JobExecutionError::Permanent(msg)) => {
                            tracing::error!("Job {} failed permanently: {}", job_id, msg);
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                tracing::error!("Failed to mark job {} as failed: {}", job_id, e);
                            }
                        }
                        Err(JobExecutionError::Internal(err)) => {
                            let msg = err.to_string();
                            tracing::error!("Job {} internal error: {}", job_id, msg);
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                tracing::error!("Failed to mark job {} as failed: {}", job_id, e);
                            }
                        }
                    }
                });
            }
            Ok(None) => {
                drop(permit);
                tracing::trace!("No jobs available");
            }
            Err(e) => {
                drop(permit);
                tracing::error!("Failed to dequeue job: {}", e);
            }
        }
    }
}
