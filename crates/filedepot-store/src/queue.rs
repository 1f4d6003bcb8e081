//! In-memory work queue with at-least-once redelivery.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use filedepot_core::result::AppResult;
use filedepot_core::traits::queue::{Job, WorkQueue};
use filedepot_core::types::id::JobId;
use filedepot_core::AppError;

/// Default maximum delivery attempts before a job is parked as dead.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// FIFO in-memory work queue.
///
/// A failed job is re-enqueued until it exhausts its attempts, giving
/// consumers the same at-least-once, possibly-duplicated delivery they
/// would see from an external queue transport.
#[derive(Debug, Clone)]
pub struct MemoryWorkQueue {
    inner: Arc<Mutex<Inner>>,
    max_attempts: u32,
}

#[derive(Debug, Default)]
struct Inner {
    pending: VecDeque<Job>,
    in_flight: HashMap<JobId, Job>,
    dead: Vec<(Job, String)>,
}

impl MemoryWorkQueue {
    /// Create an empty queue with the default redelivery policy.
    pub fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    /// Create an empty queue with a custom attempt limit.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Number of jobs waiting for delivery.
    pub async fn pending_len(&self) -> usize {
        self.inner.lock().await.pending.len()
    }

    /// Jobs that exhausted their attempts, with the last reported error.
    pub async fn dead_jobs(&self) -> Vec<(Job, String)> {
        self.inner.lock().await.dead.clone()
    }
}

impl Default for MemoryWorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkQueue for MemoryWorkQueue {
    async fn enqueue(&self, job_type: &str, payload: serde_json::Value) -> AppResult<JobId> {
        let job = Job {
            id: JobId::new(),
            job_type: job_type.to_string(),
            payload,
            attempts: 0,
        };
        let id = job.id;

        let mut inner = self.inner.lock().await;
        inner.pending.push_back(job);

        debug!(job_id = %id, job_type, "Enqueued job");
        Ok(id)
    }

    async fn dequeue(&self) -> AppResult<Option<Job>> {
        let mut inner = self.inner.lock().await;
        let Some(mut job) = inner.pending.pop_front() else {
            return Ok(None);
        };
        job.attempts += 1;
        inner.in_flight.insert(job.id, job.clone());
        Ok(Some(job))
    }

    async fn complete(&self, job_id: JobId) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        inner
            .in_flight
            .remove(&job_id)
            .ok_or_else(|| AppError::queue(format!("Job not in flight: {job_id}")))?;
        debug!(job_id = %job_id, "Job completed");
        Ok(())
    }

    async fn fail(&self, job_id: JobId, error: &str) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        let job = inner
            .in_flight
            .remove(&job_id)
            .ok_or_else(|| AppError::queue(format!("Job not in flight: {job_id}")))?;

        if job.attempts < self.max_attempts {
            debug!(job_id = %job_id, attempts = job.attempts, error, "Job failed, redelivering");
            inner.pending.push_back(job);
        } else {
            debug!(job_id = %job_id, attempts = job.attempts, error, "Job failed permanently");
            inner.dead.push((job, error.to_string()));
        }
        Ok(())
    }
}
