//! Work queue trait for at-least-once background job delivery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::id::JobId;

/// A named background job with a JSON payload.
///
/// Payload schemas are fixed per job type and validated at the worker
/// boundary, not treated as free-form maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier assigned at enqueue time.
    pub id: JobId,
    /// Job type name (e.g. `"generate_thumbnails"`).
    pub job_type: String,
    /// Job payload as JSON.
    pub payload: serde_json::Value,
    /// Number of delivery attempts so far, including the current one.
    pub attempts: u32,
}

/// Trait for the work queue transport.
///
/// Delivery is at-least-once and possibly out of order; consumers must
/// be idempotent. Retry-on-failure is entirely the queue's redelivery
/// responsibility — handlers never retry themselves.
#[async_trait]
pub trait WorkQueue: Send + Sync + std::fmt::Debug + 'static {
    /// Enqueue a new job of the given type.
    async fn enqueue(&self, job_type: &str, payload: serde_json::Value) -> AppResult<JobId>;

    /// Dequeue the next available job, if any.
    async fn dequeue(&self) -> AppResult<Option<Job>>;

    /// Acknowledge a job as completed successfully.
    async fn complete(&self, job_id: JobId) -> AppResult<()>;

    /// Report a job as failed, handing it back to the queue's
    /// redelivery policy.
    async fn fail(&self, job_id: JobId, error: &str) -> AppResult<()>;
}
