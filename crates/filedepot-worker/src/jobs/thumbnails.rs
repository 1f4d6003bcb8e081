//! Thumbnail generation job handler.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing;
use uuid::Uuid;

use filedepot_blob::rendition::ThumbnailGenerator;
use filedepot_core::error::ErrorKind;
use filedepot_core::traits::queue::Job;
use filedepot_core::types::id::{FileId, UserId};
use filedepot_entity::job::GENERATE_THUMBNAILS;
use filedepot_store::records::FileRecords;

use crate::executor::{JobExecutionError, JobHandler};

/// Handles `generate_thumbnails` jobs.
///
/// Safe to re-run for the same file: rendition names are deterministic,
/// so every delivery overwrites the same three slots.
#[derive(Debug)]
pub struct ThumbnailJobHandler {
    /// File metadata records, for the process-time ownership re-check.
    records: Arc<dyn FileRecords>,
    /// Rendition generator.
    generator: ThumbnailGenerator,
}

impl ThumbnailJobHandler {
    /// Create a new thumbnail job handler.
    pub fn new(records: Arc<dyn FileRecords>, generator: ThumbnailGenerator) -> Self {
        Self { records, generator }
    }

    fn require_id(payload: &Value, field: &str) -> Result<Uuid, JobExecutionError> {
        let raw = payload.get(field).and_then(|v| v.as_str()).ok_or_else(|| {
            JobExecutionError::Permanent(format!("Missing {field} in thumbnail payload"))
        })?;
        Uuid::parse_str(raw)
            .map_err(|e| JobExecutionError::Permanent(format!("Invalid {field}: {e}")))
    }
}

#[async_trait]
impl JobHandler for ThumbnailJobHandler {
    fn job_type(&self) -> &str {
        GENERATE_THUMBNAILS
    }

    async fn execute(&self, job: &Job) -> Result<Option<Value>, JobExecutionError> {
        let file_id = FileId::from_uuid(Self::require_id(&job.payload, "file_id")?);
        let user_id = UserId::from_uuid(Self::require_id(&job.payload, "user_id")?);

        // Ownership is re-checked at process time, independent of who
        // enqueued the job.
        let file = self
            .records
            .find_by_id_and_owner(file_id, user_id)
            .await
            .map_err(JobExecutionError::Internal)?
            .ok_or_else(|| JobExecutionError::Permanent("File not found".to_string()))?;

        let content_ref = file.content_ref.as_deref().ok_or_else(|| {
            JobExecutionError::Permanent("File has no content reference".to_string())
        })?;

        let names = self
            .generator
            .generate_all(content_ref)
            .await
            .map_err(|e| match e.kind {
                // Undecodable source data will never resize successfully.
                ErrorKind::Validation => JobExecutionError::Permanent(e.to_string()),
                _ => JobExecutionError::Transient(e.to_string()),
            })?;

        tracing::info!(file_id = %file_id, renditions = names.len(), "Thumbnails generated");

        Ok(Some(serde_json::json!({ "renditions": names })))
    }
}
