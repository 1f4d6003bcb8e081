//! Core file operations with hierarchy and visibility enforcement.

use std::sync::Arc;

use base64::Engine;
use tracing::info;
use uuid::Uuid;

use filedepot_core::error::AppError;
use filedepot_core::traits::blob::BlobStore;
use filedepot_core::traits::queue::WorkQueue;
use filedepot_core::traits::session::SessionGate;
use filedepot_core::types::id::{FileId, UserId};
use filedepot_core::types::page::PageRequest;
use filedepot_entity::file::{File, FileKind, ParentRef};
use filedepot_entity::job::{ThumbnailJobPayload, GENERATE_THUMBNAILS};
use filedepot_store::records::FileRecords;

/// Request to create a folder or upload a leaf file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateFileRequest {
    /// Display name.
    pub name: String,
    /// Kind wire name: `"folder"`, `"file"`, or `"image"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Parent folder, defaulting to the root.
    #[serde(default)]
    pub parent: ParentRef,
    /// Initial visibility, defaulting to private.
    #[serde(default)]
    pub is_public: bool,
    /// Base64-encoded content. Required for non-folder kinds.
    #[serde(default)]
    pub data: Option<String>,
}

/// Orchestrates the record store, blob store, session gate, and work
/// queue to implement file operations.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File metadata records.
    records: Arc<dyn FileRecords>,
    /// Opaque blob storage.
    blobs: Arc<dyn BlobStore>,
    /// Token resolution.
    sessions: Arc<dyn SessionGate>,
    /// Background job queue.
    queue: Arc<dyn WorkQueue>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        records: Arc<dyn FileRecords>,
        blobs: Arc<dyn BlobStore>,
        sessions: Arc<dyn SessionGate>,
        queue: Arc<dyn WorkQueue>,
    ) -> Self {
        Self {
            records,
            blobs,
            sessions,
            queue,
        }
    }

    pub(crate) fn records(&self) -> &Arc<dyn FileRecords> {
        &self.records
    }

    pub(crate) fn blobs(&self) -> &Arc<dyn BlobStore> {
        &self.blobs
    }

    pub(crate) fn sessions(&self) -> &Arc<dyn SessionGate> {
        &self.sessions
    }

    /// Resolves a session token to the calling user.
    ///
    /// Every owner-scoped operation goes through here first; a missing or
    /// unknown token is an authentication failure, distinct from the
    /// not-found masking used on the public retrieval path.
    pub async fn authorize(&self, token: &str) -> Result<UserId, AppError> {
        self.sessions
            .resolve(token)
            .await?
            .ok_or_else(|| AppError::authentication("Unauthorized"))
    }

    /// Creates a folder or uploads a leaf file.
    ///
    /// Validation failures are detected before any side effect. For
    /// images, the thumbnail job is enqueued only after the metadata
    /// insert succeeds, so a delivered job can always resolve its file.
    pub async fn create(
        &self,
        user_id: UserId,
        req: CreateFileRequest,
    ) -> Result<File, AppError> {
        if req.name.is_empty() {
            return Err(AppError::validation("Missing name"));
        }

        let kind =
            FileKind::parse(&req.kind).ok_or_else(|| AppError::validation("Missing type"))?;

        if kind.has_content() && req.data.is_none() {
            return Err(AppError::validation("Missing data"));
        }

        if let ParentRef::Folder(parent_id) = req.parent {
            let parent = self
                .records
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::validation("Parent not found"))?;
            if parent.kind != FileKind::Folder {
                return Err(AppError::validation("Parent is not a folder"));
            }
        }

        if kind == FileKind::Folder {
            let folder = File::new(user_id, req.name, kind, req.parent, req.is_public, None);
            self.records.insert(&folder).await?;
            info!(user_id = %user_id, file_id = %folder.id, "Folder created");
            return Ok(folder);
        }

        let data = req.data.unwrap_or_default();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(data.as_bytes())
            .map_err(|e| AppError::with_source(
                filedepot_core::error::ErrorKind::Validation,
                "Invalid base64 data",
                e,
            ))?;

        let blob_name = Uuid::new_v4().to_string();
        self.blobs.write(&blob_name, bytes.into()).await?;

        let file = File::new(
            user_id,
            req.name,
            kind,
            req.parent,
            req.is_public,
            Some(blob_name),
        );
        self.records.insert(&file).await?;

        if kind == FileKind::Image {
            let payload = ThumbnailJobPayload {
                file_id: file.id,
                user_id,
            };
            self.queue
                .enqueue(GENERATE_THUMBNAILS, serde_json::to_value(payload)?)
                .await?;
        }

        info!(user_id = %user_id, file_id = %file.id, kind = kind.as_str(), "File created");

        Ok(file)
    }

    /// Gets a single file owned by the caller.
    pub async fn get(&self, user_id: UserId, file_id: FileId) -> Result<File, AppError> {
        self.records
            .find_by_id_and_owner(file_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Lists the caller's files under a parent, paginated.
    pub async fn list(
        &self,
        user_id: UserId,
        parent: ParentRef,
        page: PageRequest,
    ) -> Result<Vec<File>, AppError> {
        self.records.list_by_parent(user_id, parent, &page).await
    }

    /// Sets a file's visibility. Publish and unpublish are the same
    /// operation parameterized by `is_public`.
    pub async fn set_public(
        &self,
        user_id: UserId,
        file_id: FileId,
        is_public: bool,
    ) -> Result<File, AppError> {
        self.records
            .find_by_id_and_owner(file_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        let updated = self
            .records
            .set_public(file_id, is_public)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        info!(user_id = %user_id, file_id = %file_id, is_public, "File visibility changed");

        Ok(updated)
    }
}
