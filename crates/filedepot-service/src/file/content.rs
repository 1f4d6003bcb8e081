//! Content retrieval: the public/owner-gated read path.

use std::fmt;

use filedepot_blob::rendition::{rendition_name, THUMBNAIL_SIZES};
use filedepot_core::error::AppError;
use filedepot_core::traits::blob::ByteStream;
use filedepot_core::types::id::FileId;
use filedepot_entity::file::FileKind;

use crate::mime::mime_from_name;

use super::service::FileService;

/// A resolved blob ready for streaming to the caller.
pub struct FileContent {
    /// The content byte stream.
    pub stream: ByteStream,
    /// MIME type inferred from the file's name, if recognized.
    pub mime_type: Option<String>,
}

impl fmt::Debug for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileContent")
            .field("mime_type", &self.mime_type)
            .finish_non_exhaustive()
    }
}

impl FileService {
    /// Resolves a file's content for streaming.
    ///
    /// Private files are masked: a missing token, an unknown token, and a
    /// token belonging to a different user all yield the same `NotFound`
    /// as a file that does not exist, so an unauthorized caller cannot
    /// probe for private content.
    pub async fn resolve(
        &self,
        token: Option<&str>,
        file_id: FileId,
        size: Option<u32>,
    ) -> Result<FileContent, AppError> {
        let file = self
            .records()
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if !file.is_public {
            let caller = match token {
                Some(token) => self.sessions().resolve(token).await?,
                None => None,
            };
            if caller != Some(file.owner_id) {
                return Err(AppError::not_found("File not found"));
            }
        }

        if file.kind == FileKind::Folder {
            return Err(AppError::invalid_operation("A folder doesn't have content"));
        }

        let content_ref = file
            .content_ref
            .as_deref()
            .ok_or_else(|| AppError::internal("Leaf file has no content reference"))?;

        let blob_name = match size {
            Some(size) => {
                if !THUMBNAIL_SIZES.contains(&size) {
                    return Err(AppError::validation(format!("Unsupported size: {size}")));
                }
                rendition_name(content_ref, size)
            }
            None => content_ref.to_string(),
        };

        // Covers renditions not yet generated and sizes requested for
        // non-image files; both look identical to the caller.
        if !self.blobs().exists(&blob_name).await? {
            return Err(AppError::not_found("File not found"));
        }

        let stream = self.blobs().read(&blob_name).await?;

        Ok(FileContent {
            stream,
            mime_type: mime_from_name(&file.name),
        })
    }
}
