//! Thumbnail rendition naming and generation.

use std::io::Cursor;
use std::sync::Arc;

use bytes::Bytes;

use filedepot_core::error::{AppError, ErrorKind};
use filedepot_core::result::AppResult;
use filedepot_core::traits::blob::BlobStore;

/// Rendition sizes in pixels (widest edge), processed in this order.
///
/// The order only affects determinism of test fixtures; each size is
/// written independently and idempotently.
pub const THUMBNAIL_SIZES: [u32; 3] = [500, 250, 100];

/// Derive the rendition blob name for an original blob and size.
///
/// Deterministic, so re-running a job for the same file overwrites the
/// same slots.
pub fn rendition_name(content_ref: &str, size: u32) -> String {
    format!("{content_ref}_{size}")
}

/// Generates resized renditions of image blobs.
#[derive(Debug, Clone)]
pub struct ThumbnailGenerator {
    /// Blob store for reading originals and writing renditions.
    blobs: Arc<dyn BlobStore>,
}

impl ThumbnailGenerator {
    /// Create a new thumbnail generator.
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Generate a single rendition and return its blob name.
    pub async fn generate(&self, content_ref: &str, size: u32) -> AppResult<String> {
        let source_bytes = self.blobs.read_bytes(content_ref).await?;

        let rendition_bytes =
            tokio::task::spawn_blocking(move || resize_image(&source_bytes, size))
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Internal, "Thumbnail task panicked", e)
                })??;

        let name = rendition_name(content_ref, size);
        self.blobs.write(&name, rendition_bytes).await?;

        tracing::debug!(source = content_ref, size, output = %name, "Generated rendition");

        Ok(name)
    }

    /// Generate renditions at every size in [`THUMBNAIL_SIZES`], in order.
    ///
    /// Stops at the first failure; renditions already written by this
    /// attempt are left in place, which is safe because a retry overwrites
    /// them.
    pub async fn generate_all(&self, content_ref: &str) -> AppResult<Vec<String>> {
        let mut names = Vec::with_capacity(THUMBNAIL_SIZES.len());
        for size in THUMBNAIL_SIZES {
            names.push(self.generate(content_ref, size).await?);
        }
        Ok(names)
    }
}

/// Resize image bytes so the widest edge fits `size`, preserving aspect
/// ratio and re-encoding in the source format.
fn resize_image(data: &[u8], size: u32) -> AppResult<Bytes> {
    let format = image::guess_format(data)
        .map_err(|e| AppError::with_source(ErrorKind::Validation, "Unrecognized image format", e))?;
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::with_source(ErrorKind::Validation, "Undecodable image data", e))?;

    let thumb = img.thumbnail(size, size);

    let mut buf = Vec::new();
    thumb
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to encode rendition", e))?;

    Ok(Bytes::from(buf))
}
