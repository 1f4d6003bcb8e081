//! Local filesystem blob store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use filedepot_core::error::{AppError, ErrorKind};
use filedepot_core::result::AppResult;
use filedepot_core::traits::blob::{BlobStore, ByteStream};

/// Blob store backed by a local content area.
///
/// Blob names are opaque; the store joins them under a single root
/// directory and never interprets them.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a blob name to an absolute path within the root.
    fn resolve(&self, name: &str) -> PathBuf {
        let clean = name.trim_start_matches('/');
        self.root.join(clean)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn write(&self, name: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(name);

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {name}"),
                e,
            )
        })?;

        debug!(name, bytes = data.len(), "Wrote blob");
        Ok(())
    }

    async fn read(&self, name: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(name);
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {name}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open blob: {name}"),
                    e,
                )
            }
        })?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(|b| b.into()))))
    }

    async fn read_bytes(&self, name: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(name);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {name}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read blob: {name}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, name: &str) -> AppResult<bool> {
        let full_path = self.resolve(name);
        Ok(full_path.exists())
    }
}
