//! Blob store trait for opaque content storage.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading blob contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for opaque byte blob storage.
///
/// A blob store knows nothing about file metadata. Names are opaque
/// strings generated by the caller; derived-rendition names are a
/// deterministic function of the original name plus a size suffix so
/// repeated thumbnail jobs overwrite the same slots.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write bytes to a blob under the given name, overwriting any
    /// existing blob with that name.
    async fn write(&self, name: &str, data: Bytes) -> AppResult<()>;

    /// Read a blob and return its byte stream.
    async fn read(&self, name: &str) -> AppResult<ByteStream>;

    /// Read a blob into memory as a complete byte vector.
    async fn read_bytes(&self, name: &str) -> AppResult<Bytes>;

    /// Check whether a blob exists under the given name.
    async fn exists(&self, name: &str) -> AppResult<bool>;
}
