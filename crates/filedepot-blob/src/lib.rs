//! # filedepot-blob
//!
//! Blob storage for FileDepot: a local filesystem [`LocalBlobStore`]
//! implementing the `BlobStore` trait, plus thumbnail rendition naming
//! and generation.

pub mod local;
pub mod rendition;

pub use local::LocalBlobStore;
pub use rendition::{rendition_name, ThumbnailGenerator, THUMBNAIL_SIZES};
