//! # filedepot-entity
//!
//! Domain entity models for FileDepot: the file hierarchy entity and
//! background job payload schemas.

pub mod file;
pub mod job;

pub use file::{File, FileKind, ParentRef};
pub use job::ThumbnailJobPayload;
