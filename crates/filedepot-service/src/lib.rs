//! # filedepot-service
//!
//! Business logic for FileDepot: hierarchy and visibility invariants at
//! write/read time, content retrieval, and thumbnail job enqueueing.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod file;
pub mod mime;

pub use file::{CreateFileRequest, FileContent, FileService};
