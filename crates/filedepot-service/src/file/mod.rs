//! File operations: creation, lookup, listing, visibility, retrieval.

pub mod content;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use content::FileContent;
pub use service::{CreateFileRequest, FileService};
