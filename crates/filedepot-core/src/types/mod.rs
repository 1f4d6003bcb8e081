//! Core type definitions used across the FileDepot workspace.

pub mod id;
pub mod page;

pub use id::*;
pub use page::PageRequest;
