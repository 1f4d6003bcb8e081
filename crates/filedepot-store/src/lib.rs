//! # filedepot-store
//!
//! The file metadata record store interface and in-process reference
//! implementations of the external collaborators FileDepot consumes:
//! the record store, the session gate, and the work queue.
//!
//! The reference backends are suitable for single-node deployments and
//! tests; production deployments substitute their own implementations
//! of the same traits.

pub mod queue;
pub mod records;
pub mod session;

pub use queue::MemoryWorkQueue;
pub use records::{FileRecords, MemoryFileRecords};
pub use session::MemorySessionGate;
