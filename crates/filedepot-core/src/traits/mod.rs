//! Capability traits defined in `filedepot-core` and implemented by other
//! crates. The service and worker receive these as injected `Arc` references
//! constructed once at process start, never as ambient singletons.

pub mod blob;
pub mod queue;
pub mod session;

pub use blob::{BlobStore, ByteStream};
pub use queue::{Job, WorkQueue};
pub use session::SessionGate;
