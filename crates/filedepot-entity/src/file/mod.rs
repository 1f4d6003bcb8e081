//! File entity: model, kind, and parent reference.

pub mod kind;
pub mod model;

pub use kind::{FileKind, ParentRef};
pub use model::File;
