//! Background job payload schemas.

pub mod payload;

pub use payload::{ThumbnailJobPayload, GENERATE_THUMBNAILS};
