//! Thumbnail job payload.

use serde::{Deserialize, Serialize};

use filedepot_core::types::id::{FileId, UserId};

/// Job type name for thumbnail generation jobs.
pub const GENERATE_THUMBNAILS: &str = "generate_thumbnails";

/// Payload for a `generate_thumbnails` job.
///
/// A fixed schema validated at the worker boundary. The worker re-checks
/// that `(file_id, owner = user_id)` still matches at process time, so a
/// stale or forged job cannot act on another owner's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailJobPayload {
    /// The image file to process.
    pub file_id: FileId,
    /// The user who owned the file at enqueue time.
    pub user_id: UserId,
}
