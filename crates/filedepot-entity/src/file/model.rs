//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filedepot_core::types::id::{FileId, UserId};

use super::kind::{FileKind, ParentRef};

/// A file stored in FileDepot: folder, plain file, or image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// The file owner.
    pub owner_id: UserId,
    /// The display name (including extension for leaves).
    pub name: String,
    /// Folder, plain file, or image.
    pub kind: FileKind,
    /// Parent folder or root.
    pub parent: ParentRef,
    /// Whether the file is visible to anonymous callers.
    pub is_public: bool,
    /// Opaque reference to the original blob. `None` iff this is a folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Create a new file record stamped with the current time.
    pub fn new(
        owner_id: UserId,
        name: String,
        kind: FileKind,
        parent: ParentRef,
        is_public: bool,
        content_ref: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: FileId::new(),
            owner_id,
            name,
            kind,
            parent,
            is_public,
            content_ref,
            created_at: now,
            updated_at: now,
        }
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}
