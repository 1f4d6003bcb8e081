//! File kind and parent reference types.

use serde::{Deserialize, Serialize};

use filedepot_core::types::id::FileId;

/// The kind of a file entity. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A folder. Never carries content.
    Folder,
    /// A plain file.
    File,
    /// An image file. Eligible for thumbnail renditions.
    Image,
}

impl FileKind {
    /// Parse a kind from its wire name. Returns `None` for anything
    /// other than the three recognized kinds.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "folder" => Some(Self::Folder),
            "file" => Some(Self::File),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Image => "image",
        }
    }

    /// Whether this kind carries blob content.
    pub fn has_content(&self) -> bool {
        !matches!(self, Self::Folder)
    }
}

/// Reference to a file's parent in the hierarchy.
///
/// A proper sum type instead of a reserved `0` sentinel, so "no parent"
/// can never collide with a real identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentRef {
    /// The file lives at the root of its owner's namespace.
    #[default]
    Root,
    /// The file lives under the folder with this id.
    Folder(FileId),
}

impl ParentRef {
    /// The parent folder id, if the file is not at the root.
    pub fn folder_id(&self) -> Option<FileId> {
        match self {
            Self::Root => None,
            Self::Folder(id) => Some(*id),
        }
    }
}
