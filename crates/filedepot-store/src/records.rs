//! File metadata record store: trait and in-memory backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use filedepot_core::result::AppResult;
use filedepot_core::types::id::{FileId, UserId};
use filedepot_core::types::page::PageRequest;
use filedepot_entity::file::{File, ParentRef};

/// Keyed record store for file entities.
///
/// The query engine behind this trait is external; FileDepot only needs
/// insert, point lookups, a filtered+paginated listing, and the single
/// visibility update.
#[async_trait]
pub trait FileRecords: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new file record.
    async fn insert(&self, file: &File) -> AppResult<()>;

    /// Find a file by id alone, regardless of owner.
    async fn find_by_id(&self, id: FileId) -> AppResult<Option<File>>;

    /// Find a file by id, scoped to its owner.
    async fn find_by_id_and_owner(&self, id: FileId, owner_id: UserId)
        -> AppResult<Option<File>>;

    /// List files matching exactly `(owner_id, parent)`, paginated.
    ///
    /// Out-of-range pages yield an empty vec, never an error.
    async fn list_by_parent(
        &self,
        owner_id: UserId,
        parent: ParentRef,
        page: &PageRequest,
    ) -> AppResult<Vec<File>>;

    /// Update a file's visibility flag and return the refreshed record,
    /// or `None` if no such file exists.
    async fn set_public(&self, id: FileId, is_public: bool) -> AppResult<Option<File>>;
}

/// In-memory record store.
///
/// Keeps an insertion-order index alongside the map so listing order is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileRecords {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<FileId, File>,
    order: Vec<FileId>,
}

impl MemoryFileRecords {
    /// Create an empty record store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRecords for MemoryFileRecords {
    async fn insert(&self, file: &File) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        if inner.by_id.insert(file.id, file.clone()).is_none() {
            inner.order.push(file.id);
        }
        debug!(file_id = %file.id, kind = file.kind.as_str(), "Inserted file record");
        Ok(())
    }

    async fn find_by_id(&self, id: FileId) -> AppResult<Option<File>> {
        let inner = self.inner.read().await;
        Ok(inner.by_id.get(&id).cloned())
    }

    async fn find_by_id_and_owner(
        &self,
        id: FileId,
        owner_id: UserId,
    ) -> AppResult<Option<File>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_id
            .get(&id)
            .filter(|f| f.owner_id == owner_id)
            .cloned())
    }

    async fn list_by_parent(
        &self,
        owner_id: UserId,
        parent: ParentRef,
        page: &PageRequest,
    ) -> AppResult<Vec<File>> {
        let inner = self.inner.read().await;
        let files = inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .filter(|f| f.owner_id == owner_id && f.parent == parent)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();
        Ok(files)
    }

    async fn set_public(&self, id: FileId, is_public: bool) -> AppResult<Option<File>> {
        let mut inner = self.inner.write().await;
        let Some(file) = inner.by_id.get_mut(&id) else {
            return Ok(None);
        };
        file.is_public = is_public;
        file.updated_at = Utc::now();
        Ok(Some(file.clone()))
    }
}
