//! Shared wiring for service tests.

use std::sync::Arc;

use filedepot_blob::LocalBlobStore;
use filedepot_core::traits::blob::BlobStore;
use filedepot_core::types::id::UserId;
use filedepot_store::{MemoryFileRecords, MemorySessionGate, MemoryWorkQueue};

use super::service::FileService;

/// A fully wired service over temp-dir blobs and in-memory backends.
pub(crate) struct TestHarness {
    pub service: FileService,
    pub blobs: Arc<dyn BlobStore>,
    pub sessions: Arc<MemorySessionGate>,
    pub queue: Arc<MemoryWorkQueue>,
    _dir: tempfile::TempDir,
}

impl TestHarness {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let blobs: Arc<dyn BlobStore> = Arc::new(
            LocalBlobStore::new(dir.path().to_str().expect("utf-8 path"))
                .await
                .expect("blob store"),
        );
        let records = Arc::new(MemoryFileRecords::new());
        let sessions = Arc::new(MemorySessionGate::new());
        let queue = Arc::new(MemoryWorkQueue::new());

        let service = FileService::new(
            records,
            Arc::clone(&blobs),
            Arc::clone(&sessions) as _,
            Arc::clone(&queue) as _,
        );

        Self {
            service,
            blobs,
            sessions,
            queue,
            _dir: dir,
        }
    }

    /// Register a session token for a fresh user and return the user id.
    pub async fn user_with_token(&self, token: &str) -> UserId {
        let user = UserId::new();
        self.sessions.grant(token, user).await;
        user
    }
}
