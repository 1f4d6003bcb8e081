//! Shared test helpers for integration tests.

use std::sync::Arc;

use filedepot_blob::rendition::ThumbnailGenerator;
use filedepot_blob::LocalBlobStore;
use filedepot_core::traits::blob::{BlobStore, ByteStream};
use filedepot_core::traits::queue::WorkQueue;
use filedepot_core::types::id::UserId;
use filedepot_service::FileService;
use filedepot_store::{MemoryFileRecords, MemorySessionGate, MemoryWorkQueue};
use filedepot_worker::{JobExecutor, ThumbnailJobHandler};
use futures::StreamExt;

/// Test application context: the service, its collaborators, and a job
/// executor standing in for a running worker.
pub struct TestApp {
    /// The file service under test.
    pub service: FileService,
    /// Blob store for direct inspection.
    pub blobs: Arc<dyn BlobStore>,
    /// Session gate for minting test tokens.
    pub sessions: Arc<MemorySessionGate>,
    /// Work queue for draining jobs.
    pub queue: Arc<MemoryWorkQueue>,
    /// Executor with the thumbnail handler registered.
    pub executor: JobExecutor,
    _dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a new fully wired test application.
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
            records.clone(),
            Arc::clone(&blobs),
            sessions.clone(),
            queue.clone(),
        );

        let mut executor = JobExecutor::new();
        executor.register(Arc::new(ThumbnailJobHandler::new(
            records.clone(),
            ThumbnailGenerator::new(Arc::clone(&blobs)),
        )));

        Self {
            service,
            blobs,
            sessions,
            queue,
            executor,
            _dir: dir,
        }
    }

    /// Register a session token for a fresh user.
    pub async fn user_with_token(&self, token: &str) -> UserId {
        let user = UserId::new();
        self.sessions.grant(token, user).await;
        user
    }

    /// Drain the work queue once, executing each delivered job and
    /// reporting its outcome, the way the worker runner would.
    pub async fn drain_queue(&self) {
        while let Some(job) = self.queue.dequeue().await.expect("dequeue") {
            match self.executor.execute(&job).await {
                Ok(_) => self.queue.complete(job.id).await.expect("complete"),
                Err(e) => self.queue.fail(job.id, &e.to_string()).await.expect("fail"),
            }
        }
    }

    /// Collect a content stream into a byte vector.
    pub async fn collect(mut stream: ByteStream) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(chunk) = stream.next().await {
            out.extend_from_slice(&chunk.expect("stream chunk"));
        }
        out
    }
}

/// Encode a PNG test image of the given dimensions.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    });
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encode png");
    buf
}
