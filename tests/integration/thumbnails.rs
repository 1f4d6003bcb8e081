//! Integration tests for the asynchronous thumbnail pipeline.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use filedepot_blob::rendition::{rendition_name, THUMBNAIL_SIZES};
use filedepot_core::error::ErrorKind;
use filedepot_core::traits::blob::BlobStore;
use filedepot_entity::file::ParentRef;
use filedepot_service::CreateFileRequest;

use crate::helpers::{png_bytes, TestApp};

async fn upload_image(app: &TestApp, user: filedepot_core::types::id::UserId) -> filedepot_entity::File {
    app.service
        .create(
            user,
            CreateFileRequest {
                name: "photo.png".to_string(),
                kind: "image".to_string(),
                parent: ParentRef::Root,
                is_public: false,
                data: Some(STANDARD.encode(png_bytes(640, 480))),
            },
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_image_upload_generates_renditions() {
    let app = TestApp::new().await;
    let user = app.user_with_token("tok").await;
    let image = upload_image(&app, user).await;

    // Renditions do not exist until the worker has run; that is a valid
    // transient state, surfaced as NotFound.
    let err = app
        .service
        .resolve(Some("tok"), image.id, Some(250))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    app.drain_queue().await;

    let original = app
        .service
        .resolve(Some("tok"), image.id, None)
        .await
        .unwrap();
    let original_bytes = TestApp::collect(original.stream).await;

    let thumb = app
        .service
        .resolve(Some("tok"), image.id, Some(250))
        .await
        .unwrap();
    let thumb_bytes = TestApp::collect(thumb.stream).await;
    assert_ne!(thumb_bytes, original_bytes);

    let content_ref = image.content_ref.as_deref().unwrap();
    for size in THUMBNAIL_SIZES {
        assert!(app
            .blobs
            .exists(&rendition_name(content_ref, size))
            .await
            .unwrap());
    }
}

#[tokio::test]
async fn test_unsupported_size_is_validation_error() {
    let app = TestApp::new().await;
    let user = app.user_with_token("tok").await;
    let image = upload_image(&app, user).await;
    app.drain_queue().await;

    let err = app
        .service
        .resolve(Some("tok"), image.id, Some(999))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_duplicate_delivery_converges_to_same_renditions() {
    let app = TestApp::new().await;
    let user = app.user_with_token("tok").await;
    let image = upload_image(&app, user).await;
    let content_ref = image.content_ref.clone().unwrap();

    app.drain_queue().await;

    let mut first = Vec::new();
    for size in THUMBNAIL_SIZES {
        first.push(
            app.blobs
                .read_bytes(&rendition_name(&content_ref, size))
                .await
                .unwrap(),
        );
    }

    // Simulate the queue redelivering the same job.
    use filedepot_core::traits::queue::WorkQueue;
    app.queue
        .enqueue(
            filedepot_entity::job::GENERATE_THUMBNAILS,
            serde_json::json!({ "file_id": image.id, "user_id": user }),
        )
        .await
        .unwrap();
    app.drain_queue().await;

    for (i, size) in THUMBNAIL_SIZES.iter().enumerate() {
        let again = app
            .blobs
            .read_bytes(&rendition_name(&content_ref, *size))
            .await
            .unwrap();
        assert_eq!(again, first[i], "rendition {size} must be unchanged");
    }
}

#[tokio::test]
async fn test_failed_job_is_reported_not_dropped() {
    let app = TestApp::new().await;

    // A job pointing at a file that does not exist.
    use filedepot_core::traits::queue::WorkQueue;
    app.queue
        .enqueue(
            filedepot_entity::job::GENERATE_THUMBNAILS,
            serde_json::json!({
                "file_id": filedepot_core::types::id::FileId::new(),
                "user_id": filedepot_core::types::id::UserId::new(),
            }),
        )
        .await
        .unwrap();

    // Drain until the queue parks the job as dead.
    for _ in 0..5 {
        app.drain_queue().await;
    }

    let dead = app.queue.dead_jobs().await;
    assert_eq!(dead.len(), 1);
    assert!(dead[0].1.contains("File not found"));
}
