//! Integration tests for visibility control and private-content masking.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use filedepot_core::error::ErrorKind;
use filedepot_entity::file::ParentRef;
use filedepot_service::CreateFileRequest;

use crate::helpers::TestApp;

async fn upload_private(app: &TestApp, user: filedepot_core::types::id::UserId) -> filedepot_entity::File {
    app.service
        .create(
            user,
            CreateFileRequest {
                name: "note.txt".to_string(),
                kind: "file".to_string(),
                parent: ParentRef::Root,
                is_public: false,
                data: Some(STANDARD.encode("for my eyes only")),
            },
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_publish_then_unpublish_round_trip() {
    let app = TestApp::new().await;
    let owner = app.user_with_token("owner").await;
    let file = upload_private(&app, owner).await;

    // Private: anonymous resolve is masked as NotFound.
    let err = app.service.resolve(None, file.id, None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // Published: anonymous resolve succeeds.
    let published = app.service.set_public(owner, file.id, true).await.unwrap();
    assert!(published.is_public);

    let content = app.service.resolve(None, file.id, None).await.unwrap();
    assert_eq!(TestApp::collect(content.stream).await, b"for my eyes only");

    // Unpublished again: the same anonymous resolve is masked again.
    let unpublished = app.service.set_public(owner, file.id, false).await.unwrap();
    assert!(!unpublished.is_public);

    let err = app.service.resolve(None, file.id, None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_private_content_indistinguishable_from_absent() {
    let app = TestApp::new().await;
    let owner = app.user_with_token("owner").await;
    app.user_with_token("stranger").await;
    let file = upload_private(&app, owner).await;

    let missing = app
        .service
        .resolve(
            Some("stranger"),
            filedepot_core::types::id::FileId::new(),
            None,
        )
        .await
        .unwrap_err();
    let masked = app
        .service
        .resolve(Some("stranger"), file.id, None)
        .await
        .unwrap_err();

    // The stranger sees the same error either way.
    assert_eq!(missing.kind, masked.kind);
    assert_eq!(missing.message, masked.message);
}

#[tokio::test]
async fn test_only_owner_can_change_visibility() {
    let app = TestApp::new().await;
    let owner = app.user_with_token("owner").await;
    let other = app.user_with_token("other").await;
    let file = upload_private(&app, owner).await;

    let err = app
        .service
        .set_public(other, file.id, true)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    // The file is still private.
    let err = app.service.resolve(None, file.id, None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
