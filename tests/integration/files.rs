//! Integration tests for folder/file creation, listing, and readback.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use filedepot_core::error::ErrorKind;
use filedepot_core::types::page::PageRequest;
use filedepot_entity::file::{FileKind, ParentRef};
use filedepot_service::CreateFileRequest;

use crate::helpers::TestApp;

fn request(name: &str, kind: &str, parent: ParentRef, data: Option<String>) -> CreateFileRequest {
    CreateFileRequest {
        name: name.to_string(),
        kind: kind.to_string(),
        parent,
        is_public: false,
        data,
    }
}

#[tokio::test]
async fn test_folder_then_file_then_readback() {
    let app = TestApp::new().await;
    let user = app.user_with_token("tok").await;
    let caller = app.service.authorize("tok").await.unwrap();
    assert_eq!(caller, user);

    let folder = app
        .service
        .create(user, request("docs", "folder", ParentRef::Root, None))
        .await
        .unwrap();
    assert_eq!(folder.kind, FileKind::Folder);
    assert!(folder.content_ref.is_none());

    let file = app
        .service
        .create(
            user,
            request(
                "a.txt",
                "file",
                ParentRef::Folder(folder.id),
                Some(STANDARD.encode("Hello FileDepot")),
            ),
        )
        .await
        .unwrap();
    assert!(file.content_ref.is_some());
    assert_eq!(file.parent, ParentRef::Folder(folder.id));

    let fetched = app.service.get(user, file.id).await.unwrap();
    assert_eq!(fetched.name, "a.txt");

    let content = app
        .service
        .resolve(Some("tok"), file.id, None)
        .await
        .unwrap();
    assert_eq!(content.mime_type.as_deref(), Some("text/plain"));
    assert_eq!(TestApp::collect(content.stream).await, b"Hello FileDepot");
}

#[tokio::test]
async fn test_file_invisible_to_other_users() {
    let app = TestApp::new().await;
    let owner = app.user_with_token("owner").await;
    let other = app.user_with_token("other").await;

    let file = app
        .service
        .create(
            owner,
            request(
                "a.txt",
                "file",
                ParentRef::Root,
                Some(STANDARD.encode("private")),
            ),
        )
        .await
        .unwrap();

    let err = app.service.get(other, file.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_listing_pages_through_25_files() {
    let app = TestApp::new().await;
    let user = app.user_with_token("tok").await;

    let folder = app
        .service
        .create(user, request("bulk", "folder", ParentRef::Root, None))
        .await
        .unwrap();
    for i in 0..25 {
        app.service
            .create(
                user,
                request(
                    &format!("f{i}.txt"),
                    "file",
                    ParentRef::Folder(folder.id),
                    Some(STANDARD.encode("x")),
                ),
            )
            .await
            .unwrap();
    }

    let parent = ParentRef::Folder(folder.id);
    let page0 = app
        .service
        .list(user, parent, PageRequest::new(0))
        .await
        .unwrap();
    let page1 = app
        .service
        .list(user, parent, PageRequest::new(1))
        .await
        .unwrap();
    let page2 = app
        .service
        .list(user, parent, PageRequest::new(2))
        .await
        .unwrap();

    assert_eq!(page0.len(), 20);
    assert_eq!(page1.len(), 5);
    assert!(page2.is_empty());
}
