use gdrive_core::{DriveClient, DriveError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn find_folder_queries_by_name_and_mime_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param(
            "q",
            "name = 'VK Backup' and mimeType = 'application/vnd.google-apps.folder' and trashed = false",
        ))
        .and(header("authorization", "Bearer drive-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{ "id": "folder-1", "name": "VK Backup" }]
        })))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(&server.uri(), "drive-token").unwrap();
    let folder = client.find_folder("VK Backup").await.unwrap();

    assert_eq!(folder.map(|f| f.id), Some("folder-1".to_string()));
}

#[tokio::test]
async fn find_folder_returns_none_when_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "files": [] })))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(&server.uri(), "drive-token").unwrap();
    assert!(client.find_folder("Nope").await.unwrap().is_none());
}

#[tokio::test]
async fn create_folder_posts_folder_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drive/v3/files"))
        .and(body_partial_json(json!({
            "name": "VK Backup",
            "mimeType": "application/vnd.google-apps.folder"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "folder-2",
            "name": "VK Backup"
        })))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(&server.uri(), "drive-token").unwrap();
    let folder = client.create_folder("VK Backup").await.unwrap();

    assert_eq!(folder.id, "folder-2");
}

#[tokio::test]
async fn upload_bytes_sends_multipart_related_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload/drive/v3/files"))
        .and(query_param("uploadType", "multipart"))
        .and(header_regex(
            "content-type",
            "^multipart/related; boundary=vk_photo_backup_[0-9a-f]{16}$",
        ))
        .and(body_string_contains("\"parents\":[\"folder-1\"]"))
        .and(body_string_contains("jpeg-bytes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "file-1",
            "name": "10.jpg"
        })))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(&server.uri(), "drive-token").unwrap();
    let file = client
        .upload_bytes("10.jpg", "folder-1", "image/jpeg", b"jpeg-bytes".to_vec())
        .await
        .unwrap();

    assert_eq!(file.id, "file-1");
    assert_eq!(file.name.as_deref(), Some("10.jpg"));
}

#[tokio::test]
async fn fetch_source_returns_body_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/photo.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"pixels".to_vec()))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(&server.uri(), "drive-token").unwrap();
    let bytes = client
        .fetch_source(&format!("{}/photo.jpg", server.uri()))
        .await
        .unwrap();

    assert_eq!(bytes, b"pixels");
}

#[tokio::test]
async fn fetch_source_reports_failed_download() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(&server.uri(), "drive-token").unwrap();
    let err = client
        .fetch_source(&format!("{}/gone.jpg", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, DriveError::Source { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn api_error_uses_google_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "Insufficient Permission" }
        })))
        .mount(&server)
        .await;

    let client = DriveClient::with_base_url(&server.uri(), "drive-token").unwrap();
    let err = client.create_folder("VK Backup").await.unwrap_err();

    assert!(err.to_string().contains("Insufficient Permission"));
}
