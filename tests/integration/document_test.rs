//! Integration tests for document CRUD.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_document() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Lease").await;

    assert_eq!(doc["title"], "Lease");
    assert_eq!(doc["status"], "draft");
    assert!(doc["secureToken"].is_null());
    assert!(doc["signedAt"].is_null());
    assert!(doc["signatureData"].is_null());

    let id = doc["id"].as_str().unwrap();
    let response = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], doc["id"]);
}

#[tokio::test]
async fn test_title_defaults_to_filename() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({
                "originalFilename": "invoice-42.pdf",
                "filePath": "uploads/invoice-42.pdf",
                "fileSize": 10,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["title"], "invoice-42.pdf");
}

#[tokio::test]
async fn test_create_requires_filename() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({
                "originalFilename": "",
                "filePath": "uploads/x.pdf",
                "fileSize": 10,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert!(response.body["details"]["original_filename"].is_array());
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = helpers::TestApp::new().await;
    app.create_document("first").await;
    app.create_document("second").await;

    let response = app.request("GET", "/api/documents", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"first") && titles.contains(&"second"));
}

#[tokio::test]
async fn test_patch_whitelisted_fields() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Draft").await;
    let id = doc["id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/documents/{id}"),
            Some(json!({"title": "Final", "clientEmail": "c@example.com"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["title"], "Final");
    assert_eq!(response.data()["clientEmail"], "c@example.com");
    assert_eq!(response.data()["status"], "draft");

    let cleared = app
        .request(
            "PATCH",
            &format!("/api/documents/{id}"),
            Some(json!({"clientEmail": null})),
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert!(cleared.data()["clientEmail"].is_null());
    assert_eq!(cleared.data()["title"], "Final");
}

#[tokio::test]
async fn test_patch_rejects_lifecycle_fields() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Draft").await;
    let id = doc["id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/documents/{id}"),
            Some(json!({"status": "signed", "signedAt": "2024-01-01T00:00:00Z"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let stored = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(stored.data()["status"], "draft");
    assert!(stored.data()["signedAt"].is_null());
}

#[tokio::test]
async fn test_patch_blank_title_rejected() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Draft").await;
    let id = doc["id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/documents/{id}"),
            Some(json!({"title": "   "})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_document_is_404() {
    let app = helpers::TestApp::new().await;
    let id = uuid::Uuid::new_v4();

    let get = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.error_code(), "NOT_FOUND");

    let patch = app
        .request(
            "PATCH",
            &format!("/api/documents/{id}"),
            Some(json!({"title": "x"})),
        )
        .await;
    assert_eq!(patch.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", &format!("/api/documents/{id}"), None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_body_shape() {
    let app = helpers::TestApp::new().await;
    let id = uuid::Uuid::new_v4();

    let missing = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Document not found");
    assert!(missing.body.get("success").is_none());
    assert!(missing.body.get("details").is_none());

    let doc = app.create_document("Lease").await;
    let doc_id = doc["id"].as_str().unwrap();
    let (token, _) = app.generate_link(doc_id, "client@example.com").await;
    let path = format!("/api/documents/sign/{token}");
    app.request("POST", &path, Some(json!({"signatureData": "sig"})))
        .await;
    let again = app
        .request("POST", &path, Some(json!({"signatureData": "sig"})))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.error_code(), "INVALID_STATE");
    assert!(again.body["message"].as_str().unwrap().contains("signed"));
}

#[tokio::test]
async fn test_malformed_id_is_400() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/documents/not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_releases_token() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Temp").await;
    let id = doc["id"].as_str().unwrap();
    let (token, _) = app.generate_link(id, "c@example.com").await;

    let response = app.request("DELETE", &format!("/api/documents/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let by_token = app
        .request("GET", &format!("/api/documents/sign/{token}"), None)
        .await;
    assert_eq!(by_token.status, StatusCode::NOT_FOUND);
}
