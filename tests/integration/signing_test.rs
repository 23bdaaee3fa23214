//! Integration tests for signing link issuance and redemption.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_generate_link_returns_url_and_pending_document() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Lease").await;
    let id = doc["id"].as_str().unwrap();

    let (token, url) = app.generate_link(id, "client@example.com").await;
    assert_eq!(url, format!("https://sign.test/sign/{token}"));
    assert_eq!(token.len(), 64);

    let fetched = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(fetched.data()["status"], "pending");
    assert_eq!(fetched.data()["clientEmail"], "client@example.com");
}

#[tokio::test]
async fn test_generate_link_validates_email() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Lease").await;
    let id = doc["id"].as_str().unwrap();

    for body in [json!({"clientEmail": "nope"}), json!({"clientEmail": ""}), json!({})] {
        let response = app
            .request(
                "POST",
                &format!("/api/documents/{id}/generate-link"),
                Some(body),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let missing = app
        .request(
            "POST",
            &format!("/api/documents/{}/generate-link", uuid::Uuid::new_v4()),
            Some(json!({"clientEmail": "c@example.com"})),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_round_trip_preserves_signature_data() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Contract").await;
    let id = doc["id"].as_str().unwrap();
    let (token, _) = app.generate_link(id, "client@example.com").await;

    let resolved = app
        .request("GET", &format!("/api/documents/sign/{token}"), None)
        .await;
    assert_eq!(resolved.status, StatusCode::OK);
    assert_eq!(resolved.data()["id"], id);

    let payload = json!({
        "image": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==",
        "typed": "Casey Client",
    });
    let signed = app
        .request(
            "POST",
            &format!("/api/documents/sign/{token}"),
            Some(json!({ "signatureData": payload })),
        )
        .await;
    assert_eq!(signed.status, StatusCode::OK);
    assert_eq!(signed.data()["status"], "signed");
    assert!(signed.data()["signedAt"].is_string());

    let fetched = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(fetched.data()["signatureData"], payload);
    assert_eq!(fetched.data()["secureToken"], token.as_str());
}

#[tokio::test]
async fn test_second_sign_is_conflict() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Contract").await;
    let id = doc["id"].as_str().unwrap();
    let (token, _) = app.generate_link(id, "client@example.com").await;
    let path = format!("/api/documents/sign/{token}");

    let first = app
        .request("POST", &path, Some(json!({"signatureData": "first"})))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request("POST", &path, Some(json!({"signatureData": "second"})))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.error_code(), "INVALID_STATE");

    let relink = app
        .request(
            "POST",
            &format!("/api/documents/{id}/generate-link"),
            Some(json!({"clientEmail": "client@example.com"})),
        )
        .await;
    assert_eq!(relink.status, StatusCode::CONFLICT);

    let fetched = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(fetched.data()["signatureData"], "first");
}

#[tokio::test]
async fn test_blank_signature_is_rejected() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Contract").await;
    let id = doc["id"].as_str().unwrap();
    let (token, _) = app.generate_link(id, "client@example.com").await;
    let path = format!("/api/documents/sign/{token}");

    for body in [
        json!({}),
        json!({"signatureData": null}),
        json!({"signatureData": ""}),
        json!({"signatureData": {}}),
    ] {
        let response = app.request("POST", &path, Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let fetched = app.request("GET", &format!("/api/documents/{id}"), None).await;
    assert_eq!(fetched.data()["status"], "pending");
}

#[tokio::test]
async fn test_rotation_invalidates_old_token() {
    let app = helpers::TestApp::new().await;
    let doc = app.create_document("Contract").await;
    let id = doc["id"].as_str().unwrap();

    let (old, _) = app.generate_link(id, "first@example.com").await;
    let (new, _) = app.generate_link(id, "second@example.com").await;
    assert_ne!(old, new);

    let stale = app
        .request("GET", &format!("/api/documents/sign/{old}"), None)
        .await;
    assert_eq!(stale.status, StatusCode::NOT_FOUND);

    let stale_sign = app
        .request(
            "POST",
            &format!("/api/documents/sign/{old}"),
            Some(json!({"signatureData": "x"})),
        )
        .await;
    assert_eq!(stale_sign.status, StatusCode::NOT_FOUND);

    let current = app
        .request("GET", &format!("/api/documents/sign/{new}"), None)
        .await;
    assert_eq!(current.status, StatusCode::OK);
    assert_eq!(current.data()["clientEmail"], "second@example.com");
}

#[tokio::test]
async fn test_unknown_token_is_404() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request("GET", "/api/documents/sign/does-not-exist", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Document not found or link expired");
}
