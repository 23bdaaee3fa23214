//! Integration tests for dashboard statistics, signature records, and health.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_stats_track_lifecycle() {
    let app = helpers::TestApp::new().await;

    let empty = app.request("GET", "/api/dashboard/stats", None).await;
    assert_eq!(
        *empty.data(),
        json!({"totalDocuments": 0, "pendingSignatures": 0, "completed": 0, "templatesUsed": 0})
    );

    let a = app.create_document("a").await;
    app.create_document("b").await;
    app.create_document("c").await;

    let (token, _) = app
        .generate_link(a["id"].as_str().unwrap(), "c@example.com")
        .await;
    let pending = app.request("GET", "/api/dashboard/stats", None).await;
    assert_eq!(pending.data()["pendingSignatures"], 1);

    app.request(
        "POST",
        &format!("/api/documents/sign/{token}"),
        Some(json!({"signatureData": "sig"})),
    )
    .await;

    let stats = app.request("GET", "/api/dashboard/stats", None).await;
    assert_eq!(stats.data()["totalDocuments"], 3);
    assert_eq!(stats.data()["pendingSignatures"], 0);
    assert_eq!(stats.data()["completed"], 1);
    assert_eq!(stats.data()["templatesUsed"], 0);
}

#[tokio::test]
async fn test_template_use_is_counted() {
    let app = helpers::TestApp::new().await;
    let templates = app.request("GET", "/api/templates", None).await;
    let id = templates.data()[0]["id"].as_str().unwrap().to_string();

    app.request("POST", &format!("/api/templates/{id}/use"), Some(json!({})))
        .await;
    app.create_document("upload").await;

    let stats = app.request("GET", "/api/dashboard/stats", None).await;
    assert_eq!(stats.data()["totalDocuments"], 2);
    assert_eq!(stats.data()["templatesUsed"], 1);
}

#[tokio::test]
async fn test_signature_records() {
    let app = helpers::TestApp::new().await;
    let user_id = uuid::Uuid::new_v4().to_string();

    let created = app
        .request(
            "POST",
            "/api/signatures",
            Some(json!({
                "userId": user_id,
                "signatureData": "data:image/png;base64,AAAA",
                "signatureText": "Jo Signer",
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.data()["id"].as_str().unwrap().to_string();

    let fetched = app.request("GET", &format!("/api/signatures/{id}"), None).await;
    assert_eq!(fetched.data()["signatureText"], "Jo Signer");

    let listed = app
        .request("GET", &format!("/api/signatures/user/{user_id}"), None)
        .await;
    assert_eq!(listed.data().as_array().unwrap().len(), 1);

    let blank = app
        .request("POST", "/api/signatures", Some(json!({"signatureData": ""})))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "GET",
            &format!("/api/signatures/{}", uuid::Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}
