//! Integration tests for the template catalog.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_seeded_catalog() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/templates", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let templates = response.data().as_array().unwrap();
    assert_eq!(templates.len(), 6);
    assert_eq!(templates[0]["title"], "Service Agreement");
    assert_eq!(templates[0]["filePath"], "/templates/service-agreement.pdf");
    assert_eq!(
        templates[0]["thumbnailPath"],
        "/templates/thumbs/service-agreement.png"
    );
}

#[tokio::test]
async fn test_category_filter() {
    let app = helpers::TestApp::new().await;

    let ndas = app.request("GET", "/api/templates?category=ndas", None).await;
    assert_eq!(ndas.data().as_array().unwrap().len(), 1);

    let contracts = app
        .request("GET", "/api/templates?category=contracts", None)
        .await;
    assert_eq!(contracts.data().as_array().unwrap().len(), 5);

    for category in ["Contracts", "unknown"] {
        let response = app
            .request("GET", &format!("/api/templates?category={category}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.data().as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_use_template_creates_draft() {
    let app = helpers::TestApp::new().await;
    let ndas = app.request("GET", "/api/templates?category=ndas", None).await;
    let nda = ndas.data()[0].clone();
    let id = nda["id"].as_str().unwrap();

    let get = app.request("GET", &format!("/api/templates/{id}"), None).await;
    assert_eq!(get.data()["title"], "Non-Disclosure Agreement");

    let response = app
        .request("POST", &format!("/api/templates/{id}/use"), Some(json!({})))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let doc = response.data();
    assert_eq!(doc["title"], "Non-Disclosure Agreement");
    assert_eq!(doc["originalFilename"], "Non-Disclosure Agreement.pdf");
    assert_eq!(doc["filePath"], nda["filePath"]);
    assert_eq!(doc["fileSize"], 0);
    assert_eq!(doc["templateId"], id);
    assert_eq!(doc["status"], "draft");

    let named = app
        .request(
            "POST",
            &format!("/api/templates/{id}/use"),
            Some(json!({"title": "Acme NDA", "clientEmail": "legal@acme.test"})),
        )
        .await;
    assert_eq!(named.data()["title"], "Acme NDA");
    assert_eq!(named.data()["clientEmail"], "legal@acme.test");
}

#[tokio::test]
async fn test_unknown_template_is_404() {
    let app = helpers::TestApp::new().await;
    let id = uuid::Uuid::new_v4();

    let get = app.request("GET", &format!("/api/templates/{id}"), None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let used = app
        .request("POST", &format!("/api/templates/{id}/use"), Some(json!({})))
        .await;
    assert_eq!(used.status, StatusCode::NOT_FOUND);
}
