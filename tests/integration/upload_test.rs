//! Integration tests for multipart PDF upload.

mod helpers;

use helpers::Part;
use http::StatusCode;

const PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n";

#[tokio::test]
async fn test_upload_creates_draft_and_writes_file() {
    let app = helpers::TestApp::new().await;
    let response = app
        .upload(
            "/api/documents/upload",
            &[
                Part::Text("title", "Signed Lease"),
                Part::Text("clientEmail", "tenant@example.com"),
                Part::File("pdf", "lease.pdf", "application/pdf", PDF),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);

    let doc = response.data();
    assert_eq!(doc["title"], "Signed Lease");
    assert_eq!(doc["originalFilename"], "lease.pdf");
    assert_eq!(doc["fileSize"], PDF.len() as u64);
    assert_eq!(doc["clientEmail"], "tenant@example.com");
    assert_eq!(doc["status"], "draft");

    let path = doc["filePath"].as_str().unwrap();
    assert!(path.starts_with(&app.config.upload.directory));
    assert_eq!(std::fs::read(path).unwrap(), PDF);
}

#[tokio::test]
async fn test_upload_title_defaults_to_filename() {
    let app = helpers::TestApp::new().await;
    let response = app
        .upload(
            "/api/documents/upload",
            &[Part::File("pdf", "quote.pdf", "application/pdf", PDF)],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["title"], "quote.pdf");
}

#[tokio::test]
async fn test_upload_rejections() {
    let app = helpers::TestApp::new().await;

    let no_file = app
        .upload("/api/documents/upload", &[Part::Text("title", "x")])
        .await;
    assert_eq!(no_file.status, StatusCode::BAD_REQUEST);

    let wrong_field = app
        .upload(
            "/api/documents/upload",
            &[Part::File("file", "a.pdf", "application/pdf", PDF)],
        )
        .await;
    assert_eq!(wrong_field.status, StatusCode::BAD_REQUEST);

    let not_pdf = app
        .upload(
            "/api/documents/upload",
            &[Part::File("pdf", "a.png", "image/png", b"\x89PNG")],
        )
        .await;
    assert_eq!(not_pdf.status, StatusCode::BAD_REQUEST);

    let empty = app
        .upload(
            "/api/documents/upload",
            &[Part::File("pdf", "a.pdf", "application/pdf", b"")],
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let listed = app.request("GET", "/api/documents", None).await;
    assert!(listed.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_size_limit() {
    let mut config = signdesk_core::config::AppConfig::default();
    config.upload.max_file_size_bytes = 16;
    let app = helpers::TestApp::with_config(config).await;

    let response = app
        .upload(
            "/api/documents/upload",
            &[Part::File("pdf", "big.pdf", "application/pdf", &[b'x'; 64])],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
