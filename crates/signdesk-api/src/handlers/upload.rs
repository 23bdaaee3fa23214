//! Multipart PDF upload handler.

use axum::Json;
use axum::extract::{Multipart, State};

use signdesk_core::error::AppError;
use signdesk_entity::document::Document;
use signdesk_service::UploadParams;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "pdf";

/// POST /api/documents/upload
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let mut title: Option<String> = None;
    let mut client_email: Option<String> = None;
    let mut file: Option<(Option<String>, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            "clientEmail" => {
                client_email = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            FILE_FIELD => {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                file = Some((file_name, content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::validation("No file uploaded"))?;

    let document = state
        .upload_service
        .upload(UploadParams {
            file_name,
            content_type,
            data,
            title,
            client_email,
        })
        .await?;

    Ok(Json(ApiResponse::ok(document)))
}
