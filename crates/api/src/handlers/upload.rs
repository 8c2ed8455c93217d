//! Handler for `POST /api/upload/{house_id}`.

use akiya_core::error::CoreError;
use akiya_core::image_ref::{self, MIME_JPEG, MIME_PNG, MIME_WEBP};
use akiya_core::types::ImageRecord;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Accepted content types for uploaded images.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[MIME_JPEG, MIME_PNG, MIME_WEBP];

const INVALID_FILE_TYPE: &str = "ファイルタイプが無効です";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub image_id: String,
    pub message: &'static str,
}

/// POST /api/upload/{house_id}
///
/// Accepts a multipart form with a required `file` field. The image is
/// stored on the house as a data URL.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(house_id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    if !state.store.contains(&house_id).await {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "House",
            id: house_id,
        }));
    }

    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue; // ignore unknown fields
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file = Some((filename, content_type, data.to_vec()));
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let mime = upload_mime(&filename, content_type.as_deref())
        .ok_or_else(|| AppError::BadRequest(INVALID_FILE_TYPE.into()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let record = ImageRecord::uploaded(image_ref::encode_data_url(mime, &data));
    let image_id = record.id.clone();
    state.store.append_image(&house_id, record).await?;

    tracing::info!(%house_id, %image_id, %filename, size = data.len(), "Image uploaded");
    Ok(Json(UploadResponse {
        image_id,
        message: "Image uploaded successfully",
    }))
}

/// MIME type for an upload, or `None` if either the declared content type
/// or the filename extension is not an accepted image type.
fn upload_mime(filename: &str, content_type: Option<&str>) -> Option<&'static str> {
    let declared = content_type?;
    if !ALLOWED_CONTENT_TYPES.contains(&declared) {
        return None;
    }
    let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some(MIME_JPEG),
        "png" => Some(MIME_PNG),
        "webp" => Some(MIME_WEBP),
        _ => None,
    }
}
