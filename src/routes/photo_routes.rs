use axum::{
    extract::{DefaultBodyLimit, State},
    routing::post,
    Json, Router,
};
use base64::Engine;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::car_dto::{PhotoResponse, UploadPhotoRequest};
use crate::services::photo_storage::PhotoStorage;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Límite del body: una foto en base64 puede superar el default de axum
const UPLOAD_BODY_LIMIT: usize = 15 * 1024 * 1024;

pub fn create_photo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_photo))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}

/// Subir una foto (bytes en base64) y recibir su URL pública
async fn upload_photo(
    State(state): State<AppState>,
    Json(request): Json<UploadPhotoRequest>,
) -> Result<Json<ApiResponse<PhotoResponse>>, AppError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(request.data.as_bytes())
        .map_err(|_| AppError::BadRequest("La foto no es base64 válido".to_string()))?;

    let storage = PhotoStorage::new(&state.config);
    let url = storage.store_jpeg(&bytes).await?;

    Ok(Json(ApiResponse::success_with_message(
        PhotoResponse { url },
        "Foto subida exitosamente".to_string(),
    )))
}
