use axum::{extract::State, routing::get, Extension, Json, Router};
use crate::controllers::rotation_controller::RotationController;
use crate::dto::rotation_dto::RotationResponse;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rotation_router() -> Router<AppState> {
    Router::new().route("/", get(get_rotation))
}

/// Totales por usuario del roster y próximo conductor, derivados del ledger
/// completo en cada lectura
async fn get_rotation(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<RotationResponse>, AppError> {
    let controller = RotationController::new(state.pool.clone(), state.roster.clone());
    let response = controller.board(&user.username).await?;
    Ok(Json(response))
}
