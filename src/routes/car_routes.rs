use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use crate::controllers::car_controller::CarController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::car_dto::{
    CarResponse, CreateCarRequest, DeleteManyCarsRequest, DeleteManyCarsResponse,
};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car))
        .route("/", get(list_cars))
        .route("/:plate", delete(delete_car))
        .route("/delete-many", post(delete_many_cars))
}

async fn create_car(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<CreateCarRequest>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(user.username, request).await?;
    Ok(Json(response))
}

async fn list_cars(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(&plate).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Coche eliminado exitosamente"
    })))
}

async fn delete_many_cars(
    State(state): State<AppState>,
    Json(request): Json<DeleteManyCarsRequest>,
) -> Result<Json<ApiResponse<DeleteManyCarsResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.delete_many(request).await?;
    Ok(Json(response))
}
