use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use crate::controllers::trip_controller::TripController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::trip_dto::{CommitRouteRequest, TripResponse};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(commit_trip))
        .route("/", get(list_trips))
}

async fn commit_trip(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<CommitRouteRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.commit(user.username, request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(&user.username).await?;
    Ok(Json(response))
}
