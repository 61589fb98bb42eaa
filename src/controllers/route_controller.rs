use crate::dto::auth_dto::ApiResponse;
use crate::dto::route_dto::{CreateRouteRequest, RouteResponse};
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_coordinates;
use sqlx::PgPool;
use validator::Validate;

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: String,
        request: CreateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        request.validate()?;

        // Las coordenadas son opcionales, pero si vienen deben estar en rango
        for coordinate in [request.origin, request.destination].into_iter().flatten() {
            validate_coordinates(coordinate.latitude, coordinate.longitude).map_err(|e| {
                AppError::BadRequest(format!("Coordenadas inválidas: {}", e))
            })?;
        }

        let route = self
            .repository
            .create(
                request.name,
                request.distance_km,
                user_id,
                request.origin.map(|c| c.latitude),
                request.origin.map(|c| c.longitude),
                request.destination.map(|c| c.latitude),
                request.destination.map(|c| c.longitude),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RouteResponse::from(route),
            "Ruta creada exitosamente".to_string(),
        ))
    }

    /// Listar las rutas del usuario; "ninguna ruta disponible" es un estado
    /// vacío válido, no un error
    pub async fn list(&self, user_id: &str) -> Result<Vec<RouteResponse>, AppError> {
        let routes = self.repository.list_by_user(user_id).await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }
}
