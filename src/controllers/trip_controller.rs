use crate::dto::auth_dto::ApiResponse;
use crate::dto::trip_dto::{CommitRouteRequest, TripResponse};
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct TripController {
    trips: TripRepository,
    routes: RouteRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            routes: RouteRepository::new(pool),
        }
    }

    /// Añadir una ruta del catálogo al histórico del usuario actual.
    /// Nombre y distancia se copian de la ruta en este momento; el registro
    /// resultante es inmutable.
    pub async fn commit(
        &self,
        user_id: String,
        request: CommitRouteRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        let route = self
            .routes
            .find_by_id(request.route_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))?;

        // El catálogo está scoped a su creador: solo se pueden committear rutas propias
        if route.user_id != user_id {
            return Err(AppError::Forbidden(
                "No tienes permiso para usar esta ruta".to_string(),
            ));
        }

        let trip = self
            .trips
            .append(route.name, Some(route.distance_km), user_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Ruta añadida al histórico exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.trips.list_by_user(user_id).await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }
}
