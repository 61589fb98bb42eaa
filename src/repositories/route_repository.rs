use crate::models::route::Route;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use chrono::Utc;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        distance_km: f64,
        user_id: String,
        origin_lat: Option<f64>,
        origin_lng: Option<f64>,
        destination_lat: Option<f64>,
        destination_lng: Option<f64>,
    ) -> Result<Route, AppError> {
        let id = Uuid::new_v4();

        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO rotas (id, name, distance_km, user_id, origin_lat, origin_lng, destination_lat, destination_lng, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(distance_km)
        .bind(user_id)
        .bind(origin_lat)
        .bind(origin_lng)
        .bind(destination_lat)
        .bind(destination_lng)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating route: {}", e)))?;

        Ok(route)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM rotas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding route: {}", e)))?;

        Ok(route)
    }

    /// Listar las rutas de un usuario (el catálogo está scoped a su creador)
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM rotas WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing routes: {}", e)))?;

        Ok(routes)
    }
}
