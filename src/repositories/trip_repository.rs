use crate::models::trip::TripRecord;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use chrono::Utc;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Añadir un registro al ledger. El histórico es append-only: no hay
    /// update ni delete en este repositorio.
    pub async fn append(
        &self,
        name: String,
        distance_km: Option<f64>,
        user_id: String,
    ) -> Result<TripRecord, AppError> {
        let id = Uuid::new_v4();

        let trip = sqlx::query_as::<_, TripRecord>(
            r#"
            INSERT INTO historic_routes (id, name, distance_km, user_id, "timestamp")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(distance_km)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error appending trip: {}", e)))?;

        Ok(trip)
    }

    /// Histórico de un usuario, del más reciente al más antiguo
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<TripRecord>, AppError> {
        let trips = sqlx::query_as::<_, TripRecord>(
            r#"SELECT * FROM historic_routes WHERE user_id = $1 ORDER BY "timestamp" DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing trips: {}", e)))?;

        Ok(trips)
    }

    /// Ledger completo de todos los usuarios: la ruta de lectura del agregador
    /// de rotación, que re-deriva los totales desde el conjunto entero
    pub async fn list_all(&self) -> Result<Vec<TripRecord>, AppError> {
        let trips = sqlx::query_as::<_, TripRecord>(
            r#"SELECT * FROM historic_routes ORDER BY "timestamp" ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error reading trip ledger: {}", e)))?;

        Ok(trips)
    }
}
