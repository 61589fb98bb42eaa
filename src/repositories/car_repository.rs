use crate::models::car::Car;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use chrono::Utc;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        brand: String,
        model: String,
        license_plate: String,
        photo: String,
        owner: String,
    ) -> Result<Car, AppError> {
        let id = Uuid::new_v4();

        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, brand, model, license_plate, photo, owner, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(brand)
        .bind(model)
        .bind(license_plate)
        .bind(photo)
        .bind(owner)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating car: {}", e)))?;

        Ok(car)
    }

    /// Listar todos los coches: la flota es compartida, cada usuario la ve completa
    pub async fn list_all(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing cars: {}", e)))?;

        Ok(cars)
    }

    pub async fn plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM cars WHERE license_plate = $1)",
        )
        .bind(license_plate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking license plate: {}", e)))?;

        Ok(result.0)
    }

    /// Borrar un coche por matrícula; NotFound si la matrícula no existe
    pub async fn delete_by_plate(&self, license_plate: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE license_plate = $1")
            .bind(license_plate)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting car: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Coche con matrícula '{}' no encontrado",
                license_plate
            )));
        }

        Ok(())
    }
}
