use crate::dto::auth_dto::ApiResponse;
use crate::dto::car_dto::{
    CarResponse, CreateCarRequest, DeleteManyCarsRequest, DeleteManyCarsResponse, FailedCarDelete,
};
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::AppError;
use futures::future::join_all;
use sqlx::PgPool;
use validator::Validate;

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        owner: String,
        request: CreateCarRequest,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        // Validar campos antes de tocar el almacén: un fallo aquí no crea estado parcial
        request.validate()?;

        // Verificar que la matrícula no esté ya registrada
        if self.repository.plate_exists(&request.license_plate).await? {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        let car = self
            .repository
            .create(
                request.brand,
                request.model,
                request.license_plate,
                request.photo,
                owner,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Coche registrado exitosamente".to_string(),
        ))
    }

    /// Listar la flota completa; una lista vacía es un estado válido, no un error
    pub async fn list(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.list_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn delete(&self, license_plate: &str) -> Result<(), AppError> {
        self.repository.delete_by_plate(license_plate).await
    }

    /// Borrado en lote: un delete por matrícula seleccionada, best-effort.
    /// El fallo de un elemento no aborta el resto y no hay rollback de los
    /// ya borrados; los fallos parciales se reportan al llamador.
    pub async fn delete_many(
        &self,
        request: DeleteManyCarsRequest,
    ) -> Result<ApiResponse<DeleteManyCarsResponse>, AppError> {
        if request.license_plates.is_empty() {
            return Err(AppError::BadRequest(
                "No hay matrículas seleccionadas".to_string(),
            ));
        }

        let repository = &self.repository;
        let results = join_all(request.license_plates.iter().map(|plate| async move {
            (plate.clone(), repository.delete_by_plate(plate).await)
        }))
        .await;

        let mut deleted = Vec::new();
        let mut failed = Vec::new();
        for (license_plate, result) in results {
            match result {
                Ok(()) => deleted.push(license_plate),
                Err(e) => failed.push(FailedCarDelete {
                    license_plate,
                    error: e.to_string(),
                }),
            }
        }

        let message = if failed.is_empty() {
            format!("{} coche(s) eliminados exitosamente", deleted.len())
        } else {
            format!(
                "{} coche(s) eliminados, {} fallaron",
                deleted.len(),
                failed.len()
            )
        };

        Ok(ApiResponse::success_with_message(
            DeleteManyCarsResponse { deleted, failed },
            message,
        ))
    }
}
