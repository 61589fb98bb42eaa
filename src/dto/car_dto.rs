use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::car::Car;

/// Request para registrar un coche nuevo
///
/// Todos los campos son obligatorios antes de tocar el almacén: la validación
/// falla sin crear estado parcial.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 100, message = "brand is required"))]
    pub brand: String,

    #[validate(length(min = 1, max = 100, message = "model is required"))]
    pub model: String,

    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub license_plate: String,

    #[validate(length(min = 1, message = "photo URL is required"))]
    pub photo: String,
}

/// Response de coche para la API
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub photo: String,
    pub owner: String,
    pub created_at: String,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.to_string(),
            brand: car.brand,
            model: car.model,
            license_plate: car.license_plate,
            photo: car.photo,
            owner: car.owner,
            created_at: car.created_at.to_rfc3339(),
        }
    }
}

/// Request para el borrado en lote por matrícula
#[derive(Debug, Deserialize)]
pub struct DeleteManyCarsRequest {
    pub license_plates: Vec<String>,
}

/// Fallo individual dentro de un borrado en lote
#[derive(Debug, Serialize)]
pub struct FailedCarDelete {
    pub license_plate: String,
    pub error: String,
}

/// Resultado del borrado en lote: best-effort por elemento, sin rollback
#[derive(Debug, Serialize)]
pub struct DeleteManyCarsResponse {
    pub deleted: Vec<String>,
    pub failed: Vec<FailedCarDelete>,
}

/// Request para subir una foto de coche (bytes en base64)
#[derive(Debug, Deserialize)]
pub struct UploadPhotoRequest {
    pub data: String,
}

/// Response con la URL pública de la foto almacenada
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub url: String,
}
