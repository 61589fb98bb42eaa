//! Modelo de Car
//!
//! Mapea exactamente a la tabla `cars`. La matrícula (`license_plate`) es la
//! clave de selección y borrado; el campo `photo` almacena la URL de la foto,
//! nunca los bytes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Coche registrado por un usuario del roster
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub photo: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}
