//! Modelo de Route
//!
//! Mapea exactamente a la tabla `rotas`: rutas candidatas con nombre,
//! distancia en kilómetros y coordenadas opcionales de origen/destino
//! elegidas en el mapa. Una ruta es de solo lectura tras su creación.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Ruta candidata creada por un usuario
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub distance_km: f64,
    pub user_id: String,
    pub origin_lat: Option<f64>,
    pub origin_lng: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}
