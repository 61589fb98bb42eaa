//! Modelo de TripRecord
//!
//! Mapea exactamente a la tabla `historic_routes`: el ledger append-only de
//! viajes completados. Nombre y distancia se copian de la ruta en el momento
//! del commit; un registro nunca se modifica ni se borra.
//!
//! `distance_km` es nullable: el almacén de documentos original admitía
//! registros sin distancia, y el agregador los cuenta como 0.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registro de viaje completado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TripRecord {
    pub id: Uuid,
    pub name: String,
    pub distance_km: Option<f64>,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}
