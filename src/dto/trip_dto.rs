use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::trip::TripRecord;

/// Request para añadir una ruta del catálogo al histórico
#[derive(Debug, Deserialize)]
pub struct CommitRouteRequest {
    pub route_id: Uuid,
}

/// Response de registro del histórico
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: String,
    pub name: String,
    pub distance_km: Option<f64>,
    pub user_id: String,
    pub timestamp: String,
}

impl From<TripRecord> for TripResponse {
    fn from(trip: TripRecord) -> Self {
        Self {
            id: trip.id.to_string(),
            name: trip.name,
            distance_km: trip.distance_km,
            user_id: trip.user_id,
            timestamp: trip.timestamp.to_rfc3339(),
        }
    }
}
