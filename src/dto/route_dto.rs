use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::route::Route;

/// Par de coordenadas geográficas elegidas en el mapa
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinateDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Request para crear una ruta candidata
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "distance_km must be non-negative"))]
    pub distance_km: f64,

    pub origin: Option<CoordinateDto>,
    pub destination: Option<CoordinateDto>,
}

/// Response de ruta para la API
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: String,
    pub name: String,
    pub distance_km: f64,
    pub user_id: String,
    pub origin: Option<CoordinateDto>,
    pub destination: Option<CoordinateDto>,
    pub created_at: String,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        let origin = match (route.origin_lat, route.origin_lng) {
            (Some(latitude), Some(longitude)) => Some(CoordinateDto { latitude, longitude }),
            _ => None,
        };
        let destination = match (route.destination_lat, route.destination_lng) {
            (Some(latitude), Some(longitude)) => Some(CoordinateDto { latitude, longitude }),
            _ => None,
        };

        Self {
            id: route.id.to_string(),
            name: route.name,
            distance_km: route.distance_km,
            user_id: route.user_id,
            origin,
            destination,
            created_at: route.created_at.to_rfc3339(),
        }
    }
}
