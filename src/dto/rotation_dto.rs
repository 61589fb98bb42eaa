use serde::Serialize;

/// Total acumulado de un usuario del roster, en orden de roster
#[derive(Debug, Serialize)]
pub struct StandingResponse {
    pub username: String,
    pub total_km: f64,
}

/// Estado de la rotación derivado del ledger completo
#[derive(Debug, Serialize)]
pub struct RotationResponse {
    pub standings: Vec<StandingResponse>,
    pub next_driver: Option<String>,
    pub my_total_km: f64,
}
