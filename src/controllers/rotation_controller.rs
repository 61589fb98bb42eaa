use crate::config::roster::Roster;
use crate::dto::rotation_dto::{RotationResponse, StandingResponse};
use crate::repositories::trip_repository::TripRepository;
use crate::services::rotation_service;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct RotationController {
    trips: TripRepository,
    roster: Roster,
}

impl RotationController {
    pub fn new(pool: PgPool, roster: Roster) -> Self {
        Self {
            trips: TripRepository::new(pool),
            roster,
        }
    }

    /// Leer el ledger completo y derivar la rotación. Las dos etapas están
    /// separadas a propósito: el fetch puede fallar (y se propaga como error
    /// explícito, nunca como un tablero a cero), la derivación es pura.
    pub async fn board(&self, current_user: &str) -> Result<RotationResponse, AppError> {
        let ledger = self.trips.list_all().await?;

        let usernames = self.roster.usernames();
        let board = rotation_service::aggregate(&usernames, &ledger);

        let standings = board
            .standings()
            .iter()
            .map(|s| StandingResponse {
                username: s.username.clone(),
                total_km: s.total_km,
            })
            .collect();

        Ok(RotationResponse {
            standings,
            next_driver: board.next_driver().map(|s| s.username.clone()),
            my_total_km: board.total_for(current_user),
        })
    }
}
