//! Agregador de rotación de conductores
//!
//! Derivación pura sobre el ledger completo de viajes: suma la distancia
//! acumulada por usuario y decide quién conduce a continuación (el usuario
//! del roster con el total mínimo). Se recalcula desde cero en cada lectura;
//! no hay estado incremental ni efectos secundarios.
//!
//! Reglas:
//! - El acumulador arranca con cada usuario del roster a 0, así los usuarios
//!   sin viajes aparecen igualmente en la clasificación.
//! - La distancia de un registro cuyo `user_id` no está en el roster se
//!   acumula pero queda fuera de la clasificación y de la decisión.
//! - Un registro sin distancia (o con un valor no finito) contribuye 0.
//! - Empates: gana la primera posición del roster (orden estable, nunca
//!   alfabético ni aleatorio).

use std::collections::HashMap;
use serde::Serialize;
use crate::models::trip::TripRecord;

/// Total acumulado de un usuario del roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStanding {
    pub username: String,
    pub total_km: f64,
}

/// Resultado de la agregación: clasificación en orden de roster más el
/// acumulador completo (incluye usuarios fuera del roster)
#[derive(Debug, Clone)]
pub struct RotationBoard {
    standings: Vec<DriverStanding>,
    totals: HashMap<String, f64>,
}

impl RotationBoard {
    /// Una entrada por usuario del roster, en orden de roster
    pub fn standings(&self) -> &[DriverStanding] {
        &self.standings
    }

    /// El usuario del roster con el total mínimo; en caso de empate gana la
    /// primera posición del roster. None solo si el roster está vacío.
    pub fn next_driver(&self) -> Option<&DriverStanding> {
        let mut minimum: Option<&DriverStanding> = None;
        for standing in &self.standings {
            match minimum {
                Some(current) if standing.total_km < current.total_km => {
                    minimum = Some(standing);
                }
                None => minimum = Some(standing),
                _ => {}
            }
        }
        minimum
    }

    /// Total acumulado de un usuario cualquiera (0 si no tiene registros).
    /// Sale del mismo acumulador que la clasificación: las dos cifras no
    /// pueden divergir.
    pub fn total_for(&self, username: &str) -> f64 {
        self.totals.get(username).copied().unwrap_or(0.0)
    }
}

/// Contribución de un registro: un valor ausente o no finito cuenta como 0
fn contribution(record: &TripRecord) -> f64 {
    match record.distance_km {
        Some(km) if km.is_finite() => km,
        _ => 0.0,
    }
}

/// Derivar la rotación desde el ledger completo
pub fn aggregate(roster: &[String], ledger: &[TripRecord]) -> RotationBoard {
    // 1. Sembrar el acumulador con todo el roster a 0
    let mut totals: HashMap<String, f64> = HashMap::new();
    for username in roster {
        totals.insert(username.clone(), 0.0);
    }

    // 2. Sumar cada registro bajo su user_id, esté o no en el roster
    for record in ledger {
        *totals.entry(record.user_id.clone()).or_insert(0.0) += contribution(record);
    }

    // 3. Clasificación solo con entradas del roster, en orden de roster
    let standings = roster
        .iter()
        .map(|username| DriverStanding {
            username: username.clone(),
            total_km: totals.get(username).copied().unwrap_or(0.0),
        })
        .collect();

    RotationBoard { standings, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(user: &str, distance_km: Option<f64>) -> TripRecord {
        TripRecord {
            id: Uuid::new_v4(),
            name: "Trabalho".to_string(),
            distance_km,
            user_id: user.to_string(),
            timestamp: Utc::now(),
        }
    }

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_one_standing_per_roster_member() {
        let board = aggregate(
            &roster(&["Jony", "Fafa", "Danas", "Telmin"]),
            &[record("Jony", Some(10.0)), record("Otro", Some(99.0))],
        );
        assert_eq!(board.standings().len(), 4);
    }

    #[test]
    fn test_member_without_records_totals_zero() {
        let board = aggregate(
            &roster(&["Jony", "Fafa"]),
            &[record("Jony", Some(7.5))],
        );
        assert_eq!(board.total_for("Fafa"), 0.0);
        assert_eq!(board.standings()[1].total_km, 0.0);
    }

    #[test]
    fn test_observed_scenario() {
        // Roster [Jony, Danas, Fafa, Telmin]; viajes Jony 12, Danas 5, Jony 3
        let board = aggregate(
            &roster(&["Jony", "Danas", "Fafa", "Telmin"]),
            &[
                record("Jony", Some(12.0)),
                record("Danas", Some(5.0)),
                record("Jony", Some(3.0)),
            ],
        );

        assert_eq!(board.total_for("Jony"), 15.0);
        assert_eq!(board.total_for("Danas"), 5.0);
        assert_eq!(board.total_for("Fafa"), 0.0);
        assert_eq!(board.total_for("Telmin"), 0.0);
        // Fafa y Telmin empatan a 0; gana Fafa por posición en el roster
        assert_eq!(board.next_driver().unwrap().username, "Fafa");
    }

    #[test]
    fn test_empty_ledger_next_driver_is_first_roster_entry() {
        let board = aggregate(&roster(&["Danas", "Jony"]), &[]);
        assert!(board.standings().iter().all(|s| s.total_km == 0.0));
        assert_eq!(board.next_driver().unwrap().username, "Danas");
    }

    #[test]
    fn test_tie_break_is_roster_order() {
        let board = aggregate(
            &roster(&["A", "B", "C"]),
            &[
                record("A", Some(10.0)),
                record("B", Some(10.0)),
                record("C", Some(10.0)),
            ],
        );
        assert_eq!(board.next_driver().unwrap().username, "A");
    }

    #[test]
    fn test_off_roster_user_excluded_from_standings_and_decision() {
        let board = aggregate(
            &roster(&["Jony", "Fafa"]),
            &[record("Intruso", Some(1000.0)), record("Jony", Some(2.0))],
        );

        assert!(board.standings().iter().all(|s| s.username != "Intruso"));
        // El total del intruso se acumula pero no decide
        assert_eq!(board.total_for("Intruso"), 1000.0);
        assert_eq!(board.next_driver().unwrap().username, "Fafa");
    }

    #[test]
    fn test_next_driver_total_is_minimal() {
        let board = aggregate(
            &roster(&["Jony", "Fafa", "Danas"]),
            &[
                record("Jony", Some(20.0)),
                record("Fafa", Some(5.0)),
                record("Danas", Some(8.0)),
            ],
        );

        let next = board.next_driver().unwrap();
        assert!(board.standings().iter().all(|s| next.total_km <= s.total_km));
        assert_eq!(next.username, "Fafa");
    }

    #[test]
    fn test_missing_or_non_finite_distance_counts_as_zero() {
        let board = aggregate(
            &roster(&["Jony"]),
            &[
                record("Jony", Some(4.0)),
                record("Jony", None),
                record("Jony", Some(f64::NAN)),
                record("Jony", Some(f64::INFINITY)),
            ],
        );
        assert_eq!(board.total_for("Jony"), 4.0);
    }

    #[test]
    fn test_idempotent_for_identical_ledger() {
        let ledger = vec![
            record("Jony", Some(12.0)),
            record("Danas", Some(5.0)),
            record("Jony", Some(3.0)),
        ];
        let names = roster(&["Jony", "Danas", "Fafa", "Telmin"]);

        let first = aggregate(&names, &ledger);
        let second = aggregate(&names, &ledger);

        assert_eq!(first.standings(), second.standings());
        assert_eq!(
            first.next_driver().map(|s| &s.username),
            second.next_driver().map(|s| &s.username)
        );
    }

    #[test]
    fn test_empty_roster_has_no_next_driver() {
        let board = aggregate(&[], &[record("Jony", Some(3.0))]);
        assert!(board.standings().is_empty());
        assert!(board.next_driver().is_none());
    }
}
