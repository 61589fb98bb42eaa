//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL (tablas `cars`, `rotas` y `historic_routes`).

pub mod car;
pub mod route;
pub mod trip;
pub mod user;
