//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos, variables de entorno
//! y el roster fijo de usuarios.

pub mod database;
pub mod environment;
pub mod roster;

pub use environment::*;
