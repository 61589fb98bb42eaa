//! Servicios del sistema
//!
//! Lógica de negocio independiente de HTTP: autenticación contra el roster,
//! agregación de la rotación de conductores y almacenamiento de fotos.

pub mod auth_service;
pub mod photo_storage;
pub mod rotation_service;
