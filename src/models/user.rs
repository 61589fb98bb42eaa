//! Modelo de usuario
//!
//! Los usuarios no se crean ni destruyen en runtime: vienen del roster fijo
//! (ver `config::roster`). Este módulo solo define la identidad verificada
//! que devuelve el `Authenticator`.

use serde::{Deserialize, Serialize};

/// Identidad de un usuario autenticado del roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub username: String,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }
}
