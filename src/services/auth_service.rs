//! Servicio de autenticación
//!
//! Verificación de credenciales detrás del trait `Authenticator`: el roster
//! fijo queda como dato de configuración y la comparación en texto plano
//! (stub de mundo cerrado) vive solo en `RosterAuthenticator`.

use async_trait::async_trait;
use crate::config::roster::Roster;
use crate::models::user::UserIdentity;
use crate::utils::errors::AppError;

/// Interfaz de verificación de credenciales
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, username: &str, secret: &str) -> Result<UserIdentity, AppError>;
}

/// Autenticador sobre la lista cerrada de usuarios
pub struct RosterAuthenticator {
    roster: Roster,
}

impl RosterAuthenticator {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

#[async_trait]
impl Authenticator for RosterAuthenticator {
    async fn authenticate(&self, username: &str, secret: &str) -> Result<UserIdentity, AppError> {
        if username.trim().is_empty() || secret.is_empty() {
            return Err(AppError::BadRequest(
                "Usuario y contraseña son requeridos".to_string(),
            ));
        }

        match self.roster.find(username) {
            Some(member) if member.password == secret => {
                Ok(UserIdentity::new(member.username.clone()))
            }
            _ => Err(AppError::Unauthorized(
                "Usuario o contraseña inválidos".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_authenticate_valid_member() {
        let authenticator = RosterAuthenticator::new(Roster::default());
        let identity = authenticator.authenticate("Jony", "1234").await.unwrap();
        assert_eq!(identity.username, "Jony");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let authenticator = RosterAuthenticator::new(Roster::default());
        let result = authenticator.authenticate("Jony", "0000").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let authenticator = RosterAuthenticator::new(Roster::default());
        let result = authenticator.authenticate("Desconocido", "1234").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_authenticate_empty_fields() {
        let authenticator = RosterAuthenticator::new(Roster::default());
        let result = authenticator.authenticate("", "1234").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
