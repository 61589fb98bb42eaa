//! Middleware de autenticación por sesión
//!
//! Este módulo extrae el token de sesión del header Authorization,
//! lo resuelve contra el mapa de sesiones en memoria e inyecta el
//! usuario actual en las requests.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{state::AppState, utils::errors::AppError};

/// Usuario de la sesión actual que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

/// Extraer el token Bearer del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Middleware de sesión: sin token válido la request no pasa
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Token de sesión requerido".to_string()))?;

    let session = state
        .get_session(&token)
        .await
        .ok_or_else(|| AppError::Unauthorized("Sesión inválida o expirada".to_string()))?;

    let current_user = CurrentUser {
        username: session.username,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc-123"),
        );
        assert_eq!(bearer_token(&headers), Some("abc-123".to_string()));
    }

    #[test]
    fn test_bearer_token_missing_or_malformed() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }
}
