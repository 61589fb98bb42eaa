use serde::{Deserialize, Serialize};

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub username: Option<String>,
    pub expires_at: Option<String>,
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn success(token: String, username: String, expires_at: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            username: Some(username),
            expires_at: Some(expires_at),
            message: None,
        }
    }
}

// Usuario de la sesión actual
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub expires_at: String,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
