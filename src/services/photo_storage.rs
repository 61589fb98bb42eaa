//! Almacenamiento de fotos de coches
//!
//! Blob storage sobre disco: recibe los bytes de la imagen, los guarda bajo
//! un nombre de archivo basado en timestamp (`cars/<millis>.jpg`) y devuelve
//! la URL pública desde la que se puede recuperar. El campo `photo` del
//! coche almacena esa URL, nunca los bytes.

use std::path::PathBuf;
use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Tamaño máximo aceptado para una foto (bytes decodificados)
const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

pub struct PhotoStorage {
    uploads_dir: PathBuf,
    public_base_url: String,
}

impl PhotoStorage {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            uploads_dir: PathBuf::from(&config.uploads_dir),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Guardar una foto y devolver su URL pública
    pub async fn store_jpeg(&self, bytes: &[u8]) -> Result<String, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("La foto está vacía".to_string()));
        }
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(AppError::BadRequest(format!(
                "La foto supera el tamaño máximo de {} bytes",
                MAX_PHOTO_BYTES
            )));
        }

        let filename = format!("{}.jpg", chrono::Utc::now().timestamp_millis());
        let cars_dir = self.uploads_dir.join("cars");

        tokio::fs::create_dir_all(&cars_dir)
            .await
            .map_err(|e| AppError::Storage(format!("Error creating uploads dir: {}", e)))?;

        let path = cars_dir.join(&filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Storage(format!("Error writing photo: {}", e)))?;

        tracing::debug!("📷 Foto almacenada en {:?}", path);
        Ok(format!("{}/uploads/cars/{}", self.public_base_url, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &std::path::Path) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: vec!["*".to_string()],
            session_ttl_hours: 24,
            uploads_dir: dir.to_string_lossy().to_string(),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_jpeg_returns_public_url() {
        let dir = std::env::temp_dir().join(format!("car_rotation_test_{}", uuid::Uuid::new_v4()));
        let storage = PhotoStorage::new(&test_config(&dir));

        let url = storage.store_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0]).await.unwrap();
        assert!(url.starts_with("http://localhost:3000/uploads/cars/"));
        assert!(url.ends_with(".jpg"));

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn test_store_jpeg_rejects_empty_payload() {
        let dir = std::env::temp_dir().join(format!("car_rotation_test_{}", uuid::Uuid::new_v4()));
        let storage = PhotoStorage::new(&test_config(&dir));

        let result = storage.store_jpeg(&[]).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
