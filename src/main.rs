mod config;
mod state;
mod database;
mod services;
mod utils;
mod models;
mod middleware;
mod controllers;
mod repositories;
mod routes;
mod dto;

use anyhow::Result;
use axum::{
    Router,
    routing::get,
    response::Json,
};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::{info, error};
use dotenvy::dotenv;
use serde_json::json;

use config::environment::EnvironmentConfig;
use config::roster::Roster;
use state::AppState;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rotation - Backend de coche compartido");
    info!("=============================================");

    let config = EnvironmentConfig::default();
    let roster = Roster::from_env();
    info!("👥 Roster configurado: {:?}", roster.usernames());

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let uploads_dir = config.uploads_dir.clone();

    // CORS: permisivo en desarrollo, restringido si CORS_ORIGINS lista orígenes
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config, roster);

    // Rutas que requieren sesión activa
    let protected = Router::new()
        .nest("/api/car", routes::car_routes::create_car_router())
        .nest("/api/route", routes::route_routes::create_route_router())
        .nest("/api/trip", routes::trip_routes::create_trip_router())
        .nest("/api/rotation", routes::rotation_routes::create_rotation_router())
        .nest("/api/photo", routes::photo_routes::create_photo_router())
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::session_middleware,
        ));

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(cors)
        .with_state(app_state);

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/login - Login contra el roster fijo");
    info!("   POST /api/auth/logout - Cerrar sesión");
    info!("   GET  /api/auth/me - Usuario de la sesión actual");
    info!("🚗 Endpoints - Car:");
    info!("   POST /api/car - Registrar coche");
    info!("   GET  /api/car - Listar coches");
    info!("   DELETE /api/car/:plate - Eliminar coche por matrícula");
    info!("   POST /api/car/delete-many - Eliminar coches en lote (best-effort)");
    info!("🗺️ Endpoints - Route:");
    info!("   POST /api/route - Crear ruta");
    info!("   GET  /api/route - Listar rutas del usuario");
    info!("📜 Endpoints - Trip:");
    info!("   POST /api/trip - Añadir ruta al histórico");
    info!("   GET  /api/trip - Histórico del usuario");
    info!("🏁 Endpoints - Rotation:");
    info!("   GET  /api/rotation - Totales por usuario y próximo conductor");
    info!("📷 Endpoints - Photo:");
    info!("   POST /api/photo - Subir foto de coche (base64)");
    info!("   GET  /uploads/* - Servir fotos almacenadas");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Backend de coche compartido funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
